//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the JSON notes API, the login endpoint and the health
//! probes, plus the schema wrappers that document domain types without
//! coupling them to utoipa. Swagger UI serves it in debug builds.

use crate::inbound::http::notes::{NoteRequest, NoteResponse};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};
use crate::inbound::http::users::LoginRequest;
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// Adds the session cookie security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "session",
                "Session cookie issued by POST /api/v1/login.",
            ))),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Notes API",
        description = "Session-authenticated personal notes with search and categories."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("SessionCookie" = [])),
    paths(
        crate::inbound::http::users::login,
        crate::inbound::http::notes::list_notes,
        crate::inbound::http::notes::list_categories,
        crate::inbound::http::notes::get_note,
        crate::inbound::http::notes::create_note,
        crate::inbound::http::notes::update_note,
        crate::inbound::http::notes::delete_note,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        LoginRequest,
        NoteRequest,
        NoteResponse
    )),
    tags(
        (name = "users", description = "Login"),
        (name = "notes", description = "Owner-scoped note operations"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
