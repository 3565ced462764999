//! Page adapter: HTML views and form posts over the same domain ports as the
//! JSON API.
//!
//! Failures never surface as JSON here. Missing sessions redirect to the
//! login form, missing notes and unknown paths render the not-found view,
//! bad input renders the error view with its message and anything else
//! renders a generic error page carrying only the trace id.

pub mod auth;
pub mod contact;
pub mod notes;
pub mod profile;
pub mod templates;

use actix_web::http::{StatusCode, header};
use actix_web::{HttpResponse, web};
use serde::Serialize;
use tracing::error;

use crate::domain::{Error, ErrorCode, TraceId, UserId};
use crate::inbound::http::session::SessionContext;

use self::templates::{PageRenderer, view};

/// Where unauthenticated page requests are sent.
pub const LOGIN_PATH: &str = "/login";

/// 303 redirect to `location`.
pub(crate) fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// Render `name` with `context` as an HTML response with `status`.
pub(crate) fn html<T: Serialize>(
    renderer: &PageRenderer,
    status: StatusCode,
    name: &str,
    context: &T,
) -> Result<HttpResponse, Error> {
    let body = renderer.render(name, context)?;
    Ok(HttpResponse::build(status)
        .content_type("text/html; charset=utf-8")
        .body(body))
}

/// Heading of the not-found view for paths no route serves.
pub const PAGE_NOT_FOUND_MESSAGE: &str = "Page not found";

#[derive(Serialize)]
struct ErrorView {
    username: Option<String>,
    message: Option<String>,
    trace_id: Option<String>,
}

/// Turn a failed page handler into a redirect or an HTML error view.
pub(crate) fn failure_page(
    renderer: &PageRenderer,
    username: Option<String>,
    err: &Error,
) -> HttpResponse {
    let rendered = match err.code() {
        ErrorCode::Unauthorized => return redirect(LOGIN_PATH),
        ErrorCode::NotFound => html(
            renderer,
            StatusCode::NOT_FOUND,
            view::NOT_FOUND,
            &ErrorView {
                username,
                message: Some(err.message().to_owned()),
                trace_id: None,
            },
        ),
        ErrorCode::InvalidRequest => html(
            renderer,
            StatusCode::BAD_REQUEST,
            view::ERROR,
            &ErrorView {
                username,
                message: Some(err.message().to_owned()),
                trace_id: None,
            },
        ),
        _ => {
            error!(code = ?err.code(), message = %err.message(), "page request failed");
            let trace_id = err
                .trace_id()
                .map(str::to_owned)
                .or_else(|| TraceId::current().map(|id| id.to_string()));
            html(
                renderer,
                StatusCode::INTERNAL_SERVER_ERROR,
                view::ERROR,
                &ErrorView {
                    username,
                    message: None,
                    trace_id,
                },
            )
        }
    };
    rendered.unwrap_or_else(|render_err| {
        error!(error = %render_err.message(), "error view failed to render");
        HttpResponse::InternalServerError()
            .content_type("text/plain; charset=utf-8")
            .body("Internal server error")
    })
}

/// The owner and display name of a page session.
pub(crate) struct PageUser {
    pub(crate) id: UserId,
    pub(crate) username: Option<String>,
}

impl PageUser {
    /// Resolve the session owner, failing with `Unauthorized` when absent.
    pub(crate) fn from_session(session: &SessionContext) -> Result<Self, Error> {
        let id = session.require_user_id()?;
        let username = session.username()?;
        Ok(Self { id, username })
    }
}

/// Fallback for paths no route serves.
pub async fn page_not_found(
    renderer: web::Data<PageRenderer>,
    session: SessionContext,
) -> HttpResponse {
    let username = session.username().ok().flatten();
    failure_page(&renderer, username, &Error::not_found(PAGE_NOT_FOUND_MESSAGE))
}

/// Register every page route and the not-found fallback.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(auth::configure)
        .configure(notes::configure)
        .configure(profile::configure)
        .configure(contact::configure)
        .default_service(web::to(page_not_found));
}
