//! Notes API handlers.
//!
//! ```text
//! GET /api/v1/notes?search=milk&category=Work
//! GET /api/v1/notes/categories
//! GET /api/v1/notes/{id}
//! POST /api/v1/notes
//! PUT /api/v1/notes/{id}
//! DELETE /api/v1/notes/{id}
//! ```
//!
//! Every handler resolves the session owner before touching the domain, so
//! unauthenticated requests are rejected with 401 up front.

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{Error, NOT_FOUND_MESSAGE, Note, NoteDraft, NoteFilter, NoteId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Query string accepted by the listing endpoint.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListNotesQuery {
    /// Case-insensitive text searched in title and content.
    pub search: Option<String>,
    /// Exact category to keep.
    pub category: Option<String>,
}

impl From<ListNotesQuery> for NoteFilter {
    fn from(query: ListNotesQuery) -> Self {
        NoteFilter::new(query.search, query.category)
    }
}

/// Request payload for creating or updating a note.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NoteRequest {
    #[schema(example = "Milk")]
    pub title: Option<String>,
    #[schema(example = "buy milk")]
    pub content: Option<String>,
    #[schema(example = "General")]
    pub category: Option<String>,
}

impl From<NoteRequest> for NoteDraft {
    fn from(request: NoteRequest) -> Self {
        NoteDraft {
            title: request.title,
            content: request.content,
            category: request.category,
        }
    }
}

/// Response payload for a note.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NoteResponse {
    #[schema(example = 1)]
    pub id: u64,
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    pub user_id: String,
    pub title: String,
    pub content: String,
    pub category: String,
    /// RFC 3339 timestamp of creation or last update.
    pub date: String,
}

impl From<Note> for NoteResponse {
    fn from(note: Note) -> Self {
        Self {
            id: note.id.get(),
            user_id: note.owner_id.to_string(),
            title: note.title,
            content: note.content,
            category: note.category,
            date: note.updated_at.to_rfc3339(),
        }
    }
}

/// Parse a path segment into a note id; unusable ids read as missing notes.
pub(crate) fn parse_note_id(raw: &str) -> Result<NoteId, Error> {
    raw.parse::<NoteId>()
        .map_err(|_| Error::not_found(NOT_FOUND_MESSAGE))
}

/// List the caller's notes.
#[utoipa::path(
    get,
    path = "/api/v1/notes",
    params(ListNotesQuery),
    responses(
        (status = 200, description = "Matching notes in creation order", body = [NoteResponse]),
        (status = 400, description = "Invalid query", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["notes"],
    operation_id = "listNotes"
)]
#[get("/notes")]
pub async fn list_notes(
    state: web::Data<HttpState>,
    session: SessionContext,
    query: web::Query<ListNotesQuery>,
) -> ApiResult<web::Json<Vec<NoteResponse>>> {
    let owner_id = session.require_user_id()?;
    let filter = NoteFilter::from(query.into_inner());
    let notes = state.notes.list_notes(&owner_id, &filter).await?;
    Ok(web::Json(notes.into_iter().map(NoteResponse::from).collect()))
}

/// Distinct categories used by the caller's notes.
#[utoipa::path(
    get,
    path = "/api/v1/notes/categories",
    responses(
        (status = 200, description = "Categories in first-seen order", body = [String]),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["notes"],
    operation_id = "listNoteCategories"
)]
#[get("/notes/categories")]
pub async fn list_categories(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<Vec<String>>> {
    let owner_id = session.require_user_id()?;
    Ok(web::Json(state.notes.list_categories(&owner_id).await?))
}

/// Fetch one note.
#[utoipa::path(
    get,
    path = "/api/v1/notes/{id}",
    params(("id" = String, Path, description = "Note identifier")),
    responses(
        (status = 200, description = "The note", body = NoteResponse),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 404, description = "Note not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["notes"],
    operation_id = "getNote"
)]
#[get("/notes/{id}")]
pub async fn get_note(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> ApiResult<web::Json<NoteResponse>> {
    let owner_id = session.require_user_id()?;
    let id = parse_note_id(&path)?;
    let note = state.notes.get_note(&owner_id, id).await?;
    Ok(web::Json(NoteResponse::from(note)))
}

/// Create a note owned by the caller.
#[utoipa::path(
    post,
    path = "/api/v1/notes",
    request_body = NoteRequest,
    responses(
        (status = 201, description = "Created note", body = NoteResponse),
        (status = 400, description = "Title and content are required", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["notes"],
    operation_id = "createNote"
)]
#[post("/notes")]
pub async fn create_note(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<NoteRequest>,
) -> ApiResult<HttpResponse> {
    let owner_id = session.require_user_id()?;
    let note = state
        .notes_command
        .create_note(&owner_id, NoteDraft::from(payload.into_inner()))
        .await?;
    Ok(HttpResponse::Created().json(NoteResponse::from(note)))
}

/// Replace the fields of an owned note.
///
/// A missing note is reported before any validation failure.
#[utoipa::path(
    put,
    path = "/api/v1/notes/{id}",
    request_body = NoteRequest,
    params(("id" = String, Path, description = "Note identifier")),
    responses(
        (status = 200, description = "Updated note", body = NoteResponse),
        (status = 400, description = "Title and content are required", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 404, description = "Note not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["notes"],
    operation_id = "updateNote"
)]
#[put("/notes/{id}")]
pub async fn update_note(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
    payload: web::Json<NoteRequest>,
) -> ApiResult<web::Json<NoteResponse>> {
    let owner_id = session.require_user_id()?;
    let id = parse_note_id(&path)?;
    let note = state
        .notes_command
        .update_note(&owner_id, id, NoteDraft::from(payload.into_inner()))
        .await?;
    Ok(web::Json(NoteResponse::from(note)))
}

/// Delete an owned note.
#[utoipa::path(
    delete,
    path = "/api/v1/notes/{id}",
    params(("id" = String, Path, description = "Note identifier")),
    responses(
        (status = 204, description = "Note deleted"),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 404, description = "Note not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["notes"],
    operation_id = "deleteNote"
)]
#[delete("/notes/{id}")]
pub async fn delete_note(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let owner_id = session.require_user_id()?;
    let id = parse_note_id(&path)?;
    state.notes_command.delete_note(&owner_id, id).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Register the notes endpoints on an `/api/v1` scope.
///
/// `categories` is registered ahead of `{id}` so it is not captured as an id.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list_categories)
        .service(list_notes)
        .service(get_note)
        .service(create_note)
        .service(update_note)
        .service(delete_note);
}

#[cfg(test)]
#[path = "notes_tests.rs"]
mod tests;
