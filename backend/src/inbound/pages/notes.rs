//! Note pages.
//!
//! ```text
//! GET  /?search=&category=
//! GET  /add            POST /add
//! GET  /edit/{id}      POST /edit/{id}
//! POST /delete/{id}
//! GET  /about
//! ```

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};

use crate::domain::{Error, ErrorCode, Note, NoteDraft, NoteFilter};
use crate::inbound::http::notes::parse_note_id;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

use super::templates::{PageRenderer, view};
use super::{PageUser, failure_page, html, redirect};

const DISPLAY_DATE_FORMAT: &str = "%Y-%m-%d %H:%M";
const MALFORMED_QUERY_MESSAGE: &str = "Malformed query string";

/// Filters accepted by the index page.
#[derive(Debug, Default, Deserialize)]
pub struct IndexQuery {
    pub search: Option<String>,
    pub category: Option<String>,
}

/// Fields posted by the add and edit forms.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct NoteForm {
    pub title: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
}

impl From<NoteForm> for NoteDraft {
    fn from(form: NoteForm) -> Self {
        NoteDraft {
            title: form.title,
            content: form.content,
            category: form.category,
        }
    }
}

#[derive(Serialize)]
struct NoteView {
    id: u64,
    title: String,
    content: String,
    category: String,
    date: String,
    display_date: String,
}

impl From<Note> for NoteView {
    fn from(note: Note) -> Self {
        Self {
            id: note.id.get(),
            display_date: note.updated_at.format(DISPLAY_DATE_FORMAT).to_string(),
            date: note.updated_at.to_rfc3339(),
            title: note.title,
            content: note.content,
            category: note.category,
        }
    }
}

#[derive(Serialize)]
struct IndexView {
    username: Option<String>,
    notes: Vec<NoteView>,
    search: String,
    category: String,
    categories: Vec<String>,
}

#[derive(Serialize)]
struct FormView<'a> {
    username: Option<String>,
    heading: &'a str,
    note_id: Option<u64>,
    error: Option<String>,
    title: String,
    content: String,
    category: String,
}

impl<'a> FormView<'a> {
    fn blank(username: Option<String>, heading: &'a str, note_id: Option<u64>) -> Self {
        Self {
            username,
            heading,
            note_id,
            error: None,
            title: String::new(),
            content: String::new(),
            category: String::new(),
        }
    }

    fn with_values(mut self, form: &NoteForm) -> Self {
        self.title = form.title.clone().unwrap_or_default();
        self.content = form.content.clone().unwrap_or_default();
        self.category = form.category.clone().unwrap_or_default();
        self
    }
}

fn session_username(session: &SessionContext) -> Option<String> {
    session.username().ok().flatten()
}

fn settle(
    renderer: &PageRenderer,
    session: &SessionContext,
    result: Result<HttpResponse, Error>,
) -> HttpResponse {
    result.unwrap_or_else(|err| failure_page(renderer, session_username(session), &err))
}

/// Re-render the form with the validation message, or fail the request.
fn invalid_form(
    renderer: &PageRenderer,
    err: Error,
    view_model: FormView<'_>,
) -> Result<HttpResponse, Error> {
    if err.code() != ErrorCode::InvalidRequest {
        return Err(err);
    }
    let view_model = FormView {
        error: Some(err.message().to_owned()),
        ..view_model
    };
    html(renderer, StatusCode::BAD_REQUEST, view::NOTE_FORM, &view_model)
}

async fn show_index(
    state: &HttpState,
    renderer: &PageRenderer,
    session: &SessionContext,
    query: IndexQuery,
) -> Result<HttpResponse, Error> {
    let user = PageUser::from_session(session)?;
    let filter = NoteFilter::new(query.search, query.category);
    let notes = state.notes.list_notes(&user.id, &filter).await?;
    let categories = state.notes.list_categories(&user.id).await?;
    let view_model = IndexView {
        username: user.username,
        notes: notes.into_iter().map(NoteView::from).collect(),
        search: filter.search().unwrap_or_default().to_owned(),
        category: filter.category().unwrap_or_default().to_owned(),
        categories,
    };
    html(renderer, StatusCode::OK, view::INDEX, &view_model)
}

/// Filtered list of the owner's notes.
#[get("/")]
pub async fn index(
    state: web::Data<HttpState>,
    renderer: web::Data<PageRenderer>,
    session: SessionContext,
    query: Result<web::Query<IndexQuery>, actix_web::Error>,
) -> HttpResponse {
    let result = match query {
        Ok(query) => show_index(&state, &renderer, &session, query.into_inner()).await,
        Err(_) => PageUser::from_session(&session)
            .and_then(|_| Err::<HttpResponse, _>(Error::invalid_request(MALFORMED_QUERY_MESSAGE))),
    };
    settle(&renderer, &session, result)
}

/// Empty note form.
#[get("/add")]
pub async fn add_form(renderer: web::Data<PageRenderer>, session: SessionContext) -> HttpResponse {
    let result = PageUser::from_session(&session).and_then(|user| {
        let view_model = FormView::blank(user.username, "Add note", None);
        html(&renderer, StatusCode::OK, view::NOTE_FORM, &view_model)
    });
    settle(&renderer, &session, result)
}

async fn create_from_form(
    state: &HttpState,
    renderer: &PageRenderer,
    session: &SessionContext,
    form: NoteForm,
) -> Result<HttpResponse, Error> {
    let user = PageUser::from_session(session)?;
    let view_model =
        FormView::blank(user.username.clone(), "Add note", None).with_values(&form);
    match state
        .notes_command
        .create_note(&user.id, NoteDraft::from(form))
        .await
    {
        Ok(_) => Ok(redirect("/")),
        Err(err) => invalid_form(renderer, err, view_model),
    }
}

/// Create a note from the posted form.
#[post("/add")]
pub async fn add_submit(
    state: web::Data<HttpState>,
    renderer: web::Data<PageRenderer>,
    session: SessionContext,
    form: web::Form<NoteForm>,
) -> HttpResponse {
    let result = create_from_form(&state, &renderer, &session, form.into_inner()).await;
    settle(&renderer, &session, result)
}

async fn show_edit_form(
    state: &HttpState,
    renderer: &PageRenderer,
    session: &SessionContext,
    raw_id: &str,
) -> Result<HttpResponse, Error> {
    let user = PageUser::from_session(session)?;
    let id = parse_note_id(raw_id)?;
    let note = state.notes.get_note(&user.id, id).await?;
    let view_model = FormView {
        title: note.title,
        content: note.content,
        category: note.category,
        ..FormView::blank(user.username, "Edit note", Some(id.get()))
    };
    html(renderer, StatusCode::OK, view::NOTE_FORM, &view_model)
}

/// Form pre-filled with an owned note.
#[get("/edit/{id}")]
pub async fn edit_form(
    state: web::Data<HttpState>,
    renderer: web::Data<PageRenderer>,
    session: SessionContext,
    path: web::Path<String>,
) -> HttpResponse {
    let result = show_edit_form(&state, &renderer, &session, &path).await;
    settle(&renderer, &session, result)
}

async fn update_from_form(
    state: &HttpState,
    renderer: &PageRenderer,
    session: &SessionContext,
    raw_id: &str,
    form: NoteForm,
) -> Result<HttpResponse, Error> {
    let user = PageUser::from_session(session)?;
    let id = parse_note_id(raw_id)?;
    let view_model = FormView::blank(user.username.clone(), "Edit note", Some(id.get()))
        .with_values(&form);
    match state
        .notes_command
        .update_note(&user.id, id, NoteDraft::from(form))
        .await
    {
        Ok(_) => Ok(redirect("/")),
        Err(err) => invalid_form(renderer, err, view_model),
    }
}

/// Apply the posted form to an owned note.
#[post("/edit/{id}")]
pub async fn edit_submit(
    state: web::Data<HttpState>,
    renderer: web::Data<PageRenderer>,
    session: SessionContext,
    path: web::Path<String>,
    form: web::Form<NoteForm>,
) -> HttpResponse {
    let result = update_from_form(&state, &renderer, &session, &path, form.into_inner()).await;
    settle(&renderer, &session, result)
}

async fn delete_owned(
    state: &HttpState,
    session: &SessionContext,
    raw_id: &str,
) -> Result<HttpResponse, Error> {
    let user = PageUser::from_session(session)?;
    let id = parse_note_id(raw_id)?;
    state.notes_command.delete_note(&user.id, id).await?;
    Ok(redirect("/"))
}

/// Delete an owned note.
#[post("/delete/{id}")]
pub async fn delete_submit(
    state: web::Data<HttpState>,
    renderer: web::Data<PageRenderer>,
    session: SessionContext,
    path: web::Path<String>,
) -> HttpResponse {
    let result = delete_owned(&state, &session, &path).await;
    settle(&renderer, &session, result)
}

#[derive(Serialize)]
struct AboutView {
    username: Option<String>,
}

/// Static about page; no session required.
#[get("/about")]
pub async fn about(renderer: web::Data<PageRenderer>, session: SessionContext) -> HttpResponse {
    let username = session_username(&session);
    let result = html(&renderer, StatusCode::OK, view::ABOUT, &AboutView { username });
    settle(&renderer, &session, result)
}

/// Register the note pages and the about page.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(index)
        .service(add_form)
        .service(add_submit)
        .service(edit_form)
        .service(edit_submit)
        .service(delete_submit)
        .service(about);
}

#[cfg(test)]
#[path = "notes_tests.rs"]
mod tests;
