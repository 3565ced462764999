//! Profile page: view the signed-in account and change its email.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::{Account, Error, ErrorCode};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

use super::templates::{PageRenderer, view};
use super::{PageUser, failure_page, html};

const MEMBER_SINCE_FORMAT: &str = "%Y-%m-%d";
const UPDATED_MESSAGE: &str = "Profile updated successfully";

/// Fields posted by the profile form.
#[derive(Debug, Default, Deserialize)]
pub struct ProfileForm {
    #[serde(default)]
    pub email: String,
}

#[derive(Serialize)]
struct ProfileView<'a> {
    username: Option<String>,
    account_username: &'a str,
    name: &'a str,
    email: &'a str,
    member_since: String,
    error: Option<&'a str>,
    message: Option<&'a str>,
}

fn profile_page(
    renderer: &PageRenderer,
    status: StatusCode,
    username: Option<String>,
    account: &Account,
    error: Option<&str>,
    message: Option<&str>,
) -> Result<HttpResponse, Error> {
    let view_model = ProfileView {
        username,
        account_username: &account.username,
        name: &account.name,
        email: &account.email,
        member_since: account.created_at.format(MEMBER_SINCE_FORMAT).to_string(),
        error,
        message,
    };
    html(renderer, status, view::PROFILE, &view_model)
}

async fn show_profile(
    state: &HttpState,
    renderer: &PageRenderer,
    session: &SessionContext,
) -> Result<HttpResponse, Error> {
    let user = PageUser::from_session(session)?;
    let account = state.profiles.profile(&user.id).await?;
    profile_page(renderer, StatusCode::OK, user.username, &account, None, None)
}

async fn save_profile(
    state: &HttpState,
    renderer: &PageRenderer,
    session: &SessionContext,
    form: &ProfileForm,
) -> Result<HttpResponse, Error> {
    let user = PageUser::from_session(session)?;
    match state.profiles.update_email(&user.id, &form.email).await {
        Ok(account) => {
            info!(user_id = %user.id, "profile email updated");
            profile_page(
                renderer,
                StatusCode::OK,
                user.username,
                &account,
                None,
                Some(UPDATED_MESSAGE),
            )
        }
        Err(err) if err.code() == ErrorCode::InvalidRequest => {
            let account = state.profiles.profile(&user.id).await?;
            profile_page(
                renderer,
                StatusCode::BAD_REQUEST,
                user.username,
                &account,
                Some(err.message()),
                None,
            )
        }
        Err(err) => Err(err),
    }
}

fn settle(
    renderer: &PageRenderer,
    session: &SessionContext,
    result: Result<HttpResponse, Error>,
) -> HttpResponse {
    result.unwrap_or_else(|err| failure_page(renderer, session.username().ok().flatten(), &err))
}

/// Account details of the signed-in user.
#[get("/profile")]
pub async fn profile_form(
    state: web::Data<HttpState>,
    renderer: web::Data<PageRenderer>,
    session: SessionContext,
) -> HttpResponse {
    let result = show_profile(&state, &renderer, &session).await;
    settle(&renderer, &session, result)
}

/// Save a new email for the signed-in user.
#[post("/profile")]
pub async fn profile_submit(
    state: web::Data<HttpState>,
    renderer: web::Data<PageRenderer>,
    session: SessionContext,
    form: web::Form<ProfileForm>,
) -> HttpResponse {
    let result = save_profile(&state, &renderer, &session, &form).await;
    settle(&renderer, &session, result)
}

/// Register the profile page.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(profile_form).service(profile_submit);
}

#[cfg(test)]
#[path = "profile_tests.rs"]
mod tests;
