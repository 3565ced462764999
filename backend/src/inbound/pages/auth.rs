//! Login and logout pages.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::{Error, ErrorCode, LoginCredentials};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

use super::templates::{PageRenderer, view};
use super::{LOGIN_PATH, failure_page, html, redirect};

const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Fields posted by the login form.
#[derive(Debug, Default, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Serialize)]
struct LoginView<'a> {
    error: Option<&'a str>,
    login_name: &'a str,
}

fn login_page(
    renderer: &PageRenderer,
    error: Option<&str>,
    login_name: &str,
) -> Result<HttpResponse, Error> {
    html(
        renderer,
        StatusCode::OK,
        view::LOGIN,
        &LoginView { error, login_name },
    )
}

/// Login form.
#[get("/login")]
pub async fn login_form(renderer: web::Data<PageRenderer>) -> HttpResponse {
    login_page(&renderer, None, "").unwrap_or_else(|err| failure_page(&renderer, None, &err))
}

async fn sign_in(
    state: &HttpState,
    renderer: &PageRenderer,
    session: &SessionContext,
    form: &LoginForm,
) -> Result<HttpResponse, Error> {
    let Ok(credentials) = LoginCredentials::try_from_parts(&form.username, &form.password) else {
        return login_page(renderer, Some(INVALID_CREDENTIALS), &form.username);
    };
    match state.login.authenticate(&credentials).await {
        Ok(user_id) => {
            session.persist_user(&user_id, credentials.username())?;
            info!(user_id = %user_id, "page login");
            Ok(redirect("/"))
        }
        Err(err) if err.code() == ErrorCode::Unauthorized => {
            login_page(renderer, Some(INVALID_CREDENTIALS), credentials.username())
        }
        Err(err) => Err(err),
    }
}

/// Check the posted credentials and start a session.
#[post("/login")]
pub async fn login_submit(
    state: web::Data<HttpState>,
    renderer: web::Data<PageRenderer>,
    session: SessionContext,
    form: web::Form<LoginForm>,
) -> HttpResponse {
    sign_in(&state, &renderer, &session, &form)
        .await
        .unwrap_or_else(|err| failure_page(&renderer, None, &err))
}

/// End the session.
#[get("/logout")]
pub async fn logout(session: SessionContext) -> HttpResponse {
    session.purge();
    redirect(LOGIN_PATH)
}

/// Register the login and logout pages.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(login_form).service(login_submit).service(logout);
}
