//! Test helpers for inbound HTTP components.

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::{Cookie, Key};
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{HttpResponse, test, web};

use crate::domain::UserId;
use crate::inbound::http::session::SessionContext;

/// Owner established by [`test_login`].
pub const TEST_OWNER_ID: &str = "123e4567-e89b-12d3-a456-426614174000";

/// Path serving [`test_login`] in handler test apps.
pub const TEST_LOGIN_PATH: &str = "/test-login";

/// Build a session middleware configured for tests.
///
/// Uses a fresh key per invocation, names the cookie `session` and disables
/// the `Secure` flag for local HTTP tests.
pub fn test_session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name("session".to_owned())
        .cookie_secure(false)
        .build()
}

/// Route handler that logs in as [`TEST_OWNER_ID`] without credentials.
pub async fn test_login(session: SessionContext) -> actix_web::Result<HttpResponse> {
    let id = UserId::new(TEST_OWNER_ID).map_err(actix_web::error::ErrorInternalServerError)?;
    session.persist_user(&id, "testuser")?;
    Ok(HttpResponse::Ok().finish())
}

/// Register [`test_login`] at [`TEST_LOGIN_PATH`].
pub fn configure_test_login(cfg: &mut web::ServiceConfig) {
    cfg.route(TEST_LOGIN_PATH, web::get().to(test_login));
}

/// Call [`TEST_LOGIN_PATH`] on `app` and return the session cookie.
pub async fn login_cookie<S>(app: &S) -> Cookie<'static>
where
    S: Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let res = test::call_service(
        app,
        test::TestRequest::get().uri(TEST_LOGIN_PATH).to_request(),
    )
    .await;
    res.response()
        .cookies()
        .find(|cookie| cookie.name() == "session")
        .map(Cookie::into_owned)
        .unwrap_or_else(|| panic!("test login must set a session cookie"))
}
