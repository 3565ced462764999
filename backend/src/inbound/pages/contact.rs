//! Contact page. Posted messages go to the service log.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::inbound::http::session::SessionContext;

use super::templates::{PageRenderer, view};
use super::{failure_page, html};

const THANK_YOU_MESSAGE: &str = "Thank you for your message!";

/// Fields posted by the contact form.
#[derive(Debug, Default, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Serialize)]
struct ContactView<'a> {
    username: Option<String>,
    message: Option<&'a str>,
}

fn contact_page(
    renderer: &PageRenderer,
    session: &SessionContext,
    message: Option<&str>,
) -> HttpResponse {
    let username = session.username().ok().flatten();
    let view_model = ContactView {
        username: username.clone(),
        message,
    };
    html(renderer, StatusCode::OK, view::CONTACT, &view_model)
        .unwrap_or_else(|err| failure_page(renderer, username, &err))
}

/// Contact form; no session required.
#[get("/contact")]
pub async fn contact_form(renderer: web::Data<PageRenderer>, session: SessionContext) -> HttpResponse {
    contact_page(&renderer, &session, None)
}

/// Log the message and thank the sender.
#[post("/contact")]
pub async fn contact_submit(
    renderer: web::Data<PageRenderer>,
    session: SessionContext,
    form: web::Form<ContactForm>,
) -> HttpResponse {
    info!(
        name = %form.name,
        email = %form.email,
        message = %form.message,
        "contact message received"
    );
    contact_page(&renderer, &session, Some(THANK_YOU_MESSAGE))
}

/// Register the contact page.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(contact_form).service(contact_submit);
}
