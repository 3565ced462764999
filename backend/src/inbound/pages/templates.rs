//! Server-rendered views.
//!
//! Templates are embedded at compile time and parsed once when the renderer
//! is built. Names end in `.html`, so minijinja auto-escapes every value.

use minijinja::Environment;
use serde::Serialize;

use crate::domain::Error;

/// Names of the registered views.
pub mod view {
    pub const INDEX: &str = "index.html";
    pub const NOTE_FORM: &str = "note_form.html";
    pub const LOGIN: &str = "login.html";
    pub const NOT_FOUND: &str = "not_found.html";
    pub const ERROR: &str = "error.html";
    pub const ABOUT: &str = "about.html";
    pub const PROFILE: &str = "profile.html";
    pub const CONTACT: &str = "contact.html";
}

const TEMPLATES: [(&str, &str); 9] = [
    ("layout.html", include_str!("templates/layout.html")),
    (view::INDEX, include_str!("templates/index.html")),
    (view::NOTE_FORM, include_str!("templates/note_form.html")),
    (view::LOGIN, include_str!("templates/login.html")),
    (view::NOT_FOUND, include_str!("templates/not_found.html")),
    (view::ERROR, include_str!("templates/error.html")),
    (view::ABOUT, include_str!("templates/about.html")),
    (view::PROFILE, include_str!("templates/profile.html")),
    (view::CONTACT, include_str!("templates/contact.html")),
];

/// Compiled page templates.
///
/// # Examples
/// ```
/// use notes_backend::inbound::pages::templates::{PageRenderer, view};
///
/// let renderer = PageRenderer::new().expect("embedded templates compile");
/// let html = renderer
///     .render(view::ABOUT, &serde_json::json!({}))
///     .expect("about renders");
/// assert!(html.contains("About"));
/// ```
pub struct PageRenderer {
    env: Environment<'static>,
}

impl PageRenderer {
    /// Compile every embedded template.
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        for (name, source) in TEMPLATES {
            env.add_template(name, source)?;
        }
        Ok(Self { env })
    }

    /// Render a registered view with `context`.
    pub fn render<T: Serialize>(&self, name: &str, context: &T) -> Result<String, Error> {
        self.env
            .get_template(name)
            .and_then(|template| template.render(context))
            .map_err(|err| Error::internal(format!("failed to render {name}: {err}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use serde_json::json;

    #[fixture]
    fn renderer() -> PageRenderer {
        PageRenderer::new().expect("templates compile")
    }

    #[rstest]
    fn values_are_html_escaped(renderer: PageRenderer) {
        let html = renderer
            .render(
                view::INDEX,
                &json!({
                    "username": "testuser",
                    "notes": [{
                        "id": 1,
                        "title": "<script>alert(1)</script>",
                        "content": "a & b",
                        "category": "General",
                        "date": "2026-03-01T09:00:00+00:00",
                        "display_date": "2026-03-01 09:00",
                    }],
                    "categories": ["General"],
                }),
            )
            .expect("index renders");
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("a &amp; b"));
    }

    #[rstest]
    fn selected_category_is_marked(renderer: PageRenderer) {
        let html = renderer
            .render(
                view::INDEX,
                &json!({"notes": [], "categories": ["Home", "Work"], "category": "Work"}),
            )
            .expect("index renders");
        assert!(html.contains(r#"<option value="Work" selected>"#));
        assert!(html.contains("No notes found."));
    }

    #[rstest]
    fn unknown_views_are_internal_errors(renderer: PageRenderer) {
        let err = renderer
            .render("missing.html", &json!({}))
            .expect_err("unregistered view");
        assert_eq!(err.code(), crate::domain::ErrorCode::InternalError);
    }
}
