//! Account details shown on the profile page.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::UserId;

/// Message returned when a profile update has no email.
pub const EMAIL_REQUIRED_MESSAGE: &str = "Email is required";

/// A signed-in user's account record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Account {
    pub id: UserId,
    pub username: String,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// A trimmed, non-empty replacement email.
///
/// # Examples
/// ```
/// use notes_backend::domain::EmailUpdate;
///
/// assert_eq!(EmailUpdate::parse(" me@example.com ").unwrap().as_str(), "me@example.com");
/// assert!(EmailUpdate::parse("   ").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailUpdate(String);

impl EmailUpdate {
    /// `None` when `raw` is blank.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        (!trimmed.is_empty()).then(|| Self(trimmed.to_owned()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}
