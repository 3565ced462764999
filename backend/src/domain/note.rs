//! Notes: short titled texts owned by a single user.
//!
//! This module holds the note entity plus the raw input ([`NoteDraft`]) and
//! listing filter ([`NoteFilter`]) types that the notes service consumes. Both
//! inbound adapters build these types, so validation happens once, inside the
//! service.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Error, UserId};

/// Category assigned when a note is created without one.
pub const DEFAULT_CATEGORY: &str = "General";

/// Message reported when title or content is missing.
pub const INVALID_INPUT_MESSAGE: &str = "Title and content are required";

/// Message reported when a note is missing or owned by someone else.
pub const NOT_FOUND_MESSAGE: &str = "Note not found";

/// Identifier allocated to a note at creation.
///
/// Identifiers are positive and never reused within a process lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(u64);

impl NoteId {
    /// Wrap a raw identifier value.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw identifier value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Returned when a path segment is not a usable note identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid note id: {raw}")]
pub struct NoteIdParseError {
    raw: String,
}

impl FromStr for NoteId {
    type Err = NoteIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<u64>() {
            Ok(raw) if raw > 0 => Ok(Self(raw)),
            _ => Err(NoteIdParseError { raw: s.to_owned() }),
        }
    }
}

/// A stored note.
///
/// ## Invariants
/// - `id` and `owner_id` never change after creation.
/// - `title` and `content` are non-empty.
/// - `updated_at` is stamped on creation and refreshed by every update.
///
/// # Examples
/// ```
/// use chrono::Utc;
/// use notes_backend::domain::{Note, NoteId, UserId, DEFAULT_CATEGORY};
///
/// let note = Note {
///     id: NoteId::new(1),
///     owner_id: UserId::random(),
///     title: "Milk".to_owned(),
///     content: "buy milk".to_owned(),
///     category: DEFAULT_CATEGORY.to_owned(),
///     updated_at: Utc::now(),
/// };
/// assert_eq!(note.id.get(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Unique identifier.
    pub id: NoteId,
    /// The user who created the note.
    pub owner_id: UserId,
    /// Note title.
    pub title: String,
    /// Note body.
    pub content: String,
    /// Free-form grouping label.
    pub category: String,
    /// Creation or last successful update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Unvalidated note fields supplied by a caller.
///
/// Absent and empty values are treated alike: empty title or content is
/// rejected, and an empty category means "no category given".
///
/// # Examples
/// ```
/// use notes_backend::domain::NoteDraft;
///
/// let draft = NoteDraft::new("Work plan", "finish report").with_category("Work");
/// assert_eq!(draft.category.as_deref(), Some("Work"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteDraft {
    /// Proposed title.
    pub title: Option<String>,
    /// Proposed content.
    pub content: Option<String>,
    /// Proposed category.
    pub category: Option<String>,
}

/// Draft fields after validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ValidDraft {
    pub(crate) title: String,
    pub(crate) content: String,
    pub(crate) category: Option<String>,
}

impl NoteDraft {
    /// Draft with title and content and no category.
    #[must_use]
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            content: Some(content.into()),
            category: None,
        }
    }

    /// Set the category.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub(crate) fn validate(self) -> Result<ValidDraft, NoteError> {
        let title = non_empty(self.title).ok_or(NoteError::InvalidInput)?;
        let content = non_empty(self.content).ok_or(NoteError::InvalidInput)?;
        Ok(ValidDraft {
            title,
            content,
            category: non_empty(self.category),
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.is_empty())
}

/// Listing filter combining a text search and an exact category match.
///
/// Empty values disable the corresponding filter. Both filters compose with
/// logical AND.
///
/// # Examples
/// ```
/// use notes_backend::domain::NoteFilter;
///
/// let filter = NoteFilter::new(Some("milk".to_owned()), Some(String::new()));
/// assert_eq!(filter.search(), Some("milk"));
/// assert_eq!(filter.category(), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteFilter {
    search: Option<String>,
    search_folded: Option<String>,
    category: Option<String>,
}

impl NoteFilter {
    /// Build a filter from optional query values.
    #[must_use]
    pub fn new(search: Option<String>, category: Option<String>) -> Self {
        let search = non_empty(search);
        Self {
            search_folded: search.as_deref().map(str::to_lowercase),
            search,
            category: non_empty(category),
        }
    }

    /// Filter that keeps every note.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Search text as supplied, if any.
    #[must_use]
    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    /// Category to match exactly, if any.
    #[must_use]
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Whether `note` passes both filters.
    ///
    /// Search is a case-insensitive substring match on title or content;
    /// category comparison is exact and case-sensitive.
    #[must_use]
    pub fn matches(&self, note: &Note) -> bool {
        let search_ok = self.search_folded.as_deref().is_none_or(|needle| {
            note.title.to_lowercase().contains(needle)
                || note.content.to_lowercase().contains(needle)
        });
        let category_ok = self
            .category
            .as_deref()
            .is_none_or(|category| note.category == category);
        search_ok && category_ok
    }
}

/// Failure kinds raised by the notes service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum NoteError {
    /// Title or content was missing or empty.
    #[error("Title and content are required")]
    InvalidInput,
    /// No note with that id exists for the caller.
    #[error("Note not found")]
    NotFound,
    /// The note store guard was poisoned by a panicking writer.
    #[error("note store unavailable")]
    StoreUnavailable,
}

impl From<NoteError> for Error {
    fn from(value: NoteError) -> Self {
        match value {
            NoteError::InvalidInput => Error::invalid_request(INVALID_INPUT_MESSAGE),
            NoteError::NotFound => Error::not_found(NOT_FOUND_MESSAGE),
            NoteError::StoreUnavailable => Error::internal(value.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use rstest::{fixture, rstest};

    #[fixture]
    fn note() -> Note {
        Note {
            id: NoteId::new(7),
            owner_id: UserId::random(),
            title: "Work plan".to_owned(),
            content: "finish MILK report".to_owned(),
            category: "Work".to_owned(),
            updated_at: Utc::now(),
        }
    }

    #[rstest]
    #[case("1", Some(1))]
    #[case("42", Some(42))]
    #[case("0", None)]
    #[case("-3", None)]
    #[case("abc", None)]
    #[case("", None)]
    fn note_id_parsing(#[case] raw: &str, #[case] expected: Option<u64>) {
        assert_eq!(raw.parse::<NoteId>().ok().map(NoteId::get), expected);
    }

    #[rstest]
    #[case(NoteDraft::default())]
    #[case(NoteDraft::new("", "body"))]
    #[case(NoteDraft::new("title", ""))]
    #[case(NoteDraft { title: Some("title".to_owned()), content: None, category: None })]
    fn drafts_without_title_or_content_are_invalid(#[case] draft: NoteDraft) {
        assert_eq!(draft.validate(), Err(NoteError::InvalidInput));
    }

    #[rstest]
    fn empty_category_is_treated_as_absent() {
        let valid = NoteDraft::new("t", "c")
            .with_category("")
            .validate()
            .expect("valid draft");
        assert_eq!(valid.category, None);
    }

    #[rstest]
    #[case(NoteFilter::all(), true)]
    #[case(NoteFilter::new(Some("milk".to_owned()), None), true)]
    #[case(NoteFilter::new(Some("PLAN".to_owned()), None), true)]
    #[case(NoteFilter::new(Some("eggs".to_owned()), None), false)]
    #[case(NoteFilter::new(None, Some("Work".to_owned())), true)]
    #[case(NoteFilter::new(None, Some("work".to_owned())), false)]
    #[case(NoteFilter::new(Some("milk".to_owned()), Some("Work".to_owned())), true)]
    #[case(NoteFilter::new(Some("milk".to_owned()), Some("Home".to_owned())), false)]
    fn filter_matching(note: Note, #[case] filter: NoteFilter, #[case] expected: bool) {
        assert_eq!(filter.matches(&note), expected);
    }

    #[rstest]
    #[case(NoteError::InvalidInput, ErrorCode::InvalidRequest, INVALID_INPUT_MESSAGE)]
    #[case(NoteError::NotFound, ErrorCode::NotFound, NOT_FOUND_MESSAGE)]
    #[case(NoteError::StoreUnavailable, ErrorCode::InternalError, "note store unavailable")]
    fn note_errors_map_to_domain_errors(
        #[case] error: NoteError,
        #[case] code: ErrorCode,
        #[case] message: &str,
    ) {
        let mapped = Error::from(error);
        assert_eq!(mapped.code(), code);
        assert_eq!(mapped.message(), message);
    }

    #[rstest]
    fn note_serialises_in_camel_case(note: Note) {
        let value = serde_json::to_value(&note).expect("serialise note");
        assert_eq!(value.get("id").and_then(|v| v.as_u64()), Some(7));
        assert!(value.get("ownerId").is_some());
        assert!(value.get("updatedAt").is_some());
    }
}
