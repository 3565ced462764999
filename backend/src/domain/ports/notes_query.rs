//! Driving port for note reads.
//!
//! Both the JSON API and the page handlers read notes through this port, so
//! they share one definition of "not found".

use async_trait::async_trait;

use crate::domain::{Error, Note, NoteFilter, NoteId, UserId};

/// Domain use-case port for reading an owner's notes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotesQuery: Send + Sync {
    /// Notes owned by `owner_id` that pass `filter`, in insertion order.
    async fn list_notes(&self, owner_id: &UserId, filter: &NoteFilter)
    -> Result<Vec<Note>, Error>;

    /// A single note, or `NotFound` when missing or owned by someone else.
    async fn get_note(&self, owner_id: &UserId, id: NoteId) -> Result<Note, Error>;

    /// Distinct categories across the owner's notes, in first-seen order.
    async fn list_categories(&self, owner_id: &UserId) -> Result<Vec<String>, Error>;
}
