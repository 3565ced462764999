//! Driving port for note mutations.

use async_trait::async_trait;

use crate::domain::{Error, Note, NoteDraft, NoteId, UserId};

/// Domain use-case port for creating, updating and deleting notes.
///
/// Update and delete report `NotFound` before any validation failure, so
/// adapters can rely on a fixed status precedence.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotesCommand: Send + Sync {
    /// Validate `draft` and store it as a new note owned by `owner_id`.
    async fn create_note(&self, owner_id: &UserId, draft: NoteDraft) -> Result<Note, Error>;

    /// Replace the fields of an owned note.
    ///
    /// An empty or absent category keeps the note's current category.
    async fn update_note(
        &self,
        owner_id: &UserId,
        id: NoteId,
        draft: NoteDraft,
    ) -> Result<Note, Error>;

    /// Permanently remove an owned note.
    async fn delete_note(&self, owner_id: &UserId, id: NoteId) -> Result<(), Error>;
}
