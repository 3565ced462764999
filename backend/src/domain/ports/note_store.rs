//! Driven port for note storage.
//!
//! The store holds raw records only: it applies no validation and no
//! ownership rules. The notes service serialises access to it, so
//! implementations need no interior locking of their own.

use crate::domain::{Note, NoteId, UserId};

/// Primitive note collection.
///
/// Mutating methods take `&mut self`; the caller owns the exclusive guard that
/// makes a lookup followed by a mutation atomic.
#[cfg_attr(test, mockall::automock)]
pub trait NoteStore: Send + Sync {
    /// Add a note. The caller guarantees `note.id` is not already present.
    fn insert(&mut self, note: Note);

    /// Fetch the note stored under `id`.
    fn find_by_id(&self, id: NoteId) -> Option<Note>;

    /// All notes owned by `owner_id`, in insertion order.
    fn find_all_by_owner(&self, owner_id: &UserId) -> Vec<Note>;

    /// Overwrite the note stored under `id`. Absent ids are ignored.
    fn replace(&mut self, id: NoteId, note: Note);

    /// Delete the note stored under `id`. Absent ids are ignored.
    fn remove(&mut self, id: NoteId);
}
