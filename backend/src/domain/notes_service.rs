//! Notes domain service.
//!
//! Implements the [`NotesQuery`] and [`NotesCommand`] driving ports over a
//! [`NoteStore`]. All ownership checks go through one lookup, so every caller
//! agrees on what "not found" means.
//!
//! The store sits behind a single reader-writer lock. Each mutation holds the
//! write guard from its existence check through to the store write and never
//! awaits while holding it; reads share the read guard and therefore only see
//! fully applied writes.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use mockable::Clock;
use tracing::{debug, warn};

use crate::domain::note::ValidDraft;
use crate::domain::ports::{NoteStore, NotesCommand, NotesQuery};
use crate::domain::{
    DEFAULT_CATEGORY, Error, Note, NoteDraft, NoteError, NoteFilter, NoteId, NoteIdAllocator,
    UserId,
};

/// Validation- and ownership-aware operations over a note store.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use mockable::DefaultClock;
/// use notes_backend::domain::{NoteDraft, NotesService, UserId};
/// use notes_backend::outbound::memory::InMemoryNoteStore;
///
/// let service = NotesService::new(InMemoryNoteStore::new(), Arc::new(DefaultClock));
/// let owner = UserId::random();
/// let note = service
///     .create(&owner, NoteDraft::new("Milk", "buy milk"))
///     .expect("valid note");
/// assert_eq!(note.category, "General");
/// ```
pub struct NotesService<S> {
    store: RwLock<S>,
    ids: NoteIdAllocator,
    clock: Arc<dyn Clock>,
}

impl<S> NotesService<S>
where
    S: NoteStore,
{
    /// Take ownership of `store` and stamp notes using `clock`.
    pub fn new(store: S, clock: Arc<dyn Clock>) -> Self {
        Self {
            store: RwLock::new(store),
            ids: NoteIdAllocator::new(),
            clock,
        }
    }

    fn read_store(&self) -> Result<RwLockReadGuard<'_, S>, NoteError> {
        self.store.read().map_err(|_| {
            warn!("note store lock poisoned");
            NoteError::StoreUnavailable
        })
    }

    fn write_store(&self) -> Result<RwLockWriteGuard<'_, S>, NoteError> {
        self.store.write().map_err(|_| {
            warn!("note store lock poisoned");
            NoteError::StoreUnavailable
        })
    }

    /// Notes owned by `owner_id` that pass `filter`, in insertion order.
    pub fn find_notes(&self, owner_id: &UserId, filter: &NoteFilter) -> Result<Vec<Note>, NoteError> {
        let store = self.read_store()?;
        Ok(store
            .find_all_by_owner(owner_id)
            .into_iter()
            .filter(|note| filter.matches(note))
            .collect())
    }

    /// The owned note stored under `id`.
    pub fn find_note(&self, owner_id: &UserId, id: NoteId) -> Result<Note, NoteError> {
        let store = self.read_store()?;
        find_owned(&*store, owner_id, id)
    }

    /// Distinct categories of the owner's notes, in first-seen order.
    pub fn categories(&self, owner_id: &UserId) -> Result<Vec<String>, NoteError> {
        let store = self.read_store()?;
        let mut categories: Vec<String> = Vec::new();
        for note in store.find_all_by_owner(owner_id) {
            if !categories.contains(&note.category) {
                categories.push(note.category);
            }
        }
        Ok(categories)
    }

    /// Validate `draft` and insert it as a new note owned by `owner_id`.
    pub fn create(&self, owner_id: &UserId, draft: NoteDraft) -> Result<Note, NoteError> {
        let ValidDraft {
            title,
            content,
            category,
        } = draft.validate()?;

        let mut store = self.write_store()?;
        let note = Note {
            id: self.ids.next_id(),
            owner_id: owner_id.clone(),
            title,
            content,
            category: category.unwrap_or_else(|| DEFAULT_CATEGORY.to_owned()),
            updated_at: self.clock.utc(),
        };
        store.insert(note.clone());
        debug!(note_id = %note.id, owner_id = %owner_id, "note created");
        Ok(note)
    }

    /// Replace title, content and (when given) category of an owned note.
    ///
    /// Ownership is checked before the draft is validated.
    pub fn update(&self, owner_id: &UserId, id: NoteId, draft: NoteDraft) -> Result<Note, NoteError> {
        let mut store = self.write_store()?;
        let existing = find_owned(&*store, owner_id, id)?;
        let ValidDraft {
            title,
            content,
            category,
        } = draft.validate()?;

        let updated = Note {
            title,
            content,
            category: category.unwrap_or(existing.category),
            updated_at: self.clock.utc(),
            ..existing
        };
        store.replace(id, updated.clone());
        debug!(note_id = %id, owner_id = %owner_id, "note updated");
        Ok(updated)
    }

    /// Remove an owned note.
    pub fn delete(&self, owner_id: &UserId, id: NoteId) -> Result<(), NoteError> {
        let mut store = self.write_store()?;
        find_owned(&*store, owner_id, id)?;
        store.remove(id);
        debug!(note_id = %id, owner_id = %owner_id, "note deleted");
        Ok(())
    }
}

/// Look up `id` and hide notes that belong to another owner.
fn find_owned<S>(store: &S, owner_id: &UserId, id: NoteId) -> Result<Note, NoteError>
where
    S: NoteStore + ?Sized,
{
    store
        .find_by_id(id)
        .filter(|note| note.owner_id == *owner_id)
        .ok_or(NoteError::NotFound)
}

#[async_trait]
impl<S> NotesQuery for NotesService<S>
where
    S: NoteStore,
{
    async fn list_notes(
        &self,
        owner_id: &UserId,
        filter: &NoteFilter,
    ) -> Result<Vec<Note>, Error> {
        Ok(self.find_notes(owner_id, filter)?)
    }

    async fn get_note(&self, owner_id: &UserId, id: NoteId) -> Result<Note, Error> {
        Ok(self.find_note(owner_id, id)?)
    }

    async fn list_categories(&self, owner_id: &UserId) -> Result<Vec<String>, Error> {
        Ok(self.categories(owner_id)?)
    }
}

#[async_trait]
impl<S> NotesCommand for NotesService<S>
where
    S: NoteStore,
{
    async fn create_note(&self, owner_id: &UserId, draft: NoteDraft) -> Result<Note, Error> {
        Ok(self.create(owner_id, draft)?)
    }

    async fn update_note(
        &self,
        owner_id: &UserId,
        id: NoteId,
        draft: NoteDraft,
    ) -> Result<Note, Error> {
        Ok(self.update(owner_id, id, draft)?)
    }

    async fn delete_note(&self, owner_id: &UserId, id: NoteId) -> Result<(), Error> {
        Ok(self.delete(owner_id, id)?)
    }
}

#[cfg(test)]
#[path = "notes_service_tests.rs"]
mod tests;
