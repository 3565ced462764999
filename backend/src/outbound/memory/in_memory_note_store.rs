//! `NoteStore` adapter over a plain vector.

use crate::domain::ports::NoteStore;
use crate::domain::{Note, NoteId, UserId};

/// Notes kept in insertion order.
///
/// Lookups are linear scans. The collection is owned by one notes service,
/// which serialises access, so no locking happens here.
#[derive(Debug, Clone, Default)]
pub struct InMemoryNoteStore {
    notes: Vec<Note>,
}

impl InMemoryNoteStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored notes across all owners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Whether the store holds no notes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    fn position(&self, id: NoteId) -> Option<usize> {
        self.notes.iter().position(|note| note.id == id)
    }
}

impl NoteStore for InMemoryNoteStore {
    fn insert(&mut self, note: Note) {
        self.notes.push(note);
    }

    fn find_by_id(&self, id: NoteId) -> Option<Note> {
        self.notes.iter().find(|note| note.id == id).cloned()
    }

    fn find_all_by_owner(&self, owner_id: &UserId) -> Vec<Note> {
        self.notes
            .iter()
            .filter(|note| note.owner_id == *owner_id)
            .cloned()
            .collect()
    }

    fn replace(&mut self, id: NoteId, note: Note) {
        if let Some(slot) = self.position(id).and_then(|index| self.notes.get_mut(index)) {
            *slot = note;
        }
    }

    fn remove(&mut self, id: NoteId) {
        if let Some(index) = self.position(id) {
            self.notes.remove(index);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rstest::{fixture, rstest};

    fn note(id: u64, owner: &UserId, title: &str) -> Note {
        Note {
            id: NoteId::new(id),
            owner_id: owner.clone(),
            title: title.to_owned(),
            content: "body".to_owned(),
            category: "General".to_owned(),
            updated_at: Utc::now(),
        }
    }

    #[fixture]
    fn owners() -> (UserId, UserId) {
        (UserId::random(), UserId::random())
    }

    #[rstest]
    fn owner_listing_keeps_insertion_order(owners: (UserId, UserId)) {
        let (alice, bob) = owners;
        let mut store = InMemoryNoteStore::new();
        store.insert(note(3, &alice, "third"));
        store.insert(note(1, &bob, "bob"));
        store.insert(note(2, &alice, "second"));

        let titles: Vec<String> = store
            .find_all_by_owner(&alice)
            .into_iter()
            .map(|n| n.title)
            .collect();
        assert_eq!(titles, vec!["third".to_owned(), "second".to_owned()]);
        assert_eq!(store.len(), 3);
    }

    #[rstest]
    fn replace_keeps_position(owners: (UserId, UserId)) {
        let (alice, _) = owners;
        let mut store = InMemoryNoteStore::new();
        store.insert(note(1, &alice, "one"));
        store.insert(note(2, &alice, "two"));

        store.replace(NoteId::new(1), note(1, &alice, "uno"));

        let titles: Vec<String> = store
            .find_all_by_owner(&alice)
            .into_iter()
            .map(|n| n.title)
            .collect();
        assert_eq!(titles, vec!["uno".to_owned(), "two".to_owned()]);
    }

    #[rstest]
    fn absent_ids_are_ignored(owners: (UserId, UserId)) {
        let (alice, _) = owners;
        let mut store = InMemoryNoteStore::new();
        store.insert(note(1, &alice, "one"));

        store.replace(NoteId::new(9), note(9, &alice, "ghost"));
        store.remove(NoteId::new(9));

        assert_eq!(store.len(), 1);
        assert!(store.find_by_id(NoteId::new(9)).is_none());
    }

    #[rstest]
    fn remove_deletes_only_the_target(owners: (UserId, UserId)) {
        let (alice, _) = owners;
        let mut store = InMemoryNoteStore::new();
        store.insert(note(1, &alice, "one"));
        store.insert(note(2, &alice, "two"));

        store.remove(NoteId::new(1));

        assert!(store.find_by_id(NoteId::new(1)).is_none());
        assert_eq!(
            store.find_by_id(NoteId::new(2)).map(|n| n.title),
            Some("two".to_owned())
        );
    }
}
