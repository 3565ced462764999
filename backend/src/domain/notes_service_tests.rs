//! Tests for the notes domain service.

use std::sync::{Arc, Mutex};
use std::thread;

use chrono::{DateTime, Duration, Local, TimeZone, Utc};
use mockable::Clock;
use rstest::{fixture, rstest};

use super::NotesService;
use crate::domain::ports::{MockNoteStore, NotesCommand, NotesQuery};
use crate::domain::{ErrorCode, Note, NoteDraft, NoteError, NoteFilter, NoteId, UserId};
use crate::outbound::memory::InMemoryNoteStore;

const OWNER: &str = "123e4567-e89b-12d3-a456-426614174000";
const OTHER_OWNER: &str = "3fa85f64-5717-4562-b3fc-2c963f66afa6";

fn start_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0)
        .single()
        .expect("valid fixture timestamp")
}

/// Clock that moves forward one minute every time it is read.
struct SteppingClock {
    now: Mutex<DateTime<Utc>>,
}

impl Clock for SteppingClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        let mut now = self.now.lock().expect("clock lock");
        let current = *now;
        *now = current + Duration::minutes(1);
        current
    }
}

#[fixture]
fn owner() -> UserId {
    UserId::new(OWNER).expect("fixture owner id")
}

#[fixture]
fn other_owner() -> UserId {
    UserId::new(OTHER_OWNER).expect("fixture owner id")
}

#[fixture]
fn service() -> NotesService<InMemoryNoteStore> {
    NotesService::new(
        InMemoryNoteStore::new(),
        Arc::new(SteppingClock {
            now: Mutex::new(start_time()),
        }),
    )
}

fn search(text: &str) -> NoteFilter {
    NoteFilter::new(Some(text.to_owned()), None)
}

fn category(name: &str) -> NoteFilter {
    NoteFilter::new(None, Some(name.to_owned()))
}

fn ids(notes: &[Note]) -> Vec<u64> {
    notes.iter().map(|note| note.id.get()).collect()
}

#[rstest]
fn milk_and_work_plan_walkthrough(service: NotesService<InMemoryNoteStore>, owner: UserId) {
    let a = service
        .create(&owner, NoteDraft::new("Milk", "buy milk"))
        .expect("create A");
    assert_eq!(a.id.get(), 1);
    assert_eq!(a.category, "General");

    let b = service
        .create(
            &owner,
            NoteDraft::new("Work plan", "finish MILK report").with_category("Work"),
        )
        .expect("create B");

    let by_search = service.find_notes(&owner, &search("milk")).expect("search");
    assert_eq!(ids(&by_search), vec![a.id.get(), b.id.get()]);

    let by_category = service.find_notes(&owner, &category("Work")).expect("category");
    assert_eq!(ids(&by_category), vec![b.id.get()]);

    service.delete(&owner, NoteId::new(1)).expect("delete A");
    assert_eq!(
        service.find_note(&owner, NoteId::new(1)),
        Err(NoteError::NotFound)
    );
}

#[rstest]
fn created_ids_strictly_increase(service: NotesService<InMemoryNoteStore>, owner: UserId, other_owner: UserId) {
    let mut issued = Vec::new();
    for n in 0..6 {
        let who = if n % 2 == 0 { &owner } else { &other_owner };
        let note = service
            .create(who, NoteDraft::new(format!("t{n}"), "body"))
            .expect("create");
        issued.push(note.id.get());
    }
    assert_eq!(issued, vec![1, 2, 3, 4, 5, 6]);
}

#[rstest]
fn get_returns_the_created_note(service: NotesService<InMemoryNoteStore>, owner: UserId) {
    let created = service
        .create(&owner, NoteDraft::new("Milk", "buy milk").with_category("Home"))
        .expect("create");
    let fetched = service.find_note(&owner, created.id).expect("get");
    assert_eq!(fetched, created);
    assert_eq!(fetched.owner_id, owner);
    assert_eq!(fetched.updated_at, start_time());
}

#[rstest]
#[case(NoteDraft::new("", "body"))]
#[case(NoteDraft::new("title", ""))]
#[case(NoteDraft::default())]
fn create_rejects_missing_fields(
    service: NotesService<InMemoryNoteStore>,
    owner: UserId,
    #[case] draft: NoteDraft,
) {
    assert_eq!(service.create(&owner, draft), Err(NoteError::InvalidInput));
    assert!(
        service
            .find_notes(&owner, &NoteFilter::all())
            .expect("list")
            .is_empty()
    );
}

#[rstest]
fn rejected_create_does_not_consume_an_id(service: NotesService<InMemoryNoteStore>, owner: UserId) {
    let _ = service.create(&owner, NoteDraft::new("", ""));
    let note = service
        .create(&owner, NoteDraft::new("t", "c"))
        .expect("create");
    assert_eq!(note.id.get(), 1);
}

#[rstest]
fn other_owners_notes_are_invisible(
    service: NotesService<InMemoryNoteStore>,
    owner: UserId,
    other_owner: UserId,
) {
    let note = service
        .create(&owner, NoteDraft::new("Milk", "buy milk"))
        .expect("create");

    assert_eq!(service.find_note(&other_owner, note.id), Err(NoteError::NotFound));
    assert_eq!(
        service.update(&other_owner, note.id, NoteDraft::new("x", "y")),
        Err(NoteError::NotFound)
    );
    assert_eq!(service.delete(&other_owner, note.id), Err(NoteError::NotFound));
    assert!(
        service
            .find_notes(&other_owner, &NoteFilter::all())
            .expect("list")
            .is_empty()
    );

    let untouched = service.find_note(&owner, note.id).expect("still present");
    assert_eq!(untouched, note);
}

#[rstest]
fn missing_note_wins_over_invalid_update(
    service: NotesService<InMemoryNoteStore>,
    owner: UserId,
) {
    assert_eq!(
        service.update(&owner, NoteId::new(99), NoteDraft::default()),
        Err(NoteError::NotFound)
    );
}

#[rstest]
fn invalid_update_leaves_note_unchanged(service: NotesService<InMemoryNoteStore>, owner: UserId) {
    let note = service
        .create(&owner, NoteDraft::new("Milk", "buy milk"))
        .expect("create");
    assert_eq!(
        service.update(&owner, note.id, NoteDraft::new("", "c")),
        Err(NoteError::InvalidInput)
    );
    assert_eq!(service.find_note(&owner, note.id).expect("get"), note);
}

#[rstest]
#[case(None, "Work")]
#[case(Some(""), "Work")]
#[case(Some("Home"), "Home")]
fn update_category_rules(
    service: NotesService<InMemoryNoteStore>,
    owner: UserId,
    #[case] new_category: Option<&str>,
    #[case] expected: &str,
) {
    let note = service
        .create(&owner, NoteDraft::new("Plan", "draft").with_category("Work"))
        .expect("create");
    let draft = NoteDraft {
        title: Some("Plan v2".to_owned()),
        content: Some("final".to_owned()),
        category: new_category.map(str::to_owned),
    };

    let updated = service.update(&owner, note.id, draft).expect("update");
    assert_eq!(updated.category, expected);
    assert_eq!(updated.title, "Plan v2");
    assert_eq!(updated.content, "final");
    assert_eq!(updated.id, note.id);
    assert_eq!(updated.owner_id, owner);
    assert!(updated.updated_at > note.updated_at);
}

#[rstest]
fn categories_are_distinct_in_first_seen_order(
    service: NotesService<InMemoryNoteStore>,
    owner: UserId,
    other_owner: UserId,
) {
    for (title, cat) in [("a", "Work"), ("b", ""), ("c", "Work"), ("d", "Home")] {
        service
            .create(&owner, NoteDraft::new(title, "body").with_category(cat))
            .expect("create");
    }
    service
        .create(&other_owner, NoteDraft::new("e", "body").with_category("Secret"))
        .expect("create");

    assert_eq!(
        service.categories(&owner).expect("categories"),
        vec!["Work".to_owned(), "General".to_owned(), "Home".to_owned()]
    );
}

#[rstest]
fn list_with_no_match_is_empty(service: NotesService<InMemoryNoteStore>, owner: UserId) {
    service
        .create(&owner, NoteDraft::new("Milk", "buy milk"))
        .expect("create");
    let found = service
        .find_notes(&owner, &NoteFilter::new(Some("milk".to_owned()), Some("Work".to_owned())))
        .expect("list");
    assert!(found.is_empty());
}

#[rstest]
fn delete_checks_existence_before_removing(owner: UserId) {
    let mut store = MockNoteStore::new();
    store.expect_find_by_id().times(1).returning(|_| None);
    store.expect_remove().never();
    let service = NotesService::new(
        store,
        Arc::new(SteppingClock {
            now: Mutex::new(start_time()),
        }),
    );

    assert_eq!(service.delete(&owner, NoteId::new(3)), Err(NoteError::NotFound));
}

#[rstest]
fn update_replaces_through_the_store(owner: UserId) {
    let existing = Note {
        id: NoteId::new(5),
        owner_id: owner.clone(),
        title: "old".to_owned(),
        content: "old body".to_owned(),
        category: "Work".to_owned(),
        updated_at: start_time() - Duration::days(1),
    };
    let mut store = MockNoteStore::new();
    let stored = existing.clone();
    store
        .expect_find_by_id()
        .withf(|id| id.get() == 5)
        .times(1)
        .returning(move |_| Some(stored.clone()));
    store
        .expect_replace()
        .withf(|id, note| id.get() == 5 && note.title == "new" && note.category == "Work")
        .times(1)
        .return_const(());
    let service = NotesService::new(
        store,
        Arc::new(SteppingClock {
            now: Mutex::new(start_time()),
        }),
    );

    let updated = service
        .update(&owner, existing.id, NoteDraft::new("new", "new body"))
        .expect("update");
    assert_eq!(updated.updated_at, start_time());
}

#[rstest]
fn poisoned_store_reports_unavailable(service: NotesService<InMemoryNoteStore>, owner: UserId) {
    thread::scope(|scope| {
        let outcome = scope
            .spawn(|| {
                let _guard = service.store.write().expect("fresh lock");
                panic!("writer panicked while holding the store");
            })
            .join();
        assert!(outcome.is_err());
    });

    assert_eq!(
        service.find_notes(&owner, &NoteFilter::all()),
        Err(NoteError::StoreUnavailable)
    );
    assert_eq!(
        service.create(&owner, NoteDraft::new("t", "c")),
        Err(NoteError::StoreUnavailable)
    );
}

#[rstest]
fn concurrent_creates_keep_ids_unique(service: NotesService<InMemoryNoteStore>, owner: UserId) {
    thread::scope(|scope| {
        for worker in 0..4 {
            let service = &service;
            let owner = &owner;
            scope.spawn(move || {
                for n in 0..25 {
                    service
                        .create(owner, NoteDraft::new(format!("w{worker}-{n}"), "body"))
                        .expect("create");
                }
            });
        }
    });

    let notes = service.find_notes(&owner, &NoteFilter::all()).expect("list");
    let listed = ids(&notes);
    assert_eq!(listed.len(), 100);
    assert!(listed.windows(2).all(|pair| pair[0] < pair[1]));
}

#[rstest]
#[tokio::test]
async fn ports_map_note_errors_to_domain_codes(
    service: NotesService<InMemoryNoteStore>,
    owner: UserId,
) {
    let invalid = service
        .create_note(&owner, NoteDraft::new("", "c"))
        .await
        .expect_err("invalid draft");
    assert_eq!(invalid.code(), ErrorCode::InvalidRequest);
    assert_eq!(invalid.message(), "Title and content are required");

    let missing = service
        .get_note(&owner, NoteId::new(42))
        .await
        .expect_err("missing note");
    assert_eq!(missing.code(), ErrorCode::NotFound);
    assert_eq!(missing.message(), "Note not found");

    let note = service
        .create_note(&owner, NoteDraft::new("t", "c"))
        .await
        .expect("create");
    service.delete_note(&owner, note.id).await.expect("delete");
    assert!(
        service
            .list_notes(&owner, &NoteFilter::all())
            .await
            .expect("list")
            .is_empty()
    );
    assert!(service.list_categories(&owner).await.expect("categories").is_empty());
}

#[rstest]
#[tokio::test]
async fn interleaved_owners_see_only_their_notes(
    service: NotesService<InMemoryNoteStore>,
    owner: UserId,
    other_owner: UserId,
) {
    let creates = (0..10).map(|n| {
        let who = if n % 2 == 0 { &owner } else { &other_owner };
        service.create_note(who, NoteDraft::new(format!("note {n}"), "body"))
    });
    let created = futures::future::join_all(creates).await;
    assert!(created.iter().all(Result::is_ok));

    let mine = service
        .list_notes(&owner, &NoteFilter::all())
        .await
        .expect("list");
    assert_eq!(mine.len(), 5);
    assert!(mine.iter().all(|note| note.owner_id == owner));
}
