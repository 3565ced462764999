//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on domain ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    FixtureAccountDirectory, LoginService, NotesCommand, NotesQuery, ProfileService,
};

/// Dependency bundle for HTTP and page handlers.
#[derive(Clone)]
pub struct HttpState {
    pub login: Arc<dyn LoginService>,
    pub notes: Arc<dyn NotesQuery>,
    pub notes_command: Arc<dyn NotesCommand>,
    pub profiles: Arc<dyn ProfileService>,
}

impl HttpState {
    /// Construct state from port implementations.
    ///
    /// Profiles come from a fresh [`FixtureAccountDirectory`]; swap it with
    /// [`HttpState::with_profiles`].
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use mockable::DefaultClock;
    /// use notes_backend::domain::NotesService;
    /// use notes_backend::domain::ports::FixtureLoginService;
    /// use notes_backend::inbound::http::state::HttpState;
    /// use notes_backend::outbound::memory::InMemoryNoteStore;
    ///
    /// let notes = Arc::new(NotesService::new(InMemoryNoteStore::new(), Arc::new(DefaultClock)));
    /// let state = HttpState::new(Arc::new(FixtureLoginService), notes.clone(), notes);
    /// let _ = state.login.clone();
    /// ```
    #[must_use]
    pub fn new(
        login: Arc<dyn LoginService>,
        notes: Arc<dyn NotesQuery>,
        notes_command: Arc<dyn NotesCommand>,
    ) -> Self {
        Self {
            login,
            notes,
            notes_command,
            profiles: Arc::new(FixtureAccountDirectory::new()),
        }
    }

    /// Replace the profile port.
    #[must_use]
    pub fn with_profiles(self, profiles: Arc<dyn ProfileService>) -> Self {
        Self { profiles, ..self }
    }
}
