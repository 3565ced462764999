//! Driving port for reading and editing the signed-in account.
//!
//! ```text
//! GET  /profile -> ProfileService::profile
//! POST /profile -> ProfileService::update_email
//! ```

use std::sync::RwLock;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};

use crate::domain::{Account, EMAIL_REQUIRED_MESSAGE, EmailUpdate, Error, UserId};

/// Account use-cases for the profile page.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProfileService: Send + Sync {
    /// Account of `user_id`; `Unauthorized` when no such account exists.
    async fn profile(&self, user_id: &UserId) -> Result<Account, Error>;

    /// Replace the account email and return the updated record.
    ///
    /// A blank email fails with `InvalidRequest` and leaves the account as is.
    async fn update_email(&self, user_id: &UserId, email: &str) -> Result<Account, Error>;
}

/// Profile rows for the accounts accepted by
/// [`super::FixtureLoginService`]: `(user id, username, display name, email)`.
const FIXTURE_PROFILES: [(&str, &str, &str, &str); 2] = [
    (
        "123e4567-e89b-12d3-a456-426614174000",
        "admin",
        "Admin",
        "admin@example.com",
    ),
    (
        "3fa85f64-5717-4562-b3fc-2c963f66afa6",
        "testuser",
        "Test User",
        "testuser@example.com",
    ),
];

fn fixture_created_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0)
        .single()
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}

/// In-memory account directory seeded with the fixture accounts.
///
/// Email edits live as long as the process.
#[derive(Debug)]
pub struct FixtureAccountDirectory {
    accounts: RwLock<Vec<Account>>,
}

impl FixtureAccountDirectory {
    #[must_use]
    pub fn new() -> Self {
        let created_at = fixture_created_at();
        let accounts = FIXTURE_PROFILES
            .iter()
            .filter_map(|(id, username, name, email)| {
                UserId::new(id).ok().map(|id| Account {
                    id,
                    username: (*username).to_owned(),
                    name: (*name).to_owned(),
                    email: (*email).to_owned(),
                    created_at,
                })
            })
            .collect();
        Self {
            accounts: RwLock::new(accounts),
        }
    }
}

impl Default for FixtureAccountDirectory {
    fn default() -> Self {
        Self::new()
    }
}

fn unknown_account() -> Error {
    Error::unauthorized("Unauthorized")
}

fn poisoned() -> Error {
    Error::internal("account directory lock poisoned")
}

#[async_trait]
impl ProfileService for FixtureAccountDirectory {
    async fn profile(&self, user_id: &UserId) -> Result<Account, Error> {
        let accounts = self.accounts.read().map_err(|_| poisoned())?;
        accounts
            .iter()
            .find(|account| account.id == *user_id)
            .cloned()
            .ok_or_else(unknown_account)
    }

    async fn update_email(&self, user_id: &UserId, email: &str) -> Result<Account, Error> {
        let mut accounts = self.accounts.write().map_err(|_| poisoned())?;
        let account = accounts
            .iter_mut()
            .find(|account| account.id == *user_id)
            .ok_or_else(unknown_account)?;
        let email = EmailUpdate::parse(email)
            .ok_or_else(|| Error::invalid_request(EMAIL_REQUIRED_MESSAGE))?;
        account.email = email.into_inner();
        Ok(account.clone())
    }
}
