//! Driving port for login/authentication use-cases.
//!
//! Inbound adapters call it to turn credentials into an owner identity
//! without knowing how accounts are stored. Handler tests substitute a mock.

use async_trait::async_trait;

use crate::domain::{Error, LoginCredentials, UserId};

/// Domain use-case port for authentication.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoginService: Send + Sync {
    /// Validate credentials and return the authenticated user id.
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<UserId, Error>;
}

/// Fixed development accounts: `(username, password, user id)`.
const FIXTURE_ACCOUNTS: [(&str, &str, &str); 2] = [
    ("admin", "password", "123e4567-e89b-12d3-a456-426614174000"),
    ("testuser", "testpass", "3fa85f64-5717-4562-b3fc-2c963f66afa6"),
];

/// In-memory authenticator backed by a fixed account table.
///
/// Stands in for the external account system; there is no registration.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureLoginService;

#[async_trait]
impl LoginService for FixtureLoginService {
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<UserId, Error> {
        let account = FIXTURE_ACCOUNTS.iter().find(|(username, password, _)| {
            *username == credentials.username() && *password == credentials.password()
        });
        match account {
            Some((_, _, id)) => UserId::new(id)
                .map_err(|err| Error::internal(format!("invalid fixture user id: {err}"))),
            None => Err(Error::unauthorized("Invalid credentials")),
        }
    }
}
