//! Login credentials handed to the authentication capability.
//!
//! Both the JSON login endpoint and the login form build these through
//! [`LoginCredentials::try_from_parts`], so blank-field rules cannot drift
//! between them.

use zeroize::Zeroizing;

/// Returned when login payload values are blank.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginValidationError {
    /// Username was missing or blank once trimmed.
    #[error("username must not be empty")]
    EmptyUsername,
    /// Password was blank.
    #[error("password must not be empty")]
    EmptyPassword,
}

impl LoginValidationError {
    /// Name of the offending input field.
    #[must_use]
    pub fn field(&self) -> &'static str {
        match self {
            Self::EmptyUsername => "username",
            Self::EmptyPassword => "password",
        }
    }
}

/// Validated login credentials.
///
/// ## Invariants
/// - `username` is trimmed and non-empty.
/// - `password` is non-empty; surrounding whitespace is kept as typed.
///
/// # Examples
/// ```
/// use notes_backend::domain::LoginCredentials;
///
/// let creds = LoginCredentials::try_from_parts(" testuser ", "testpass").unwrap();
/// assert_eq!(creds.username(), "testuser");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    username: String,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Construct credentials from raw username/password inputs.
    pub fn try_from_parts(username: &str, password: &str) -> Result<Self, LoginValidationError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(LoginValidationError::EmptyUsername);
        }
        if password.is_empty() {
            return Err(LoginValidationError::EmptyPassword);
        }

        Ok(Self {
            username: username.to_owned(),
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Username used for account lookups.
    #[must_use]
    pub fn username(&self) -> &str {
        self.username.as_str()
    }

    /// Password exactly as provided.
    #[must_use]
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}
