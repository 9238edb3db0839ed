//! Identity records held by an identity store.

use std::fmt;

use rand::distributions::Alphanumeric;
use rand::{thread_rng, Rng};

/// Length of keys produced by [`generate_api_key`].
const GENERATED_KEY_LEN: usize = 40;

/// A single identity known to an [`IdentityStore`](crate::http::auth::IdentityStore).
///
/// Carries the unique username, the encoded password, and optionally the
/// opaque API-key value for the query-parameter scheme. Records are read-only
/// once handed to an authenticator; there is no per-request mutation.
///
/// # Example
/// ```
/// use actix_apiauth_core::http::auth::Identity;
///
/// let identity = Identity::new("johndoe", "pass").api_key("sk_live_abc123");
/// assert_eq!(identity.get_username(), "johndoe");
/// assert_eq!(identity.get_api_key(), Some("sk_live_abc123"));
/// ```
#[derive(Clone, Debug)]
pub struct Identity {
    username: String,
    password: String,
    api_key: Option<String>,
}

impl Identity {
    /// Creates an identity with a plain-text password.
    ///
    /// Only suitable together with `NoOpPasswordEncoder`; prefer
    /// [`with_encoded_password`](Identity::with_encoded_password) everywhere
    /// else.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Identity {
            username: username.into(),
            password: password.into(),
            api_key: None,
        }
    }

    /// Creates an identity whose password is already encoded.
    ///
    /// # Example
    /// ```
    /// use actix_apiauth_core::http::auth::{Argon2PasswordEncoder, Identity, PasswordEncoder};
    ///
    /// let encoder = Argon2PasswordEncoder::new();
    /// let identity = Identity::with_encoded_password("johndoe", encoder.encode("pass"));
    /// ```
    pub fn with_encoded_password(username: &str, encoded_password: String) -> Self {
        Identity {
            username: username.to_string(),
            password: encoded_password,
            api_key: None,
        }
    }

    /// Sets the API-key value (builder pattern).
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Assigns a freshly generated API key (builder pattern).
    pub fn generated_api_key(self) -> Self {
        let key = generate_api_key();
        self.api_key(key)
    }

    /// Returns the username.
    pub fn get_username(&self) -> &str {
        &self.username
    }

    /// Returns the encoded password (for verification by the store).
    pub fn get_password(&self) -> &str {
        &self.password
    }

    /// Returns the stored API-key value, if one is assigned.
    pub fn get_api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Identity {{ username: {}, api_key: {} }}",
            self.username,
            if self.api_key.is_some() { "set" } else { "unset" }
        )
    }
}

/// Produces a random 40-character alphanumeric API-key value.
///
/// Convenience for seeding an in-memory store; durable key management
/// belongs to whatever backs [`IdentityStore`](crate::http::auth::IdentityStore)
/// in production.
pub fn generate_api_key() -> String {
    thread_rng()
        .sample_iter(&Alphanumeric)
        .take(GENERATED_KEY_LEN)
        .map(char::from)
        .collect()
}
