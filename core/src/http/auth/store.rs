//! Identity store contract and the in-memory backend.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use tracing::warn;

use crate::http::auth::crypto::{NoOpPasswordEncoder, PasswordEncoder};
use crate::http::auth::identity::Identity;

/// Lookup and verification capability the credentialed authenticators rely on.
///
/// Implement this to plug in a custom backend (database, directory service,
/// remote identity provider). Both operations are read-only from the
/// authenticators' perspective, and a missing username is a normal outcome,
/// not an error.
///
/// # Example
/// ```ignore
/// struct PgIdentityStore {
///     pool: PgPool,
///     encoder: Argon2PasswordEncoder,
/// }
///
/// impl IdentityStore for PgIdentityStore {
///     fn find_by_username(&self, username: &str) -> Option<Identity> {
///         self.pool
///             .query_row("SELECT username, password, api_key FROM identities WHERE username = $1", username)
///             .map(|row| Identity::with_encoded_password(&row.username, row.password))
///     }
///
///     fn verify_password(&self, identity: &Identity, candidate: &str) -> bool {
///         self.encoder.matches(candidate, identity.get_password())
///     }
/// }
/// ```
pub trait IdentityStore: Send + Sync {
    /// Looks up an identity by its unique username.
    fn find_by_username(&self, username: &str) -> Option<Identity>;

    /// Verifies a candidate password against the identity's stored secret.
    fn verify_password(&self, identity: &Identity, candidate: &str) -> bool;
}

/// In-memory identity store.
///
/// Useful for development, tests, and small deployments. Passwords are
/// verified through the configured [`PasswordEncoder`], plain-text comparison
/// by default.
///
/// # Example
/// ```
/// use actix_apiauth_core::http::auth::{Identity, IdentityStore, MemoryIdentityStore};
///
/// let store = MemoryIdentityStore::new()
///     .with_identity(Identity::new("johndoe", "pass").api_key("sk_live_abc123"))
///     .with_identity(Identity::new("daniel", "other"));
///
/// assert!(store.find_by_username("johndoe").is_some());
/// assert!(store.find_by_username("nobody").is_none());
/// ```
pub struct MemoryIdentityStore {
    identities: RwLock<HashMap<String, Identity>>,
    password_encoder: Arc<dyn PasswordEncoder>,
}

impl MemoryIdentityStore {
    /// Creates an empty store with plain-text password comparison.
    pub fn new() -> Self {
        MemoryIdentityStore {
            identities: RwLock::new(HashMap::new()),
            password_encoder: Arc::new(NoOpPasswordEncoder),
        }
    }

    /// Sets the encoder used to verify passwords.
    pub fn password_encoder<E: PasswordEncoder + 'static>(mut self, encoder: E) -> Self {
        self.password_encoder = Arc::new(encoder);
        self
    }

    /// Registers an identity (builder pattern).
    pub fn with_identity(self, identity: Identity) -> Self {
        self.add_identity(identity);
        self
    }

    /// Registers an identity.
    ///
    /// Usernames are unique; a second registration under the same name is
    /// skipped with a warning rather than silently replacing the first.
    pub fn add_identity(&self, identity: Identity) {
        use std::collections::hash_map::Entry;

        let username = identity.get_username().to_string();
        let mut identities = self.identities.write().unwrap();
        match identities.entry(username) {
            Entry::Occupied(entry) => {
                warn!(username = %entry.key(), "identity already registered, skipping");
            }
            Entry::Vacant(entry) => {
                entry.insert(identity);
            }
        }
    }

    /// Removes an identity, returning it if it was present.
    pub fn remove_identity(&self, username: &str) -> Option<Identity> {
        let mut identities = self.identities.write().unwrap();
        identities.remove(username)
    }

    /// Returns the number of registered identities.
    pub fn len(&self) -> usize {
        let identities = self.identities.read().unwrap();
        identities.len()
    }

    /// Returns true if no identities are registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for MemoryIdentityStore {
    fn default() -> Self {
        Self::new()
    }
}

impl IdentityStore for MemoryIdentityStore {
    fn find_by_username(&self, username: &str) -> Option<Identity> {
        let identities = self.identities.read().unwrap();
        identities.get(username).cloned()
    }

    fn verify_password(&self, identity: &Identity, candidate: &str) -> bool {
        self.password_encoder
            .matches(candidate, identity.get_password())
    }
}
