//! API key authentication carried in the query string.

use std::sync::Arc;

use actix_web::dev::ServiceRequest;
use tracing::debug;

use crate::http::auth::authentication::{AuthResult, Authentication};
use crate::http::auth::challenge::Challenge;
use crate::http::auth::error::AuthFailure;
use crate::http::auth::store::IdentityStore;

/// Query parameter naming the identity to authenticate.
pub const USERNAME_PARAM: &str = "username";
/// Query parameter carrying the identity's API key.
pub const API_KEY_PARAM: &str = "api_key";

/// Authentication scheme verifying a `username`/`api_key` pair from the
/// query string.
///
/// The named identity is looked up in the [`IdentityStore`] and the supplied
/// key compared against its stored key with exact equality. An identity with
/// no key on record can never authenticate this way. As with Basic, every
/// failure collapses into one rejection shape.
///
/// # Example
/// ```
/// use actix_apiauth_core::http::auth::{ApiKeyAuthentication, Identity, MemoryIdentityStore};
///
/// let store = MemoryIdentityStore::new()
///     .with_identity(Identity::new("johndoe", "pass").api_key("sk_live_abc123"));
/// let auth = ApiKeyAuthentication::new(store);
/// ```
pub struct ApiKeyAuthentication<S: IdentityStore> {
    store: Arc<S>,
    realm: String,
}

impl<S: IdentityStore> ApiKeyAuthentication<S> {
    /// Creates an API key scheme over the given store, using the default
    /// realm.
    pub fn new(store: S) -> Self {
        Self::with_shared_store(Arc::new(store))
    }

    /// Creates an API key scheme over an already shared store.
    pub fn with_shared_store(store: Arc<S>) -> Self {
        ApiKeyAuthentication {
            store,
            realm: crate::http::auth::challenge::DEFAULT_REALM.to_string(),
        }
    }

    /// Sets the realm advertised in the challenge.
    pub fn realm(mut self, realm: impl Into<String>) -> Self {
        self.realm = realm.into();
        self
    }

    /// Returns the realm advertised in the challenge.
    pub fn get_realm(&self) -> &str {
        &self.realm
    }

    fn challenge(&self) -> Challenge {
        Challenge::api_key(self.realm.clone())
    }

    /// Returns the decoded value of the first query parameter named `name`.
    fn query_param(req: &ServiceRequest, name: &str) -> Option<String> {
        req.query_string().split('&').find_map(|pair| {
            let (key, value) = pair.split_once('=')?;
            if key == name {
                Some(urlencoding::decode(value).ok()?.into_owned())
            } else {
                None
            }
        })
    }

    fn check(&self, req: &ServiceRequest) -> Result<String, AuthFailure> {
        let username =
            Self::query_param(req, USERNAME_PARAM).ok_or(AuthFailure::MissingCredential)?;
        let key = Self::query_param(req, API_KEY_PARAM).ok_or(AuthFailure::MissingCredential)?;
        let identity = self
            .store
            .find_by_username(&username)
            .ok_or(AuthFailure::UnknownIdentity)?;
        if identity.get_api_key() != Some(key.as_str()) {
            return Err(AuthFailure::VerificationFailure);
        }
        Ok(username)
    }
}

impl<S: IdentityStore> Authentication for ApiKeyAuthentication<S> {
    fn is_authenticated(&self, req: &ServiceRequest) -> AuthResult {
        match self.check(req) {
            Ok(username) => {
                debug!(username = %username, "api key accepted");
                AuthResult::Authenticated
            }
            Err(reason) => {
                debug!(
                    identifier = %self.get_identifier(req),
                    %reason,
                    "api key rejected"
                );
                AuthResult::Rejected(self.challenge())
            }
        }
    }
}

impl<S: IdentityStore> Clone for ApiKeyAuthentication<S> {
    fn clone(&self) -> Self {
        ApiKeyAuthentication {
            store: Arc::clone(&self.store),
            realm: self.realm.clone(),
        }
    }
}
