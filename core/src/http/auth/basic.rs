//! HTTP Basic authentication backed by an identity store.

use std::sync::Arc;

use actix_web::dev::ServiceRequest;
use actix_web::http::header;
use base64::prelude::*;
use tracing::debug;

use crate::http::auth::authentication::{AuthResult, Authentication};
use crate::http::auth::challenge::Challenge;
use crate::http::auth::error::AuthFailure;
use crate::http::auth::store::IdentityStore;

/// Authentication scheme implementing HTTP Basic (RFC 7617).
///
/// The `Authorization` header is expected to carry `Basic <base64>` where the
/// decoded payload is `username:password`. The username is looked up in the
/// [`IdentityStore`] and the password verified through it. Any failure, from
/// a missing header to a wrong password, produces the same rejection so the
/// response does not leak which usernames exist.
///
/// # Example
/// ```
/// use actix_apiauth_core::http::auth::{BasicAuthentication, Identity, MemoryIdentityStore};
///
/// let store = MemoryIdentityStore::new()
///     .with_identity(Identity::new("johndoe", "pass"));
/// let auth = BasicAuthentication::new(store).realm("api");
/// assert_eq!(auth.get_realm(), "api");
/// ```
pub struct BasicAuthentication<S: IdentityStore> {
    store: Arc<S>,
    realm: String,
}

impl<S: IdentityStore> BasicAuthentication<S> {
    /// Creates a Basic authentication scheme over the given store, using the
    /// default realm.
    pub fn new(store: S) -> Self {
        Self::with_shared_store(Arc::new(store))
    }

    /// Creates a Basic authentication scheme over an already shared store.
    ///
    /// Useful when several schemes or server workers verify against the same
    /// backend.
    pub fn with_shared_store(store: Arc<S>) -> Self {
        BasicAuthentication {
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
        Challenge::basic(self.realm.clone())
    }

    /// Splits a `Basic <base64>` header value into `(username, password)`.
    fn decode_credentials(header: &str) -> Option<(String, String)> {
        let (scheme, encoded) = header.split_once(' ')?;
        if !scheme.eq_ignore_ascii_case("Basic") {
            return None;
        }
        let decoded = BASE64_STANDARD.decode(encoded.trim()).ok()?;
        let decoded = String::from_utf8(decoded).ok()?;
        let (username, password) = decoded.split_once(':')?;
        Some((username.to_string(), password.to_string()))
    }

    fn check(&self, req: &ServiceRequest) -> Result<String, AuthFailure> {
        let header = req
            .headers()
            .get(header::AUTHORIZATION)
            .ok_or(AuthFailure::MissingCredential)?;
        let header = header.to_str().map_err(|_| AuthFailure::MalformedCredential)?;
        let (username, password) =
            Self::decode_credentials(header).ok_or(AuthFailure::MalformedCredential)?;
        let identity = self
            .store
            .find_by_username(&username)
            .ok_or(AuthFailure::UnknownIdentity)?;
        if !self.store.verify_password(&identity, &password) {
            return Err(AuthFailure::VerificationFailure);
        }
        Ok(username)
    }
}

impl<S: IdentityStore> Authentication for BasicAuthentication<S> {
    fn is_authenticated(&self, req: &ServiceRequest) -> AuthResult {
        match self.check(req) {
            Ok(username) => {
                debug!(username = %username, "basic credentials accepted");
                AuthResult::Authenticated
            }
            Err(reason) => {
                debug!(
                    identifier = %self.get_identifier(req),
                    %reason,
                    "basic credentials rejected"
                );
                AuthResult::Rejected(self.challenge())
            }
        }
    }
}

impl<S: IdentityStore> Clone for BasicAuthentication<S> {
    fn clone(&self) -> Self {
        BasicAuthentication {
            store: Arc::clone(&self.store),
            realm: self.realm.clone(),
        }
    }
}
