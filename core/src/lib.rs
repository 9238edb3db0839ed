//! # Actix ApiAuth
//!
//! Pluggable request authentication for Actix Web APIs.
//!
//! Three schemes are provided out of the box:
//!
//! - [`NoOpAuthentication`](http::auth::NoOpAuthentication) lets every
//!   request through, for resources that need no credentials
//! - [`BasicAuthentication`](http::auth::BasicAuthentication) implements
//!   HTTP Basic (RFC 7617) against an identity store
//! - [`ApiKeyAuthentication`](http::auth::ApiKeyAuthentication) verifies a
//!   `username`/`api_key` query parameter pair
//!
//! Credentialed schemes look identities up through the
//! [`IdentityStore`](http::auth::IdentityStore) trait; the in-memory
//! [`MemoryIdentityStore`](http::auth::MemoryIdentityStore) covers
//! development and tests, and custom backends plug in by implementing the
//! trait. Wrapping a scheme in [`AuthTransform`](http::auth::AuthTransform)
//! guards an `App` or scope: rejected requests are answered with
//! `401 Unauthorized` and a `WWW-Authenticate` challenge before they reach
//! any handler.
//!
//! Rejections never disclose their cause. A missing header, an unknown
//! username, and a wrong secret all produce the same challenge, so the
//! responses cannot be used to probe which accounts exist.
//!
//! ## Quick Start
//!
//! Add to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! actix-web = "4"
//! actix-apiauth-core = "0.1"
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use actix_web::{web, App, HttpServer};
//! use actix_apiauth_core::prelude::*;
//! use std::sync::Arc;
//!
//! let store = Arc::new(
//!     MemoryIdentityStore::new()
//!         .with_identity(Identity::new("johndoe", "pass").api_key("sk_live_abc123")),
//! );
//!
//! App::new()
//!     .service(
//!         web::scope("/api")
//!             .wrap(AuthTransform::new(ApiKeyAuthentication::with_shared_store(
//!                 Arc::clone(&store),
//!             )))
//!             .service(list_notes),
//!     )
//!     .service(
//!         web::scope("")
//!             .wrap(AuthTransform::new(
//!                 BasicAuthentication::with_shared_store(store).realm("api"),
//!             ))
//!             .service(home),
//!     );
//! ```

pub mod http;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::http::auth::{
        ApiKeyAuthentication, Argon2PasswordEncoder, AuthResult, AuthTransform, Authentication,
        BasicAuthentication, Challenge, Identity, IdentityStore, MemoryIdentityStore,
        NoOpAuthentication, PasswordEncoder,
    };
}
