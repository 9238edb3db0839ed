//! Request authentication for Actix Web APIs.
//!
//! # Module Structure
//!
//! - `api_key` - API key authentication (`username`/`api_key` query parameters)
//! - `authentication` - Core trait, check result, and the pass-through scheme
//! - `basic` - HTTP Basic authentication (RFC 7617)
//! - `challenge` - `WWW-Authenticate` challenge and `401` response building
//! - `crypto` - Password encoding (Argon2, NoOp)
//! - `error` - Failure causes reported by the schemes
//! - `identity` - Identity model and API key generation
//! - `middleware` - Actix Web middleware (`AuthTransform`)
//! - `store` - Identity store contract and in-memory backend

// Re-exports for convenience
pub use api_key::{ApiKeyAuthentication, API_KEY_PARAM, USERNAME_PARAM};
pub use authentication::{AuthResult, Authentication, NoOpAuthentication, NO_ADDR, NO_HOST};
pub use basic::BasicAuthentication;
pub use challenge::{Challenge, DEFAULT_REALM};
pub use crypto::{Argon2PasswordEncoder, NoOpPasswordEncoder, PasswordEncoder};
pub use error::AuthFailure;
pub use identity::{generate_api_key, Identity};
pub use middleware::{AuthService, AuthTransform};
pub use store::{IdentityStore, MemoryIdentityStore};

pub mod api_key;
pub mod authentication;
pub mod basic;
pub mod challenge;
pub mod crypto;
pub mod error;
pub mod identity;
pub mod middleware;
pub mod store;
