//! Shared fixtures for the integration tests.
//!
//! Builds the seeded identity store and a three-scope application that
//! mirrors the demo server, so every test file drives the same wiring.

use std::sync::Arc;

use actix_web::{get, test, web, App, HttpResponse, Responder};
use base64::prelude::*;

use actix_apiauth_core::http::auth::middleware::AuthTransform;
use actix_apiauth_core::http::auth::{
    ApiKeyAuthentication, Argon2PasswordEncoder, BasicAuthentication, Identity,
    MemoryIdentityStore, NoOpAuthentication, PasswordEncoder,
};

/// API key registered for `johndoe` in the test store.
pub const JOHNDOE_KEY: &str = "sk_test_johndoe_1234";

/// Argon2-seeded store shared by the test app.
///
/// Registered identities:
/// - `johndoe` / `pass`, carrying [`JOHNDOE_KEY`]
/// - `daniel` / `secret`, without an API key
pub fn test_store() -> Arc<MemoryIdentityStore> {
    let encoder = Argon2PasswordEncoder::new();

    Arc::new(
        MemoryIdentityStore::new()
            .password_encoder(encoder.clone())
            .with_identity(
                Identity::with_encoded_password("johndoe", encoder.encode("pass"))
                    .api_key(JOHNDOE_KEY),
            )
            .with_identity(Identity::with_encoded_password(
                "daniel",
                encoder.encode("secret"),
            )),
    )
}

/// Encodes a `username:password` pair into an `Authorization` header value.
pub fn basic_auth(username: &str, password: &str) -> String {
    let credentials = format!("{}:{}", username, password);
    format!("Basic {}", BASE64_STANDARD.encode(credentials))
}

// Handlers mounted behind each scope.

#[get("/info")]
pub async fn public_info() -> impl Responder {
    HttpResponse::Ok().body("Public information")
}

#[get("/notes")]
pub async fn list_notes() -> impl Responder {
    HttpResponse::Ok().body("Notes list")
}

#[get("/")]
pub async fn index() -> impl Responder {
    HttpResponse::Ok().body("Welcome!")
}

/// Test application with the same protection levels as the demo server:
/// `/public/...` is open (pass-through scheme), `/api/...` requires a
/// `username`/`api_key` query pair, and everything else requires HTTP
/// Basic credentials.
pub async fn create_test_app() -> impl actix_web::dev::Service<
    actix_http::Request,
    Response = actix_web::dev::ServiceResponse,
    Error = actix_web::Error,
> {
    let store = test_store();

    test::init_service(
        App::new()
            .service(
                web::scope("/public")
                    .wrap(AuthTransform::new(NoOpAuthentication))
                    .service(public_info),
            )
            .service(
                web::scope("/api")
                    .wrap(AuthTransform::new(ApiKeyAuthentication::with_shared_store(
                        Arc::clone(&store),
                    )))
                    .service(list_notes),
            )
            .service(
                web::scope("")
                    .wrap(AuthTransform::new(BasicAuthentication::with_shared_store(
                        store,
                    )))
                    .service(index),
            ),
    )
    .await
}
