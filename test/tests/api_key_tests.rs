//! API key authentication tests.
//!
//! End-to-end tests for the query parameter flow: parameter extraction,
//! identity lookup, exact key comparison, and the challenge sent on
//! rejection.

mod common;

use actix_web::http::{header, StatusCode};
use actix_web::test;

use common::{create_test_app, JOHNDOE_KEY};

#[actix_web::test]
async fn test_api_key_success() {
    let app = create_test_app().await;

    let req = test::TestRequest::get()
        .uri(&format!("/api/notes?username=johndoe&api_key={}", JOHNDOE_KEY))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = test::read_body(resp).await;
    assert!(String::from_utf8_lossy(&body).contains("Notes list"));
}

#[actix_web::test]
async fn test_missing_params_return_401_with_challenge() {
    let app = create_test_app().await;

    let req = test::TestRequest::get().uri("/api/notes").to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let challenge = resp
        .headers()
        .get(header::WWW_AUTHENTICATE)
        .and_then(|value| value.to_str().ok())
        .unwrap();
    assert_eq!(challenge, "ApiKey Realm=\"actix-apiauth\"");
}

#[actix_web::test]
async fn test_username_alone_is_rejected() {
    let app = create_test_app().await;

    let req = test::TestRequest::get()
        .uri("/api/notes?username=johndoe")
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_wrong_key_is_rejected() {
    let app = create_test_app().await;

    let req = test::TestRequest::get()
        .uri("/api/notes?username=johndoe&api_key=sk_test_wrong")
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_unknown_username_is_rejected() {
    let app = create_test_app().await;

    let req = test::TestRequest::get()
        .uri(&format!("/api/notes?username=nobody&api_key={}", JOHNDOE_KEY))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_identity_without_key_cannot_use_scheme() {
    let app = create_test_app().await;

    // daniel has a password but no API key on record
    let req = test::TestRequest::get()
        .uri("/api/notes?username=daniel&api_key=secret")
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_basic_credentials_do_not_satisfy_api_scope() {
    let app = create_test_app().await;

    let req = test::TestRequest::get()
        .uri("/api/notes")
        .insert_header(("Authorization", common::basic_auth("johndoe", "pass")))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}
