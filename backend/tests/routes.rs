use std::path::Path;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use umamibox_server::config::Config;
use umamibox_server::i18n::{CatalogStore, Locale};
use umamibox_server::{build_router, AppState};

fn app_with(default_locale: Locale, static_dir: &Path) -> Router {
    let messages_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("../messages");
    let config = Config {
        static_dir: static_dir.to_path_buf(),
        messages_dir: messages_dir.clone(),
        default_locale,
        ..Config::default()
    };
    let catalogs = CatalogStore::load(&messages_dir, default_locale).unwrap();
    build_router(Arc::new(AppState { config, catalogs }))
}

fn app() -> Router {
    app_with(Locale::En, Path::new("does-not-exist"))
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_check_responds_ok() {
    let response = app()
        .oneshot(Request::get("/api/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"OK");
}

#[tokio::test]
async fn messages_are_served_per_locale() {
    let response = app()
        .oneshot(Request::get("/api/messages/vi").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_LANGUAGE], "vi");
    let catalog = body_json(response).await;
    assert_eq!(catalog["header"]["logo"], "UmamiBox");
    assert!(catalog["faq"]["questions"].as_array().is_some());
}

#[tokio::test]
async fn unknown_locale_falls_back_to_default() {
    let response = app_with(Locale::Vi, Path::new("does-not-exist"))
        .oneshot(Request::get("/api/messages/fr").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_LANGUAGE], "vi");
}

#[tokio::test]
async fn locales_lists_supported_codes() {
    let response = app()
        .oneshot(Request::get("/api/locales").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["locales"], serde_json::json!(["en", "vi"]));
    assert_eq!(body["default"], "en");
}

#[tokio::test]
async fn newsletter_accepts_valid_email() {
    let request = Request::post("/api/newsletter")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"email":"chef@umamibox.vn"}"#))
        .unwrap();
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn newsletter_rejects_invalid_email() {
    let request = Request::post("/api/newsletter")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"email":"not-an-email"}"#))
        .unwrap();
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Invalid email address");
}

async fn post_newsletter(body: &'static str) -> axum::response::Response {
    let request = Request::post("/api/newsletter")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap();
    app().oneshot(request).await.unwrap()
}

#[tokio::test]
async fn newsletter_rejects_malformed_bodies_with_json_error() {
    for body in ["{}", "not json", r#"{"email":5}"#] {
        let response = post_newsletter(body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body {}", body);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json",
            "body {}",
            body
        );
        let json = body_json(response).await;
        assert!(json["error"].is_string(), "body {}", body);
    }
}

#[tokio::test]
async fn newsletter_without_json_content_type_is_a_bad_request() {
    let request = Request::post("/api/newsletter")
        .body(Body::from(r#"{"email":"chef@umamibox.vn"}"#))
        .unwrap();
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(response).await["error"].is_string());
}

#[tokio::test]
async fn client_routes_fall_back_to_index() {
    let dist = tempfile::tempdir().unwrap();
    std::fs::write(dist.path().join("index.html"), "<html>umamibox</html>").unwrap();

    let response = app_with(Locale::En, dist.path())
        .oneshot(Request::get("/vi").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"<html>umamibox</html>");
}
