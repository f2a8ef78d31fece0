//! Shared helpers for HTTP integration tests.
//!
//! Requests are driven through `tower::ServiceExt::oneshot` against the
//! production router, so the full middleware stack is exercised. Cookies
//! are shuttled manually: helpers collect `Set-Cookie` values from a
//! response and feed them back as a `Cookie` header.

// Each integration test binary compiles this module separately and uses a
// different subset of the helpers.
#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use quill_api::auth::session::SessionConfig;
use quill_api::config::ServerConfig;
use quill_api::router::build_app_router;
use quill_api::state::AppState;

/// Build a test `ServerConfig` with a fixed signing secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        request_timeout_secs: 30,
        session: SessionConfig {
            secret_key: "integration-test-secret-key-0123456789".to_string(),
            session_expiry_days: 7,
        },
    }
}

/// Build the full application router with the production middleware stack.
pub fn build_test_app(pool: PgPool) -> Router {
    build_app_router(AppState::new(pool, test_config()))
}

/// Send a GET request.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("request should build"),
    )
    .await
    .expect("request should complete")
}

/// Send a GET request with a `Cookie` header.
pub async fn get_with_cookies(app: Router, uri: &str, cookies: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .header(header::COOKIE, cookies)
            .body(Body::empty())
            .expect("request should build"),
    )
    .await
    .expect("request should complete")
}

/// Send a POST with an `application/x-www-form-urlencoded` body.
pub async fn post_form(app: Router, uri: &str, body: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .expect("request should build"),
    )
    .await
    .expect("request should complete")
}

/// Send a POST form with a `Cookie` header.
pub async fn post_form_with_cookies(
    app: Router,
    uri: &str,
    body: &str,
    cookies: &str,
) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .header(header::COOKIE, cookies)
            .body(Body::from(body.to_string()))
            .expect("request should build"),
    )
    .await
    .expect("request should complete")
}

/// Collect a response body into a `String`.
pub async fn body_string(response: Response<Body>) -> String {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    String::from_utf8(bytes.to_vec()).expect("body should be UTF-8")
}

/// Collect every cookie a response sets into a single `Cookie` header value.
pub fn response_cookies(response: &Response<Body>) -> String {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .filter_map(|value| value.split(';').next())
        .collect::<Vec<_>>()
        .join("; ")
}

/// The `Location` header of a redirect response.
pub fn location(response: &Response<Body>) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .expect("response should carry a Location header")
        .to_str()
        .expect("Location should be UTF-8")
}

/// Register a user through the HTTP surface and return the session cookie.
///
/// The first user registered against a fresh database gets id 1 and is
/// therefore the administrator.
pub async fn register_user(pool: &PgPool, name: &str, email: &str, password: &str) -> String {
    let app = build_test_app(pool.clone());
    let body = format!(
        "name={name}&email={}&password={password}",
        email.replace('@', "%40")
    );
    let response = post_form(app, "/register", &body).await;
    assert_eq!(
        response.status(),
        StatusCode::SEE_OTHER,
        "registration should redirect"
    );
    response_cookies(&response)
}

/// Log in through the HTTP surface and return the session cookie.
pub async fn login_user(pool: &PgPool, email: &str, password: &str) -> String {
    let app = build_test_app(pool.clone());
    let body = format!(
        "email={}&password={password}",
        email.replace('@', "%40")
    );
    let response = post_form(app, "/login", &body).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER, "login should redirect");
    assert_eq!(location(&response), "/", "successful login should go home");
    response_cookies(&response)
}
