//! HTTP-level integration tests for the administrator post CRUD routes.
//!
//! The admin gate is the literal rule "user id equals 1": the first user
//! registered against the fresh per-test database is the administrator,
//! the second is not.

mod common;

use axum::http::StatusCode;
use common::{
    body_string, build_test_app, get, get_with_cookies, location, post_form_with_cookies,
    register_user, response_cookies,
};
use quill_db::repositories::PostRepo;
use sqlx::PgPool;

const POST_FORM: &str = "title=The+Life+of+Cactus&subtitle=Who+knew&img_url=https%3A%2F%2Fexample.com%2Fcactus.jpg&body=%3Cp%3ECacti+are+fascinating.%3C%2Fp%3E";

/// Register the admin (id 1) and create one post, returning the admin's
/// cookie and the post id.
async fn seed_admin_with_post(pool: &PgPool) -> (String, i64) {
    let cookies = register_user(pool, "Admin", "admin@example.com", "long-enough-password").await;

    let app = build_test_app(pool.clone());
    let response = post_form_with_cookies(app, "/new-post", POST_FORM, &cookies).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");

    let posts = PostRepo::list_with_authors(pool)
        .await
        .expect("listing should succeed");
    assert_eq!(posts.len(), 1);
    (cookies, posts[0].id)
}

// ---------------------------------------------------------------------------
// Authorization
// ---------------------------------------------------------------------------

/// Anonymous visitors are redirected to the login form.
#[sqlx::test(migrations = "../db/migrations")]
async fn anonymous_visitor_is_redirected_to_login(pool: PgPool) {
    for uri in ["/new-post", "/edit-post/1", "/delete/1"] {
        let app = build_test_app(pool.clone());
        let response = get(app, uri).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER, "{uri}");
        assert_eq!(location(&response), "/login", "{uri}");
    }
}

/// Authenticated non-admins get 404, not 403: protected routes must be
/// indistinguishable from missing ones.
#[sqlx::test(migrations = "../db/migrations")]
async fn non_admin_sees_not_found(pool: PgPool) {
    let (_admin_cookies, post_id) = seed_admin_with_post(&pool).await;
    let user_cookies =
        register_user(&pool, "Reader", "reader@example.com", "long-enough-password").await;

    for uri in [
        "/new-post".to_string(),
        format!("/edit-post/{post_id}"),
        format!("/delete/{post_id}"),
    ] {
        let app = build_test_app(pool.clone());
        let response = get_with_cookies(app, &uri, &user_cookies).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{uri}");
    }

    // The post must have survived the rejected delete attempt.
    let posts = PostRepo::list_with_authors(&pool)
        .await
        .expect("listing should succeed");
    assert_eq!(posts.len(), 1);
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

/// The admin can create a post; it appears on the index with author and date.
#[sqlx::test(migrations = "../db/migrations")]
async fn admin_creates_a_post(pool: PgPool) {
    let (_cookies, _post_id) = seed_admin_with_post(&pool).await;

    let app = build_test_app(pool);
    let response = get(app, "/").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("The Life of Cactus"));
    assert!(body.contains("Posted by Admin"));
}

/// The new-post form renders for the admin.
#[sqlx::test(migrations = "../db/migrations")]
async fn admin_sees_new_post_form(pool: PgPool) {
    let cookies = register_user(&pool, "Admin", "admin@example.com", "long-enough-password").await;

    let app = build_test_app(pool);
    let response = get_with_cookies(app, "/new-post", &cookies).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("New Post"));
    assert!(body.contains("action=\"/new-post\""));
}

/// A duplicate title bounces back to the form with a flash.
#[sqlx::test(migrations = "../db/migrations")]
async fn duplicate_title_flashes(pool: PgPool) {
    let (cookies, _post_id) = seed_admin_with_post(&pool).await;

    let app = build_test_app(pool.clone());
    let response = post_form_with_cookies(app, "/new-post", POST_FORM, &cookies).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/new-post");

    // Merge the flash cookie into the admin's cookies to read the message.
    let flash_cookies = format!("{cookies}; {}", response_cookies(&response));
    let app = build_test_app(pool);
    let response = get_with_cookies(app, "/new-post", &flash_cookies).await;
    let body = body_string(response).await;
    assert!(body.contains("A post with that title already exists"));
}

/// Submitting a post with a non-http image URL is a 400.
#[sqlx::test(migrations = "../db/migrations")]
async fn invalid_img_url_rejected(pool: PgPool) {
    let cookies = register_user(&pool, "Admin", "admin@example.com", "long-enough-password").await;

    let app = build_test_app(pool);
    let response = post_form_with_cookies(
        app,
        "/new-post",
        "title=T&subtitle=S&img_url=javascript%3Aalert(1)&body=B",
        &cookies,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Edit
// ---------------------------------------------------------------------------

/// The edit form comes back prefilled with the stored field values.
#[sqlx::test(migrations = "../db/migrations")]
async fn edit_form_is_prefilled(pool: PgPool) {
    let (cookies, post_id) = seed_admin_with_post(&pool).await;

    let app = build_test_app(pool);
    let response = get_with_cookies(app, &format!("/edit-post/{post_id}"), &cookies).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("Edit Post"));
    assert!(body.contains("value=\"The Life of Cactus\""));
    assert!(body.contains("https://example.com/cactus.jpg"));
}

/// Editing copies the submitted fields onto the record and keeps the
/// original publish date.
#[sqlx::test(migrations = "../db/migrations")]
async fn edit_updates_fields_but_not_publish_date(pool: PgPool) {
    let (cookies, post_id) = seed_admin_with_post(&pool).await;
    let before = PostRepo::find_by_id(&pool, post_id)
        .await
        .expect("lookup should succeed")
        .expect("post should exist");

    let app = build_test_app(pool.clone());
    let response = post_form_with_cookies(
        app,
        &format!("/edit-post/{post_id}"),
        "title=Cactus%2C+Revised&subtitle=Second+thoughts&img_url=https%3A%2F%2Fexample.com%2Fnew.jpg&body=%3Cp%3ERevised.%3C%2Fp%3E",
        &cookies,
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), format!("/post/{post_id}"));

    let after = PostRepo::find_by_id(&pool, post_id)
        .await
        .expect("lookup should succeed")
        .expect("post should exist");
    assert_eq!(after.title, "Cactus, Revised");
    assert_eq!(after.subtitle, "Second thoughts");
    assert_eq!(after.img_url, "https://example.com/new.jpg");
    assert_eq!(after.body, "<p>Revised.</p>");
    assert_eq!(after.published_on, before.published_on);
}

/// Editing a missing post is a 404.
#[sqlx::test(migrations = "../db/migrations")]
async fn editing_missing_post_is_not_found(pool: PgPool) {
    let cookies = register_user(&pool, "Admin", "admin@example.com", "long-enough-password").await;

    let app = build_test_app(pool);
    let response = get_with_cookies(app, "/edit-post/9999", &cookies).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

/// The admin can delete a post; its detail page then 404s.
#[sqlx::test(migrations = "../db/migrations")]
async fn admin_deletes_a_post(pool: PgPool) {
    let (cookies, post_id) = seed_admin_with_post(&pool).await;

    let app = build_test_app(pool.clone());
    let response = get_with_cookies(app, &format!("/delete/{post_id}"), &cookies).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");

    let app = build_test_app(pool);
    let response = get(app, &format!("/post/{post_id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
