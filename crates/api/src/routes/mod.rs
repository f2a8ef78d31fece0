//! Route table.

pub mod health;

use axum::routing::get;
use axum::Router;

use crate::handlers::{auth, comments, pages, posts};
use crate::state::AppState;

/// Build the application route tree.
///
/// ```text
/// GET  /                    post index (public)
/// GET  /register            registration form (public)
/// POST /register            create account, log in
/// GET  /login               login form (public)
/// POST /login               authenticate, set session cookie
/// GET  /logout              log out (requires login)
/// GET  /post/{id}           post detail + comments (public)
/// POST /post/{id}           submit comment (requires login)
/// GET  /about               about page (public)
/// GET  /contact             contact page (public)
/// GET  /new-post            new post form (admin only)
/// POST /new-post            create post (admin only)
/// GET  /edit-post/{id}      edit form (admin only)
/// POST /edit-post/{id}      update post (admin only)
/// GET  /delete/{id}         delete post (admin only)
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::index))
        .route("/register", get(auth::register_form).post(auth::register))
        .route("/login", get(auth::login_form).post(auth::login))
        .route("/logout", get(auth::logout))
        .route(
            "/post/{id}",
            get(posts::show_post).post(comments::create_comment),
        )
        .route("/about", get(pages::about))
        .route("/contact", get(pages::contact))
        .route("/new-post", get(posts::new_post_form).post(posts::create_post))
        .route(
            "/edit-post/{id}",
            get(posts::edit_post_form).post(posts::update_post),
        )
        .route("/delete/{id}", get(posts::delete_post))
}
