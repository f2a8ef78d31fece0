//! Public pages: the post index, about, and contact.

use askama::Template;
use axum::extract::State;
use axum::response::{Html, IntoResponse, Response};
use axum_extra::extract::cookie::SignedCookieJar;
use quill_db::repositories::PostRepo;

use crate::error::AppResult;
use crate::flash::take_flash;
use crate::handlers::login_state;
use crate::middleware::auth::OptionalUser;
use crate::state::AppState;
use crate::views::{AboutPage, ContactPage, IndexPage};

/// GET /
///
/// List all posts, newest first.
pub async fn index(
    OptionalUser(user): OptionalUser,
    State(state): State<AppState>,
    jar: SignedCookieJar,
) -> AppResult<Response> {
    let (jar, flash) = take_flash(jar);
    let (logged_in, is_admin) = login_state(&user);

    let posts = PostRepo::list_with_authors(&state.pool).await?;

    let page = IndexPage {
        logged_in,
        is_admin,
        flash,
        posts,
    };
    Ok((jar, Html(page.render()?)).into_response())
}

/// GET /about
pub async fn about(OptionalUser(user): OptionalUser, jar: SignedCookieJar) -> AppResult<Response> {
    let (jar, flash) = take_flash(jar);
    let (logged_in, is_admin) = login_state(&user);

    let page = AboutPage {
        logged_in,
        is_admin,
        flash,
    };
    Ok((jar, Html(page.render()?)).into_response())
}

/// GET /contact
pub async fn contact(
    OptionalUser(user): OptionalUser,
    jar: SignedCookieJar,
) -> AppResult<Response> {
    let (jar, flash) = take_flash(jar);
    let (logged_in, is_admin) = login_state(&user);

    let page = ContactPage {
        logged_in,
        is_admin,
        flash,
    };
    Ok((jar, Html(page.render()?)).into_response())
}
