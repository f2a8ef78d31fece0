//! Comment submission on a post's page.

use axum::extract::{Path, State};
use axum::response::{IntoResponse, Redirect, Response};
use axum::Form;
use axum_extra::extract::cookie::SignedCookieJar;

use quill_core::comments::validate_comment_body;
use quill_core::error::CoreError;
use quill_core::types::DbId;
use quill_db::models::comment::CreateComment;
use quill_db::repositories::{CommentRepo, PostRepo};

use crate::error::{AppError, AppResult};
use crate::flash::set_flash;
use crate::middleware::auth::OptionalUser;
use crate::state::AppState;

/// POST /post/{id}
///
/// Submit a comment on a post. Anonymous submitters are flashed and
/// bounced to the login form.
pub async fn create_comment(
    OptionalUser(user): OptionalUser,
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Path(id): Path<DbId>,
    Form(input): Form<CreateComment>,
) -> AppResult<Response> {
    let Some(user) = user else {
        let jar = set_flash(jar, "Login first, so as to comment");
        return Ok((jar, Redirect::to("/login")).into_response());
    };

    validate_comment_body(&input.body).map_err(AppError::BadRequest)?;

    // The post may have been deleted since the form was rendered.
    if PostRepo::find_by_id(&state.pool, id).await?.is_none() {
        return Err(AppError::Core(CoreError::NotFound { entity: "Post", id }));
    }

    let comment = CommentRepo::create(&state.pool, user.user_id, id, &input).await?;

    tracing::info!(
        user_id = user.user_id,
        post_id = id,
        comment_id = comment.id,
        "Comment created"
    );
    Ok(Redirect::to(&format!("/post/{id}")).into_response())
}
