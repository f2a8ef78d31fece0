//! Handlers for post reading and administrator post CRUD.

use askama::Template;
use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use axum_extra::extract::cookie::SignedCookieJar;
use chrono::Utc;

use quill_core::error::CoreError;
use quill_core::posts::{
    format_publish_date, validate_body, validate_img_url, validate_subtitle, validate_title,
};
use quill_core::types::DbId;
use quill_core::users::gravatar_url;
use quill_db::models::post::{CreatePost, UpdatePost};
use quill_db::repositories::{CommentRepo, PostRepo};

use crate::error::{AppError, AppResult};
use crate::flash::{set_flash, take_flash};
use crate::handlers::login_state;
use crate::middleware::admin::RequireAdmin;
use crate::middleware::auth::OptionalUser;
use crate::state::AppState;
use crate::views::{CommentView, MakePostPage, PostPage};

/// GET /post/{id}
///
/// Post detail page with its comment thread and comment form.
pub async fn show_post(
    OptionalUser(user): OptionalUser,
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Path(id): Path<DbId>,
) -> AppResult<Response> {
    let (jar, flash) = take_flash(jar);
    let (logged_in, is_admin) = login_state(&user);

    let post = PostRepo::find_by_id_with_author(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Post", id }))?;

    let comments = CommentRepo::list_for_post(&state.pool, id)
        .await?
        .into_iter()
        .map(|comment| CommentView {
            avatar_url: gravatar_url(&comment.author_email),
            author_name: comment.author_name,
            body: comment.body,
        })
        .collect();

    let page = PostPage {
        logged_in,
        is_admin,
        flash,
        post,
        comments,
    };
    Ok((jar, Html(page.render()?)).into_response())
}

/// GET /new-post
///
/// Blank post form. Admin only.
pub async fn new_post_form(RequireAdmin(_): RequireAdmin, jar: SignedCookieJar) -> AppResult<Response> {
    let (jar, flash) = take_flash(jar);

    let page = MakePostPage {
        logged_in: true,
        is_admin: true,
        flash,
        heading: "New Post",
        action: "/new-post".to_string(),
        title: String::new(),
        subtitle: String::new(),
        img_url: String::new(),
        body: String::new(),
    };
    Ok((jar, Html(page.render()?)).into_response())
}

/// POST /new-post
///
/// Create a post with today's publish date. Admin only.
pub async fn create_post(
    RequireAdmin(user): RequireAdmin,
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Form(input): Form<CreatePost>,
) -> AppResult<Response> {
    // 1. Validate the submitted fields.
    validate_title(&input.title).map_err(AppError::BadRequest)?;
    validate_subtitle(&input.subtitle).map_err(AppError::BadRequest)?;
    validate_img_url(&input.img_url).map_err(AppError::BadRequest)?;
    validate_body(&input.body).map_err(AppError::BadRequest)?;

    // 2. Titles are unique; surface a duplicate as a flash, like emails.
    if PostRepo::find_by_title(&state.pool, &input.title)
        .await?
        .is_some()
    {
        let jar = set_flash(jar, "A post with that title already exists");
        return Ok((jar, Redirect::to("/new-post")).into_response());
    }

    // 3. Stamp the publish date and insert.
    let published_on = format_publish_date(Utc::now());
    let post = PostRepo::create(&state.pool, user.user_id, &published_on, &input).await?;

    tracing::info!(user_id = user.user_id, post_id = post.id, "Post created");
    Ok(Redirect::to("/").into_response())
}

/// GET /edit-post/{id}
///
/// Post form prefilled with the current field values. Admin only.
pub async fn edit_post_form(
    RequireAdmin(_): RequireAdmin,
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Path(id): Path<DbId>,
) -> AppResult<Response> {
    let (jar, flash) = take_flash(jar);

    let post = PostRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Post", id }))?;

    let page = MakePostPage {
        logged_in: true,
        is_admin: true,
        flash,
        heading: "Edit Post",
        action: format!("/edit-post/{id}"),
        title: post.title,
        subtitle: post.subtitle,
        img_url: post.img_url,
        body: post.body,
    };
    Ok((jar, Html(page.render()?)).into_response())
}

/// POST /edit-post/{id}
///
/// Copy the submitted fields onto the post; the publish date is untouched.
/// Admin only.
pub async fn update_post(
    RequireAdmin(user): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Form(input): Form<UpdatePost>,
) -> AppResult<Response> {
    validate_title(&input.title).map_err(AppError::BadRequest)?;
    validate_subtitle(&input.subtitle).map_err(AppError::BadRequest)?;
    validate_img_url(&input.img_url).map_err(AppError::BadRequest)?;
    validate_body(&input.body).map_err(AppError::BadRequest)?;

    let post = PostRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Post", id }))?;

    tracing::info!(user_id = user.user_id, post_id = post.id, "Post updated");
    Ok(Redirect::to(&format!("/post/{id}")).into_response())
}

/// GET /delete/{id}
///
/// Delete a post (comments cascade). Admin only.
pub async fn delete_post(
    RequireAdmin(user): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Response> {
    let deleted = PostRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "Post", id }));
    }

    tracing::info!(user_id = user.user_id, post_id = id, "Post deleted");
    Ok(Redirect::to("/").into_response())
}
