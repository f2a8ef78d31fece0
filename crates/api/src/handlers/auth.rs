//! Handlers for registration, login, and logout.

use askama::Template;
use axum::extract::State;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use axum_extra::extract::cookie::SignedCookieJar;
use chrono::Utc;
use serde::Deserialize;

use quill_core::types::DbId;
use quill_core::users::{validate_display_name, validate_email};
use quill_db::models::session::CreateSession;
use quill_db::models::user::CreateUser;
use quill_db::repositories::{SessionRepo, UserRepo};

use crate::auth::password::{hash_password, validate_password_strength, verify_password};
use crate::auth::session::{generate_session_token, session_cookie, session_removal_cookie};
use crate::error::{AppError, AppResult};
use crate::flash::{set_flash, take_flash};
use crate::handlers::login_state;
use crate::middleware::auth::{AuthUser, OptionalUser};
use crate::state::AppState;
use crate::views::{LoginPage, RegisterPage};

// ---------------------------------------------------------------------------
// Form bodies
// ---------------------------------------------------------------------------

/// Form body for `POST /register`.
#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Form body for `POST /login`.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /register
pub async fn register_form(
    OptionalUser(user): OptionalUser,
    jar: SignedCookieJar,
) -> AppResult<Response> {
    let (jar, flash) = take_flash(jar);
    let (logged_in, is_admin) = login_state(&user);

    let page = RegisterPage {
        logged_in,
        is_admin,
        flash,
    };
    Ok((jar, Html(page.render()?)).into_response())
}

/// POST /register
///
/// Create an account and log the new user in.
pub async fn register(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Form(input): Form<RegisterForm>,
) -> AppResult<Response> {
    // 1. Validate the submitted fields.
    validate_display_name(&input.name).map_err(AppError::BadRequest)?;
    validate_email(&input.email).map_err(AppError::BadRequest)?;
    validate_password_strength(&input.password).map_err(AppError::BadRequest)?;

    // 2. Reject an email that is already registered.
    if UserRepo::find_by_email(&state.pool, &input.email)
        .await?
        .is_some()
    {
        let jar = set_flash(jar, "You have already signed up with that email, login instead");
        return Ok((jar, Redirect::to("/login")).into_response());
    }

    // 3. Hash the password and create the user.
    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;
    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            name: input.name,
            email: input.email,
            password_hash,
        },
    )
    .await?;

    tracing::info!(user_id = user.id, "User registered");

    // 4. Log the new user in and send them home.
    let jar = start_session(&state, jar, user.id).await?;
    Ok((jar, Redirect::to("/")).into_response())
}

/// GET /login
pub async fn login_form(
    OptionalUser(user): OptionalUser,
    jar: SignedCookieJar,
) -> AppResult<Response> {
    let (jar, flash) = take_flash(jar);
    let (logged_in, is_admin) = login_state(&user);

    let page = LoginPage {
        logged_in,
        is_admin,
        flash,
    };
    Ok((jar, Html(page.render()?)).into_response())
}

/// POST /login
///
/// Authenticate with email + password and set the session cookie.
pub async fn login(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Form(input): Form<LoginForm>,
) -> AppResult<Response> {
    // 1. Find the user by email.
    let Some(user) = UserRepo::find_by_email(&state.pool, &input.email).await? else {
        let jar = set_flash(jar, "Email entered does not exist, please try again");
        return Ok((jar, Redirect::to("/login")).into_response());
    };

    // 2. Verify the password.
    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        let jar = set_flash(jar, "Incorrect Password, please try again");
        return Ok((jar, Redirect::to("/login")).into_response());
    }

    // 3. Create the session and set the cookie.
    let jar = start_session(&state, jar, user.id).await?;
    tracing::info!(user_id = user.id, "User logged in");
    Ok((jar, Redirect::to("/")).into_response())
}

/// GET /logout
///
/// Revoke the session behind the cookie and clear it. Requires login.
pub async fn logout(
    auth: AuthUser,
    State(state): State<AppState>,
    jar: SignedCookieJar,
) -> AppResult<Response> {
    SessionRepo::revoke(&state.pool, auth.session_id).await?;
    let jar = jar.remove(session_removal_cookie());

    tracing::info!(user_id = auth.user_id, "User logged out");
    Ok((jar, Redirect::to("/")).into_response())
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Generate a token, persist the session row, and attach the cookie.
async fn start_session(
    state: &AppState,
    jar: SignedCookieJar,
    user_id: DbId,
) -> AppResult<SignedCookieJar> {
    let (token, token_hash) = generate_session_token();
    let expires_at = Utc::now() + chrono::Duration::days(state.config.session.session_expiry_days);

    SessionRepo::create(
        &state.pool,
        &CreateSession {
            user_id,
            token_hash,
            expires_at,
        },
    )
    .await?;

    Ok(jar.add(session_cookie(token)))
}
