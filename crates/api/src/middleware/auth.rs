//! Session-cookie authentication extractors.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::cookie::{Key, SignedCookieJar};
use quill_core::types::DbId;
use quill_db::repositories::{SessionRepo, UserRepo};

use crate::auth::session::{hash_session_token, SESSION_COOKIE};
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated user resolved from the signed session cookie.
///
/// Use this as an extractor parameter in any handler that requires login;
/// the rejection redirects to `/login`:
///
/// ```ignore
/// async fn my_handler(user: AuthUser) -> AppResult<Response> {
///     tracing::info!(user_id = user.user_id, "handling request");
///     ...
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The user's internal database id.
    pub user_id: DbId,
    /// Display name, for the page chrome.
    pub name: String,
    /// Email address, for gravatar digests.
    pub email: String,
    /// Id of the session row backing this login (revoked on logout).
    pub session_id: DbId,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = SignedCookieJar::<Key>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::RequireLogin)?;

        let token = jar
            .get(SESSION_COOKIE)
            .map(|cookie| cookie.value().to_string())
            .ok_or(AppError::RequireLogin)?;

        let session =
            SessionRepo::find_active_by_token_hash(&state.pool, &hash_session_token(&token))
                .await?
                .ok_or(AppError::RequireLogin)?;

        let user = UserRepo::find_by_id(&state.pool, session.user_id)
            .await?
            .ok_or(AppError::RequireLogin)?;

        Ok(AuthUser {
            user_id: user.id,
            name: user.name,
            email: user.email,
            session_id: session.id,
        })
    }
}

/// The current user if a valid session cookie is present, `None` otherwise.
///
/// Never rejects; public pages use this to adapt navigation and comment
/// forms to the visitor's login state.
#[derive(Debug, Clone)]
pub struct OptionalUser(pub Option<AuthUser>);

impl FromRequestParts<AppState> for OptionalUser {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(OptionalUser(
            AuthUser::from_request_parts(parts, state).await.ok(),
        ))
    }
}
