//! Administrator gate.
//!
//! The blog has a single administrator: the user whose id is 1.
//! Authenticated non-admins receive 404 rather than 403, so protected
//! routes are indistinguishable from missing ones.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use quill_core::auth::is_admin;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Requires the administrator account.
///
/// Anonymous visitors are redirected to `/login` (the [`AuthUser`] layer
/// fires first); any other authenticated user gets a 404.
///
/// ```ignore
/// async fn admin_only(RequireAdmin(user): RequireAdmin) -> AppResult<Response> {
///     // user.user_id == 1 here
///     ...
/// }
/// ```
pub struct RequireAdmin(pub AuthUser);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if !is_admin(user.user_id) {
            return Err(AppError::NotFound);
        }
        Ok(RequireAdmin(user))
    }
}
