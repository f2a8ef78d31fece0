//! HTTP handlers, one module per page group.

pub mod auth;
pub mod comments;
pub mod pages;
pub mod posts;

use quill_core::auth::is_admin;

use crate::middleware::auth::AuthUser;

/// Login flags `(logged_in, is_admin)` for the shared page chrome.
pub(crate) fn login_state(user: &Option<AuthUser>) -> (bool, bool) {
    match user {
        Some(user) => (true, is_admin(user.user_id)),
        None => (false, false),
    }
}
