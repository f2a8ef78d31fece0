use std::sync::Arc;

use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;

use crate::config::ServerConfig;

/// Shared application state available to all axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: quill_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Signing key for the session and flash cookies, derived from `SECRET_KEY`.
    cookie_key: Key,
}

impl AppState {
    pub fn new(pool: quill_db::DbPool, config: ServerConfig) -> Self {
        let cookie_key = Key::derive_from(config.session.secret_key.as_bytes());
        Self {
            pool,
            config: Arc::new(config),
            cookie_key,
        }
    }
}

/// Lets `SignedCookieJar` locate the signing key in the app state.
impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Key {
        state.cookie_key.clone()
    }
}
