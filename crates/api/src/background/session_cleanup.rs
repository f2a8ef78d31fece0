//! Periodic cleanup of dead sessions.
//!
//! Spawns a background task that deletes expired or revoked rows from
//! `user_sessions`. Runs on a fixed interval using `tokio::time::interval`
//! until cancelled. Session validity never depends on this task; lookups
//! filter on expiry and revocation themselves.

use std::time::Duration;

use sqlx::PgPool;
use tokio_util::sync::CancellationToken;

use quill_db::repositories::SessionRepo;

/// How often the cleanup job runs.
const CLEANUP_INTERVAL: Duration = Duration::from_secs(3600); // 1 hour

/// Run the session cleanup loop until `cancel` is triggered.
pub async fn run(pool: PgPool, cancel: CancellationToken) {
    tracing::info!(
        interval_secs = CLEANUP_INTERVAL.as_secs(),
        "Session cleanup job started"
    );

    let mut interval = tokio::time::interval(CLEANUP_INTERVAL);

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("Session cleanup job stopping");
                break;
            }
            _ = interval.tick() => {
                match SessionRepo::cleanup_expired(&pool).await {
                    Ok(deleted) => {
                        if deleted > 0 {
                            tracing::info!(deleted, "Session cleanup: purged dead rows");
                        } else {
                            tracing::debug!("Session cleanup: no rows to purge");
                        }
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "Session cleanup failed");
                    }
                }
            }
        }
    }
}
