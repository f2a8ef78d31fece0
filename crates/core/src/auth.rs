//! Administrator identity rule.
//!
//! The blog has no role table. The administrator is the account whose
//! database id equals [`ADMIN_USER_ID`] — in practice the first user to
//! register, since PostgreSQL hands out BIGSERIAL ids starting at 1.

use crate::types::DbId;

/// Id of the sole administrator account.
pub const ADMIN_USER_ID: DbId = 1;

/// Whether the given user id belongs to the administrator.
pub fn is_admin(user_id: DbId) -> bool {
    user_id == ADMIN_USER_ID
}
