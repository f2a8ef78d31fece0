//! Domain layer for the Quill blog: shared types, the error taxonomy,
//! and validation rules for users, posts, and comments. No I/O lives here.

pub mod auth;
pub mod comments;
pub mod error;
pub mod posts;
pub mod types;
pub mod users;
