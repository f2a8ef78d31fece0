//! Comment entity model and DTOs.

use serde::Deserialize;
use sqlx::FromRow;
use quill_core::types::{DbId, Timestamp};

/// A row from the `comments` table.
#[derive(Debug, Clone, FromRow)]
pub struct Comment {
    pub id: DbId,
    pub post_id: DbId,
    pub author_id: DbId,
    pub body: String,
    pub created_at: Timestamp,
}

/// A comment joined with its author's name and email, for rendering on a
/// post page (the email feeds the gravatar digest and is never displayed).
#[derive(Debug, Clone, FromRow)]
pub struct CommentWithAuthor {
    pub id: DbId,
    pub post_id: DbId,
    pub author_id: DbId,
    pub body: String,
    pub created_at: Timestamp,
    pub author_name: String,
    pub author_email: String,
}

/// Form-shaped DTO for submitting a comment.
#[derive(Debug, Deserialize)]
pub struct CreateComment {
    pub body: String,
}
