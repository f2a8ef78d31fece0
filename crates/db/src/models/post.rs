//! Blog post entity model and DTOs.

use serde::Deserialize;
use sqlx::FromRow;
use quill_core::types::{DbId, Timestamp};

/// A row from the `posts` table.
///
/// `published_on` is the human-readable publish date stored as text; it is
/// set once at creation and never changed by edits.
#[derive(Debug, Clone, FromRow)]
pub struct Post {
    pub id: DbId,
    pub author_id: DbId,
    pub title: String,
    pub subtitle: String,
    pub published_on: String,
    pub body: String,
    pub img_url: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A post joined with its author's display name, for listing and detail pages.
#[derive(Debug, Clone, FromRow)]
pub struct PostWithAuthor {
    pub id: DbId,
    pub author_id: DbId,
    pub title: String,
    pub subtitle: String,
    pub published_on: String,
    pub body: String,
    pub img_url: String,
    pub created_at: Timestamp,
    pub author_name: String,
}

/// Form-shaped DTO for creating a new post. The author and publish date are
/// supplied by the handler, not the form.
#[derive(Debug, Deserialize)]
pub struct CreatePost {
    pub title: String,
    pub subtitle: String,
    pub img_url: String,
    pub body: String,
}

/// Form-shaped DTO for editing a post. Every field is submitted and copied
/// onto the record; the publish date is left untouched.
#[derive(Debug, Deserialize)]
pub struct UpdatePost {
    pub title: String,
    pub subtitle: String,
    pub img_url: String,
    pub body: String,
}
