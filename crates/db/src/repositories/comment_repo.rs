//! Repository for the `comments` table.

use sqlx::PgPool;
use quill_core::types::DbId;

use crate::models::comment::{Comment, CommentWithAuthor, CreateComment};

/// Column list shared across single-table queries.
const COLUMNS: &str = "id, post_id, author_id, body, created_at";

/// Provides operations for post comments. Comments are never edited or
/// deleted individually; they disappear only when their post does.
pub struct CommentRepo;

impl CommentRepo {
    /// Insert a new comment, returning the created row.
    pub async fn create(
        pool: &PgPool,
        author_id: DbId,
        post_id: DbId,
        input: &CreateComment,
    ) -> Result<Comment, sqlx::Error> {
        let query = format!(
            "INSERT INTO comments (post_id, author_id, body)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(post_id)
            .bind(author_id)
            .bind(&input.body)
            .fetch_one(pool)
            .await
    }

    /// List a post's comments with author name and email, oldest first.
    pub async fn list_for_post(
        pool: &PgPool,
        post_id: DbId,
    ) -> Result<Vec<CommentWithAuthor>, sqlx::Error> {
        sqlx::query_as::<_, CommentWithAuthor>(
            "SELECT c.id, c.post_id, c.author_id, c.body, c.created_at,
                    u.name AS author_name, u.email AS author_email
             FROM comments c
             JOIN users u ON u.id = c.author_id
             WHERE c.post_id = $1
             ORDER BY c.created_at ASC, c.id ASC",
        )
        .bind(post_id)
        .fetch_all(pool)
        .await
    }
}
