//! Repository for the `posts` table.

use sqlx::PgPool;
use quill_core::types::DbId;

use crate::models::post::{CreatePost, Post, PostWithAuthor, UpdatePost};

/// Column list shared across single-table queries.
const COLUMNS: &str =
    "id, author_id, title, subtitle, published_on, body, img_url, created_at, updated_at";

/// Column list for queries joining the author's display name.
const JOINED_COLUMNS: &str = "p.id, p.author_id, p.title, p.subtitle, p.published_on, \
     p.body, p.img_url, p.created_at, u.name AS author_name";

/// Provides CRUD operations for blog posts.
pub struct PostRepo;

impl PostRepo {
    /// Insert a new post, returning the created row.
    ///
    /// `published_on` is the preformatted publish-date string; it is fixed
    /// at creation time.
    pub async fn create(
        pool: &PgPool,
        author_id: DbId,
        published_on: &str,
        input: &CreatePost,
    ) -> Result<Post, sqlx::Error> {
        let query = format!(
            "INSERT INTO posts (author_id, title, subtitle, published_on, body, img_url)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Post>(&query)
            .bind(author_id)
            .bind(&input.title)
            .bind(&input.subtitle)
            .bind(published_on)
            .bind(&input.body)
            .bind(&input.img_url)
            .fetch_one(pool)
            .await
    }

    /// Find a post by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Post>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM posts WHERE id = $1");
        sqlx::query_as::<_, Post>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a post by its ID, joined with the author's display name.
    pub async fn find_by_id_with_author(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<PostWithAuthor>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM posts p
             JOIN users u ON u.id = p.author_id
             WHERE p.id = $1"
        );
        sqlx::query_as::<_, PostWithAuthor>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a post by its exact title.
    pub async fn find_by_title(pool: &PgPool, title: &str) -> Result<Option<Post>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM posts WHERE title = $1");
        sqlx::query_as::<_, Post>(&query)
            .bind(title)
            .fetch_optional(pool)
            .await
    }

    /// List all posts with author names, newest first.
    pub async fn list_with_authors(pool: &PgPool) -> Result<Vec<PostWithAuthor>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM posts p
             JOIN users u ON u.id = p.author_id
             ORDER BY p.created_at DESC, p.id DESC"
        );
        sqlx::query_as::<_, PostWithAuthor>(&query)
            .fetch_all(pool)
            .await
    }

    /// Copy the submitted fields onto a post, returning the updated row.
    ///
    /// Returns `None` if no row with the given `id` exists. The publish
    /// date is deliberately not part of the update.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePost,
    ) -> Result<Option<Post>, sqlx::Error> {
        let query = format!(
            "UPDATE posts SET
                title = $2,
                subtitle = $3,
                img_url = $4,
                body = $5,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Post>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.subtitle)
            .bind(&input.img_url)
            .bind(&input.body)
            .fetch_optional(pool)
            .await
    }

    /// Delete a post by ID. Comments cascade at the schema level.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
