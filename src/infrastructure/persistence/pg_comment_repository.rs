//! PostgreSQL implementation of the comment repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::{Comment, NewComment};
use crate::domain::repositories::{CommentOwner, CommentRepository, CommentView};
use crate::error::AppError;

/// PostgreSQL repository for comments.
///
/// The annotated listing replaces the original aggregation pipeline with
/// a single grouped join: users for owner fields, likes for the count and
/// the requester's like state.
pub struct PgCommentRepository {
    pool: Arc<PgPool>,
}

impl PgCommentRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct CommentRow {
    id: Uuid,
    content: String,
    video_id: Uuid,
    owner_id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<CommentRow> for Comment {
    fn from(r: CommentRow) -> Self {
        Comment {
            id: r.id,
            content: r.content,
            video_id: r.video_id,
            owner_id: r.owner_id,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct CommentViewRow {
    id: Uuid,
    content: String,
    created_at: DateTime<Utc>,
    like_count: i64,
    username: String,
    avatar: Option<String>,
    is_liked: bool,
}

const COMMENT_COLUMNS: &str = "id, content, video_id, owner_id, created_at, updated_at";

#[async_trait]
impl CommentRepository for PgCommentRepository {
    async fn create(&self, new_comment: NewComment) -> Result<Comment, AppError> {
        let row = sqlx::query_as::<_, CommentRow>(&format!(
            "INSERT INTO comments (content, video_id, owner_id) \
             VALUES ($1, $2, $3) \
             RETURNING {COMMENT_COLUMNS}"
        ))
        .bind(&new_comment.content)
        .bind(new_comment.video_id)
        .bind(new_comment.owner_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Comment::from)
            .ok_or_else(|| AppError::internal("Error creating comment"))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Comment>, AppError> {
        let row = sqlx::query_as::<_, CommentRow>(&format!(
            "SELECT {COMMENT_COLUMNS} FROM comments WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Comment::from))
    }

    async fn exists(&self, id: Uuid) -> Result<bool, AppError> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM comments WHERE id = $1)")
                .bind(id)
                .fetch_one(self.pool.as_ref())
                .await?;

        Ok(exists)
    }

    async fn update_content(&self, id: Uuid, content: &str) -> Result<Comment, AppError> {
        let row = sqlx::query_as::<_, CommentRow>(&format!(
            "UPDATE comments SET content = $2, updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COMMENT_COLUMNS}"
        ))
        .bind(id)
        .bind(content)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Comment::from)
            .ok_or_else(|| AppError::not_found("Comment not found"))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_for_video(
        &self,
        video_id: Uuid,
        requester: Option<Uuid>,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<CommentView>, AppError> {
        // BOOL_OR skips NULLs, so a NULL requester yields NULL which
        // coalesces to false for every row.
        let rows = sqlx::query_as::<_, CommentViewRow>(
            r#"
            SELECT c.id, c.content, c.created_at,
                   COUNT(l.id) AS like_count,
                   u.username, u.avatar,
                   COALESCE(BOOL_OR(l.liked_by = $2), FALSE) AS is_liked
            FROM comments c
            JOIN users u ON u.id = c.owner_id
            LEFT JOIN likes l ON l.comment_id = c.id
            WHERE c.video_id = $1
            GROUP BY c.id, c.content, c.created_at, u.username, u.avatar
            ORDER BY c.created_at DESC
            LIMIT $3 OFFSET $4
            "#,
        )
        .bind(video_id)
        .bind(requester)
        .bind(limit)
        .bind(offset)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| CommentView {
                id: r.id,
                content: r.content,
                created_at: r.created_at,
                like_count: r.like_count,
                owner: CommentOwner {
                    username: r.username,
                    avatar: r.avatar,
                },
                is_liked: r.is_liked,
            })
            .collect())
    }

    async fn count_for_video(&self, video_id: Uuid) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM comments WHERE video_id = $1")
            .bind(video_id)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
