//! PostgreSQL implementation of the like repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::{Like, LikeTarget};
use crate::domain::repositories::{LikeRepository, VideoSummary};
use crate::error::AppError;

/// PostgreSQL repository for like records.
///
/// The three target kinds share one table with mutually exclusive
/// nullable columns; queries select the column from the [`LikeTarget`]
/// variant.
pub struct PgLikeRepository {
    pool: Arc<PgPool>,
}

impl PgLikeRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

/// Column holding the target id for a like of this kind.
fn target_column(target: LikeTarget) -> &'static str {
    match target {
        LikeTarget::Video(_) => "video_id",
        LikeTarget::Comment(_) => "comment_id",
        LikeTarget::Tweet(_) => "tweet_id",
    }
}

#[derive(sqlx::FromRow)]
struct LikeRow {
    id: Uuid,
    video_id: Option<Uuid>,
    comment_id: Option<Uuid>,
    tweet_id: Option<Uuid>,
    liked_by: Uuid,
    created_at: DateTime<Utc>,
}

impl LikeRow {
    fn into_like(self) -> Result<Like, AppError> {
        let target = match (self.video_id, self.comment_id, self.tweet_id) {
            (Some(id), None, None) => LikeTarget::Video(id),
            (None, Some(id), None) => LikeTarget::Comment(id),
            (None, None, Some(id)) => LikeTarget::Tweet(id),
            // Unreachable while the CHECK constraint holds.
            _ => return Err(AppError::internal("Like record has no single target")),
        };

        Ok(Like {
            id: self.id,
            target,
            liked_by: self.liked_by,
            created_at: self.created_at,
        })
    }
}

const LIKE_COLUMNS: &str = "id, video_id, comment_id, tweet_id, liked_by, created_at";

#[async_trait]
impl LikeRepository for PgLikeRepository {
    async fn find_for_target(
        &self,
        target: LikeTarget,
        user_id: Uuid,
    ) -> Result<Option<Like>, AppError> {
        let column = target_column(target);
        let row = sqlx::query_as::<_, LikeRow>(&format!(
            "SELECT {LIKE_COLUMNS} FROM likes WHERE {column} = $1 AND liked_by = $2"
        ))
        .bind(target.id())
        .bind(user_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(LikeRow::into_like).transpose()
    }

    async fn create(&self, target: LikeTarget, user_id: Uuid) -> Result<Like, AppError> {
        let column = target_column(target);
        let row = sqlx::query_as::<_, LikeRow>(&format!(
            "INSERT INTO likes ({column}, liked_by) VALUES ($1, $2) RETURNING {LIKE_COLUMNS}"
        ))
        .bind(target.id())
        .bind(user_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        row.into_like()
    }

    async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM likes WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_for_comment(&self, comment_id: Uuid) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM likes WHERE comment_id = $1")
            .bind(comment_id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected())
    }

    async fn liked_videos(&self, user_id: Uuid) -> Result<Vec<VideoSummary>, AppError> {
        #[derive(sqlx::FromRow)]
        struct Row {
            id: Uuid,
            title: String,
            description: String,
            views: i64,
            owner_id: Uuid,
        }

        let rows = sqlx::query_as::<_, Row>(
            r#"
            SELECT v.id, v.title, v.description, v.views, v.owner_id
            FROM likes l
            JOIN videos v ON v.id = l.video_id
            WHERE l.liked_by = $1 AND l.video_id IS NOT NULL
            ORDER BY l.created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| VideoSummary {
                id: r.id,
                title: r.title,
                description: r.description,
                views: r.views,
                owner_id: r.owner_id,
            })
            .collect())
    }
}
