//! PostgreSQL implementation of the video repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::repositories::{ChannelStats, ChannelVideo, VideoRepository};
use crate::error::AppError;

/// PostgreSQL repository for video lookups and channel aggregations.
pub struct PgVideoRepository {
    pool: Arc<PgPool>,
}

impl PgVideoRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VideoRepository for PgVideoRepository {
    async fn exists(&self, id: Uuid) -> Result<bool, AppError> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM videos WHERE id = $1)")
            .bind(id)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(exists)
    }

    async fn stats_for_channel(&self, channel_id: Uuid) -> Result<ChannelStats, AppError> {
        #[derive(sqlx::FromRow)]
        struct Row {
            total_videos: i64,
            total_views: i64,
            total_subscribers: i64,
            total_likes: i64,
        }

        // Scalar subqueries always produce exactly one row, so a channel
        // with zero videos still yields explicit zero counters instead of
        // an empty result set.
        let row = sqlx::query_as::<_, Row>(
            r#"
            SELECT
                (SELECT COUNT(*) FROM videos WHERE owner_id = $1) AS total_videos,
                (SELECT COALESCE(SUM(views), 0)::BIGINT FROM videos WHERE owner_id = $1) AS total_views,
                (SELECT COUNT(*) FROM subscriptions WHERE channel_id = $1) AS total_subscribers,
                (SELECT COUNT(*)
                 FROM likes l
                 JOIN videos v ON v.id = l.video_id
                 WHERE v.owner_id = $1) AS total_likes
            "#,
        )
        .bind(channel_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(ChannelStats {
            total_videos: row.total_videos,
            total_views: row.total_views,
            total_subscribers: row.total_subscribers,
            total_likes: row.total_likes,
        })
    }

    async fn list_for_channel(&self, channel_id: Uuid) -> Result<Vec<ChannelVideo>, AppError> {
        #[derive(sqlx::FromRow)]
        struct Row {
            id: Uuid,
            title: String,
            description: String,
            video_file: String,
            thumbnail: String,
            created_at: DateTime<Utc>,
        }

        let rows = sqlx::query_as::<_, Row>(
            r#"
            SELECT id, title, description, video_file, thumbnail, created_at
            FROM videos
            WHERE owner_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(channel_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| ChannelVideo {
                id: r.id,
                title: r.title,
                description: r.description,
                video_file: r.video_file,
                thumbnail: r.thumbnail,
                created_at: r.created_at,
            })
            .collect())
    }
}
