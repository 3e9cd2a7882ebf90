//! Repository trait for video lookups and channel aggregations.

use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Aggregated per-channel counters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelStats {
    pub total_videos: i64,
    pub total_views: i64,
    pub total_subscribers: i64,
    pub total_likes: i64,
}

/// Projection of a video for the channel-videos listing.
#[derive(Debug, Clone)]
pub struct ChannelVideo {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub video_file: String,
    pub thumbnail: String,
    pub created_at: DateTime<Utc>,
}

/// Repository interface for videos.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgVideoRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VideoRepository: Send + Sync {
    /// Returns whether a video with the given id exists.
    async fn exists(&self, id: Uuid) -> Result<bool, AppError>;

    /// Aggregates video, view, subscriber, and like counts for a channel.
    ///
    /// Must yield explicit zeros for a channel with no videos, never an
    /// absent row.
    async fn stats_for_channel(&self, channel_id: Uuid) -> Result<ChannelStats, AppError>;

    /// Lists the videos owned by a channel, newest first.
    async fn list_for_channel(&self, channel_id: Uuid) -> Result<Vec<ChannelVideo>, AppError>;
}
