//! DTOs for channel dashboard endpoints.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::repositories::{ChannelStats, ChannelVideo};

/// Aggregated channel counters.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelStatsResponse {
    pub total_videos: i64,
    pub total_views: i64,
    pub total_subscribers: i64,
    pub total_likes: i64,
}

impl From<ChannelStats> for ChannelStatsResponse {
    fn from(s: ChannelStats) -> Self {
        Self {
            total_videos: s.total_videos,
            total_views: s.total_views,
            total_subscribers: s.total_subscribers,
            total_likes: s.total_likes,
        }
    }
}

/// One video in the channel-videos listing.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelVideoItem {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub video_file: String,
    pub thumbnail: String,
    pub created_at: DateTime<Utc>,
}

impl From<ChannelVideo> for ChannelVideoItem {
    fn from(v: ChannelVideo) -> Self {
        Self {
            id: v.id,
            title: v.title,
            description: v.description,
            video_file: v.video_file,
            thumbnail: v.thumbnail,
            created_at: v.created_at,
        }
    }
}
