//! DTOs for like endpoints.

use serde::Serialize;
use uuid::Uuid;

use crate::domain::repositories::VideoSummary;

/// Result of a like toggle.
#[derive(Debug, Serialize)]
pub struct ToggleLikeResponse {
    pub liked: bool,
}

/// One liked video in the liked-videos listing.
#[derive(Debug, Serialize)]
pub struct LikedVideoItem {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub views: i64,
    pub owner: Uuid,
}

impl From<VideoSummary> for LikedVideoItem {
    fn from(v: VideoSummary) -> Self {
        Self {
            id: v.id,
            title: v.title,
            description: v.description,
            views: v.views,
            owner: v.owner_id,
        }
    }
}
