//! Handlers for channel dashboard endpoints.
//!
//! The channel is the requesting user's own; both endpoints read the
//! identity from the auth gateway header.

use axum::extract::State;

use crate::api::dto::dashboard::{ChannelStatsResponse, ChannelVideoItem};
use crate::api::dto::envelope::ApiResponse;
use crate::api::middleware::CurrentUser;
use crate::error::AppError;
use crate::state::AppState;

/// Returns aggregated channel statistics.
///
/// # Endpoint
///
/// `GET /dashboard/stats`
///
/// A channel with zero videos gets explicit zero counters.
///
/// # Errors
///
/// Returns 401 without an authenticated user and 404 if the channel user
/// does not exist.
pub async fn channel_stats_handler(
    State(state): State<AppState>,
    CurrentUser(channel_id): CurrentUser,
) -> Result<ApiResponse<ChannelStatsResponse>, AppError> {
    let stats = state.dashboard_service.channel_stats(channel_id).await?;

    Ok(ApiResponse::ok(
        stats.into(),
        "Channel stats fetched successfully",
    ))
}

/// Lists the channel's uploaded videos.
///
/// # Endpoint
///
/// `GET /dashboard/videos`
///
/// # Errors
///
/// Returns 401 without an authenticated user and 404 if the channel user
/// does not exist or owns no videos.
pub async fn channel_videos_handler(
    State(state): State<AppState>,
    CurrentUser(channel_id): CurrentUser,
) -> Result<ApiResponse<Vec<ChannelVideoItem>>, AppError> {
    let videos = state.dashboard_service.channel_videos(channel_id).await?;

    Ok(ApiResponse::ok(
        videos.into_iter().map(ChannelVideoItem::from).collect(),
        "Channel videos fetched successfully",
    ))
}
