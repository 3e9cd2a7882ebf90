//! Handlers for like endpoints (toggles and liked-video listing).

use axum::extract::{Path, State};

use crate::api::dto::envelope::ApiResponse;
use crate::api::dto::like::{LikedVideoItem, ToggleLikeResponse};
use crate::api::middleware::CurrentUser;
use crate::domain::entities::LikeTarget;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::parse_id;

async fn toggle(
    state: &AppState,
    target: LikeTarget,
    user_id: uuid::Uuid,
    liked_message: &str,
    unliked_message: &str,
) -> Result<ApiResponse<ToggleLikeResponse>, AppError> {
    let liked = state.like_service.toggle(target, user_id).await?;

    let message = if liked { liked_message } else { unliked_message };
    Ok(ApiResponse::ok(ToggleLikeResponse { liked }, message))
}

/// Toggles the requesting user's like on a video.
///
/// # Endpoint
///
/// `POST /videos/{videoId}/like`
///
/// # Errors
///
/// Returns 400 on a malformed id, 401 without an authenticated user,
/// 404 if the video does not exist.
pub async fn toggle_video_like_handler(
    State(state): State<AppState>,
    Path(video_id): Path<String>,
    CurrentUser(user_id): CurrentUser,
) -> Result<ApiResponse<ToggleLikeResponse>, AppError> {
    let video_id = parse_id(&video_id, "video id")?;
    toggle(
        &state,
        LikeTarget::Video(video_id),
        user_id,
        "Video liked successfully",
        "Video disliked successfully",
    )
    .await
}

/// Toggles the requesting user's like on a comment.
///
/// # Endpoint
///
/// `POST /comments/{commentId}/like`
pub async fn toggle_comment_like_handler(
    State(state): State<AppState>,
    Path(comment_id): Path<String>,
    CurrentUser(user_id): CurrentUser,
) -> Result<ApiResponse<ToggleLikeResponse>, AppError> {
    let comment_id = parse_id(&comment_id, "comment id")?;
    toggle(
        &state,
        LikeTarget::Comment(comment_id),
        user_id,
        "Comment liked successfully",
        "Comment disliked successfully",
    )
    .await
}

/// Toggles the requesting user's like on a tweet.
///
/// # Endpoint
///
/// `POST /tweets/{tweetId}/like`
pub async fn toggle_tweet_like_handler(
    State(state): State<AppState>,
    Path(tweet_id): Path<String>,
    CurrentUser(user_id): CurrentUser,
) -> Result<ApiResponse<ToggleLikeResponse>, AppError> {
    let tweet_id = parse_id(&tweet_id, "tweet id")?;
    toggle(
        &state,
        LikeTarget::Tweet(tweet_id),
        user_id,
        "Tweet liked successfully",
        "Tweet disliked successfully",
    )
    .await
}

/// Lists the videos the requesting user has liked.
///
/// # Endpoint
///
/// `GET /likes/videos`
///
/// # Errors
///
/// Returns 401 without an authenticated user and 404 when the user has
/// no liked videos.
pub async fn liked_videos_handler(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
) -> Result<ApiResponse<Vec<LikedVideoItem>>, AppError> {
    let videos = state.like_service.liked_videos(user_id).await?;

    Ok(ApiResponse::ok(
        videos.into_iter().map(LikedVideoItem::from).collect(),
        "Liked videos fetched successfully",
    ))
}
