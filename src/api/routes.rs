//! API route configuration.
//!
//! Identity comes from the upstream auth gateway via the `x-user-id`
//! header (see [`crate::api::middleware::auth`]); ownership-gated
//! mutations reject requests without it.

use crate::api::handlers::{
    add_comment_handler, channel_stats_handler, channel_videos_handler, delete_comment_handler,
    liked_videos_handler, list_comments_handler, toggle_comment_like_handler,
    toggle_tweet_like_handler, toggle_video_like_handler, update_comment_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, patch, post},
};

/// All social API routes.
///
/// # Endpoints
///
/// - `GET    /videos/{videoId}/comments`  - List comments (paginated, annotated)
/// - `POST   /videos/{videoId}/comments`  - Add a comment
/// - `PATCH  /comments/{commentId}`       - Update a comment (owner only)
/// - `DELETE /comments/{commentId}`       - Delete a comment and its likes (owner only)
/// - `POST   /videos/{videoId}/like`      - Toggle a video like
/// - `POST   /comments/{commentId}/like`  - Toggle a comment like
/// - `POST   /tweets/{tweetId}/like`      - Toggle a tweet like
/// - `GET    /likes/videos`               - List the user's liked videos
/// - `GET    /dashboard/stats`            - Aggregated channel statistics
/// - `GET    /dashboard/videos`           - The channel's videos
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/videos/{video_id}/comments",
            get(list_comments_handler).post(add_comment_handler),
        )
        .route(
            "/comments/{comment_id}",
            patch(update_comment_handler).delete(delete_comment_handler),
        )
        .route("/videos/{video_id}/like", post(toggle_video_like_handler))
        .route(
            "/comments/{comment_id}/like",
            post(toggle_comment_like_handler),
        )
        .route("/tweets/{tweet_id}/like", post(toggle_tweet_like_handler))
        .route("/likes/videos", get(liked_videos_handler))
        .route("/dashboard/stats", get(channel_stats_handler))
        .route("/dashboard/videos", get(channel_videos_handler))
}
