//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod comments;
pub mod dashboard;
pub mod health;
pub mod likes;

pub use comments::{
    add_comment_handler, delete_comment_handler, list_comments_handler, update_comment_handler,
};
pub use dashboard::{channel_stats_handler, channel_videos_handler};
pub use health::health_handler;
pub use likes::{
    liked_videos_handler, toggle_comment_like_handler, toggle_tweet_like_handler,
    toggle_video_like_handler,
};
