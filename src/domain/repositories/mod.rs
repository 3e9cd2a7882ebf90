//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; concrete
//! implementations live in `crate::infrastructure::persistence`. Mock
//! implementations are auto-generated via `mockall` for testing.
//!
//! # Available Repositories
//!
//! - [`CommentRepository`] - Comment CRUD and annotated listings
//! - [`LikeRepository`] - Like toggling and liked-video listings
//! - [`VideoRepository`] - Video lookups and channel aggregations
//! - [`UserRepository`] - Channel user existence checks
//! - [`TweetRepository`] - Tweet existence checks

pub mod comment_repository;
pub mod like_repository;
pub mod tweet_repository;
pub mod user_repository;
pub mod video_repository;

pub use comment_repository::{CommentOwner, CommentRepository, CommentView};
pub use like_repository::{LikeRepository, VideoSummary};
pub use tweet_repository::TweetRepository;
pub use user_repository::UserRepository;
pub use video_repository::{ChannelStats, ChannelVideo, VideoRepository};

#[cfg(test)]
pub use comment_repository::MockCommentRepository;
#[cfg(test)]
pub use like_repository::MockLikeRepository;
#[cfg(test)]
pub use tweet_repository::MockTweetRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
#[cfg(test)]
pub use video_repository::MockVideoRepository;
