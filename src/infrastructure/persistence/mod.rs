//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx with
//! bind-parameter queries.
//!
//! # Repositories
//!
//! - [`PgCommentRepository`] - Comment storage and annotated listings
//! - [`PgLikeRepository`] - Like records and liked-video listings
//! - [`PgVideoRepository`] - Video lookups and channel aggregations
//! - [`PgUserRepository`] - Channel user existence checks
//! - [`PgTweetRepository`] - Tweet existence checks

pub mod pg_comment_repository;
pub mod pg_like_repository;
pub mod pg_tweet_repository;
pub mod pg_user_repository;
pub mod pg_video_repository;

pub use pg_comment_repository::PgCommentRepository;
pub use pg_like_repository::PgLikeRepository;
pub use pg_tweet_repository::PgTweetRepository;
pub use pg_user_repository::PgUserRepository;
pub use pg_video_repository::PgVideoRepository;
