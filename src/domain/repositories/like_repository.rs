//! Repository trait for like data access.

use crate::domain::entities::{Like, LikeTarget};
use crate::error::AppError;
use async_trait::async_trait;
use uuid::Uuid;

/// Projection of a liked video for the liked-videos listing.
#[derive(Debug, Clone)]
pub struct VideoSummary {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub views: i64,
    pub owner_id: Uuid,
}

/// Repository interface for like records.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLikeRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LikeRepository: Send + Sync {
    /// Finds the like a user placed on a target, if any.
    async fn find_for_target(
        &self,
        target: LikeTarget,
        user_id: Uuid,
    ) -> Result<Option<Like>, AppError>;

    /// Creates a like for a (user, target) pair.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the pair is already liked (the
    /// unique index rejects the duplicate when two toggles race).
    async fn create(&self, target: LikeTarget, user_id: Uuid) -> Result<Like, AppError>;

    /// Deletes a like by id. Returns `Ok(true)` if a row was removed.
    async fn delete(&self, id: Uuid) -> Result<bool, AppError>;

    /// Removes all likes referencing a comment. Returns the number of
    /// rows removed. Used when a comment is deleted.
    async fn delete_for_comment(&self, comment_id: Uuid) -> Result<u64, AppError>;

    /// Lists the videos a user has liked, newest like first.
    ///
    /// Comment and tweet likes are excluded by the presence of the video
    /// target column.
    async fn liked_videos(&self, user_id: Uuid) -> Result<Vec<VideoSummary>, AppError>;
}
