//! Repository trait for comment data access.

use crate::domain::entities::{Comment, NewComment};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Comment owner fields exposed in listings.
#[derive(Debug, Clone)]
pub struct CommentOwner {
    pub username: String,
    pub avatar: Option<String>,
}

/// A comment annotated for listing: owner profile fields, like count,
/// and whether the requesting user has liked it.
#[derive(Debug, Clone)]
pub struct CommentView {
    pub id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub like_count: i64,
    pub owner: CommentOwner,
    pub is_liked: bool,
}

/// Repository interface for comments.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgCommentRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Creates a new comment.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the insert does not return the
    /// created row, or on database errors.
    async fn create(&self, new_comment: NewComment) -> Result<Comment, AppError>;

    /// Finds a comment by id.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Comment>, AppError>;

    /// Returns whether a comment with the given id exists.
    async fn exists(&self, id: Uuid) -> Result<bool, AppError>;

    /// Replaces the content of a comment and returns the updated row.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no comment matches `id`.
    async fn update_content(&self, id: Uuid, content: &str) -> Result<Comment, AppError>;

    /// Deletes a comment.
    ///
    /// Returns `Ok(true)` if a row was removed, `Ok(false)` if the comment
    /// was already gone.
    async fn delete(&self, id: Uuid) -> Result<bool, AppError>;

    /// Lists annotated comments for a video, newest first.
    ///
    /// `requester` drives the `is_liked` flag; `None` yields `false` for
    /// every row.
    async fn list_for_video(
        &self,
        video_id: Uuid,
        requester: Option<Uuid>,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<CommentView>, AppError>;

    /// Counts all comments on a video.
    async fn count_for_video(&self, video_id: Uuid) -> Result<i64, AppError>;
}
