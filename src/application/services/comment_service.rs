//! Comment management service.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::{Comment, NewComment};
use crate::domain::repositories::{CommentRepository, CommentView, LikeRepository, VideoRepository};
use crate::error::AppError;

/// One page of annotated comments plus paging metadata.
#[derive(Debug)]
pub struct CommentPage {
    pub items: Vec<CommentView>,
    pub page: u32,
    pub limit: u32,
    pub total_items: i64,
    pub total_pages: u32,
}

/// Service for listing and mutating comments on videos.
///
/// Ownership rules: a comment is mutated only by its owner. Deletion by a
/// non-owner is rejected; an update by a non-owner is silently skipped and
/// the stored comment is returned unchanged (long-standing API behavior
/// that clients rely on, kept deliberately).
pub struct CommentService<C: CommentRepository, V: VideoRepository, L: LikeRepository> {
    comment_repository: Arc<C>,
    video_repository: Arc<V>,
    like_repository: Arc<L>,
}

impl<C: CommentRepository, V: VideoRepository, L: LikeRepository> CommentService<C, V, L> {
    /// Creates a new comment service.
    pub fn new(
        comment_repository: Arc<C>,
        video_repository: Arc<V>,
        like_repository: Arc<L>,
    ) -> Self {
        Self {
            comment_repository,
            video_repository,
            like_repository,
        }
    }

    /// Lists comments for a video with like count, owner profile fields,
    /// and the requester's like state.
    ///
    /// `page` and `limit` are validated at the API boundary (page >= 1,
    /// limit <= 10). An empty page is a success, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the video does not exist.
    pub async fn list_for_video(
        &self,
        video_id: Uuid,
        page: u32,
        limit: u32,
        requester: Option<Uuid>,
    ) -> Result<CommentPage, AppError> {
        if !self.video_repository.exists(video_id).await? {
            return Err(AppError::not_found("Video not found"));
        }

        // Widen before multiplying: page comes from the client and can be
        // any u32, so u32 arithmetic here would overflow.
        let offset = (page as i64 - 1) * limit as i64;

        let (items, total_items) = tokio::try_join!(
            self.comment_repository
                .list_for_video(video_id, requester, offset, limit as i64),
            self.comment_repository.count_for_video(video_id)
        )?;

        let total_pages = ((total_items + limit as i64 - 1) / limit as i64) as u32;

        Ok(CommentPage {
            items,
            page,
            limit,
            total_items,
            total_pages,
        })
    }

    /// Adds a comment to a video.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the content is empty or
    /// whitespace-only, [`AppError::NotFound`] if the video is absent, and
    /// [`AppError::Internal`] if the insert does not persist.
    pub async fn add(
        &self,
        video_id: Uuid,
        content: &str,
        owner_id: Uuid,
    ) -> Result<Comment, AppError> {
        let content = content.trim();
        if content.is_empty() {
            return Err(AppError::bad_request("Content is required"));
        }

        if !self.video_repository.exists(video_id).await? {
            return Err(AppError::not_found("Video not found"));
        }

        self.comment_repository
            .create(NewComment {
                content: content.to_string(),
                video_id,
                owner_id,
            })
            .await
    }

    /// Updates the content of a comment.
    ///
    /// When the requester does not own the comment, no update happens and
    /// the stored comment is returned as-is with a success status.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] on empty content and
    /// [`AppError::NotFound`] if the comment is absent.
    pub async fn update(
        &self,
        comment_id: Uuid,
        content: &str,
        requester_id: Uuid,
    ) -> Result<Comment, AppError> {
        let content = content.trim();
        if content.is_empty() {
            return Err(AppError::bad_request("Content is required"));
        }

        let comment = self
            .comment_repository
            .find_by_id(comment_id)
            .await?
            .ok_or_else(|| AppError::not_found("Comment not found"))?;

        if comment.owner_id != requester_id {
            tracing::debug!(comment_id = %comment_id, "Update skipped: requester is not the owner");
            return Ok(comment);
        }

        self.comment_repository
            .update_content(comment_id, content)
            .await
    }

    /// Deletes a comment and cascades removal of its likes.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the comment is absent,
    /// [`AppError::Forbidden`] if the requester is not the owner, and
    /// [`AppError::Internal`] if the comment existed but the delete
    /// removed nothing.
    pub async fn delete(&self, comment_id: Uuid, requester_id: Uuid) -> Result<(), AppError> {
        let comment = self
            .comment_repository
            .find_by_id(comment_id)
            .await?
            .ok_or_else(|| AppError::not_found("Comment not found"))?;

        if comment.owner_id != requester_id {
            return Err(AppError::forbidden("Unauthorized access"));
        }

        let deleted = self.comment_repository.delete(comment_id).await?;
        if !deleted {
            return Err(AppError::internal("Something went wrong while deleting comment"));
        }

        let removed_likes = self.like_repository.delete_for_comment(comment_id).await?;
        tracing::debug!(comment_id = %comment_id, removed_likes, "Comment deleted");

        Ok(())
    }
}
