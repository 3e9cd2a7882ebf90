//! DTOs for comment endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::application::services::CommentPage;
use crate::domain::entities::Comment;
use crate::domain::repositories::CommentView;

/// Request body for creating a comment.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCommentRequest {
    #[validate(length(min = 1, message = "Content is required"))]
    pub content: String,
}

/// Request body for updating a comment.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCommentRequest {
    #[validate(length(min = 1, message = "Content is required"))]
    pub content: String,
}

/// JSON representation of a stored comment, returned after create/update.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    pub id: Uuid,
    pub content: String,
    pub video: Uuid,
    pub owner: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Comment> for CommentResponse {
    fn from(c: Comment) -> Self {
        Self {
            id: c.id,
            content: c.content,
            video: c.video_id,
            owner: c.owner_id,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

/// Owner profile fields shown next to each listed comment.
#[derive(Debug, Serialize)]
pub struct CommentOwnerItem {
    pub username: String,
    pub avatar: Option<String>,
}

/// One annotated comment in a listing.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentItem {
    pub id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub like_count: i64,
    pub owner: CommentOwnerItem,
    pub is_liked: bool,
}

impl From<CommentView> for CommentItem {
    fn from(v: CommentView) -> Self {
        Self {
            id: v.id,
            content: v.content,
            created_at: v.created_at,
            like_count: v.like_count,
            owner: CommentOwnerItem {
                username: v.owner.username,
                avatar: v.owner.avatar,
            },
            is_liked: v.is_liked,
        }
    }
}

/// Page metadata for comment listings.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    pub page: u32,
    pub limit: u32,
    pub total_items: i64,
    pub total_pages: u32,
}

/// Paginated comment listing response.
#[derive(Debug, Serialize)]
pub struct CommentListResponse {
    pub pagination: PaginationMeta,
    pub items: Vec<CommentItem>,
}

impl From<CommentPage> for CommentListResponse {
    fn from(page: CommentPage) -> Self {
        Self {
            pagination: PaginationMeta {
                page: page.page,
                limit: page.limit,
                total_items: page.total_items,
                total_pages: page.total_pages,
            },
            items: page.items.into_iter().map(CommentItem::from).collect(),
        }
    }
}
