//! Comment entity.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A comment on a video. Mutated only by its owner.
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: Uuid,
    pub content: String,
    pub video_id: Uuid,
    pub owner_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a comment.
#[derive(Debug, Clone)]
pub struct NewComment {
    pub content: String,
    pub video_id: Uuid,
    pub owner_id: Uuid,
}
