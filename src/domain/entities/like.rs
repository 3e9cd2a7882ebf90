//! Like entity and its polymorphic target.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// The entity a like points at.
///
/// Exactly one target per like record. The storage layer keeps three
/// nullable columns; this enum makes the mutual-exclusion invariant
/// structural instead of relying on the database CHECK alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeTarget {
    Video(Uuid),
    Comment(Uuid),
    Tweet(Uuid),
}

impl LikeTarget {
    /// Target kind, as used in log fields and response messages.
    pub fn kind(&self) -> &'static str {
        match self {
            LikeTarget::Video(_) => "video",
            LikeTarget::Comment(_) => "comment",
            LikeTarget::Tweet(_) => "tweet",
        }
    }

    pub fn id(&self) -> Uuid {
        match self {
            LikeTarget::Video(id) | LikeTarget::Comment(id) | LikeTarget::Tweet(id) => *id,
        }
    }
}

/// A like join record: one user, one target.
///
/// Existence of the record means "liked"; there is no polarity field.
#[derive(Debug, Clone)]
pub struct Like {
    pub id: Uuid,
    pub target: LikeTarget,
    pub liked_by: Uuid,
    pub created_at: DateTime<Utc>,
}
