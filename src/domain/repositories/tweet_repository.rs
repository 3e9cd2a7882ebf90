//! Repository trait for tweet existence checks.
//!
//! Tweets are managed elsewhere; the like toggle only needs to confirm
//! its target exists.

use crate::error::AppError;
use async_trait::async_trait;
use uuid::Uuid;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TweetRepository: Send + Sync {
    /// Returns whether a tweet with the given id exists.
    async fn exists(&self, id: Uuid) -> Result<bool, AppError>;
}
