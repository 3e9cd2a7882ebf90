//! Repository trait for user existence checks.
//!
//! Users are owned by the upstream identity service; this service only
//! needs to confirm a channel user exists before aggregating its stats.

use crate::error::AppError;
use async_trait::async_trait;
use uuid::Uuid;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Returns whether a user with the given id exists.
    async fn exists(&self, id: Uuid) -> Result<bool, AppError>;
}
