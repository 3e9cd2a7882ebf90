//! Channel dashboard aggregation service.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::repositories::{ChannelStats, ChannelVideo, UserRepository, VideoRepository};
use crate::error::AppError;

/// Service for per-channel statistics and video listings.
pub struct DashboardService<V: VideoRepository, U: UserRepository> {
    video_repository: Arc<V>,
    user_repository: Arc<U>,
}

impl<V: VideoRepository, U: UserRepository> DashboardService<V, U> {
    /// Creates a new dashboard service.
    pub fn new(video_repository: Arc<V>, user_repository: Arc<U>) -> Self {
        Self {
            video_repository,
            user_repository,
        }
    }

    /// Aggregates video, view, subscriber, and like counts for a channel.
    ///
    /// A channel with zero videos gets explicit zero counters; subscriber
    /// count still reflects existing subscriptions.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the channel user does not exist.
    pub async fn channel_stats(&self, channel_id: Uuid) -> Result<ChannelStats, AppError> {
        if !self.user_repository.exists(channel_id).await? {
            return Err(AppError::not_found("Channel not found"));
        }

        self.video_repository.stats_for_channel(channel_id).await
    }

    /// Lists the videos a channel has uploaded.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the channel user does not exist,
    /// or if it owns no videos (kept from the original API contract).
    pub async fn channel_videos(&self, channel_id: Uuid) -> Result<Vec<ChannelVideo>, AppError> {
        if !self.user_repository.exists(channel_id).await? {
            return Err(AppError::not_found("Channel not found"));
        }

        let videos = self.video_repository.list_for_channel(channel_id).await?;

        if videos.is_empty() {
            return Err(AppError::not_found("No videos were found"));
        }

        Ok(videos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::{MockUserRepository, MockVideoRepository};
    use chrono::Utc;
    use mockall::predicate::eq;

    fn service(
        videos: MockVideoRepository,
        users: MockUserRepository,
    ) -> DashboardService<MockVideoRepository, MockUserRepository> {
        DashboardService::new(Arc::new(videos), Arc::new(users))
    }

    #[tokio::test]
    async fn test_stats_missing_channel_is_not_found() {
        let mut users = MockUserRepository::new();
        users.expect_exists().returning(|_| Ok(false));

        let svc = service(MockVideoRepository::new(), users);
        let err = svc.channel_stats(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_stats_zero_videos_yields_zeroed_counters() {
        let channel_id = Uuid::new_v4();

        let mut users = MockUserRepository::new();
        users.expect_exists().returning(|_| Ok(true));

        let mut videos = MockVideoRepository::new();
        videos
            .expect_stats_for_channel()
            .with(eq(channel_id))
            .returning(|_| {
                Ok(ChannelStats {
                    total_videos: 0,
                    total_views: 0,
                    total_subscribers: 7,
                    total_likes: 0,
                })
            });

        let svc = service(videos, users);
        let stats = svc.channel_stats(channel_id).await.unwrap();
        assert_eq!(
            stats,
            ChannelStats {
                total_videos: 0,
                total_views: 0,
                total_subscribers: 7,
                total_likes: 0,
            }
        );
    }

    #[tokio::test]
    async fn test_videos_missing_channel_is_not_found() {
        let mut users = MockUserRepository::new();
        users.expect_exists().returning(|_| Ok(false));

        let mut videos = MockVideoRepository::new();
        videos.expect_list_for_channel().times(0);

        let svc = service(videos, users);
        let err = svc.channel_videos(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_videos_empty_channel_is_not_found() {
        let mut users = MockUserRepository::new();
        users.expect_exists().returning(|_| Ok(true));

        let mut videos = MockVideoRepository::new();
        videos.expect_list_for_channel().returning(|_| Ok(Vec::new()));

        let svc = service(videos, users);
        let err = svc.channel_videos(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_videos_returns_projections() {
        let mut users = MockUserRepository::new();
        users.expect_exists().returning(|_| Ok(true));

        let mut videos = MockVideoRepository::new();
        videos.expect_list_for_channel().returning(|_| {
            Ok(vec![ChannelVideo {
                id: Uuid::new_v4(),
                title: "Title".into(),
                description: "Description".into(),
                video_file: "video.mp4".into(),
                thumbnail: "thumb.jpg".into(),
                created_at: Utc::now(),
            }])
        });

        let svc = service(videos, users);
        let list = svc.channel_videos(Uuid::new_v4()).await.unwrap();
        assert_eq!(list.len(), 1);
    }
}
