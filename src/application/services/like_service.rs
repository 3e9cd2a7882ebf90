//! Like toggling and liked-video listing service.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::LikeTarget;
use crate::domain::repositories::{
    CommentRepository, LikeRepository, TweetRepository, VideoRepository, VideoSummary,
};
use crate::error::AppError;

/// Service implementing the like toggle over videos, comments, and tweets.
///
/// The toggle is a read-then-write and is not atomic at this layer; the
/// partial unique indexes on `likes` reject the duplicate row if two
/// toggles for the same (user, target) race, surfacing as a conflict.
pub struct LikeService<L, V, C, T>
where
    L: LikeRepository,
    V: VideoRepository,
    C: CommentRepository,
    T: TweetRepository,
{
    like_repository: Arc<L>,
    video_repository: Arc<V>,
    comment_repository: Arc<C>,
    tweet_repository: Arc<T>,
}

impl<L, V, C, T> LikeService<L, V, C, T>
where
    L: LikeRepository,
    V: VideoRepository,
    C: CommentRepository,
    T: TweetRepository,
{
    /// Creates a new like service.
    pub fn new(
        like_repository: Arc<L>,
        video_repository: Arc<V>,
        comment_repository: Arc<C>,
        tweet_repository: Arc<T>,
    ) -> Self {
        Self {
            like_repository,
            video_repository,
            comment_repository,
            tweet_repository,
        }
    }

    /// Flips the like state for a (user, target) pair.
    ///
    /// Returns `true` if the call created a like, `false` if it removed
    /// one. One algorithm serves all three target kinds.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the target entity does not exist.
    pub async fn toggle(&self, target: LikeTarget, user_id: Uuid) -> Result<bool, AppError> {
        self.ensure_target_exists(target).await?;

        match self
            .like_repository
            .find_for_target(target, user_id)
            .await?
        {
            Some(existing) => {
                self.like_repository.delete(existing.id).await?;
                tracing::debug!(kind = target.kind(), target_id = %target.id(), "Like removed");
                Ok(false)
            }
            None => {
                self.like_repository.create(target, user_id).await?;
                tracing::debug!(kind = target.kind(), target_id = %target.id(), "Like created");
                Ok(true)
            }
        }
    }

    /// Lists the videos a user has liked.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when the user has no liked videos
    /// (kept from the original API contract).
    pub async fn liked_videos(&self, user_id: Uuid) -> Result<Vec<VideoSummary>, AppError> {
        let videos = self.like_repository.liked_videos(user_id).await?;

        if videos.is_empty() {
            return Err(AppError::not_found("User has no liked videos"));
        }

        Ok(videos)
    }

    async fn ensure_target_exists(&self, target: LikeTarget) -> Result<(), AppError> {
        let exists = match target {
            LikeTarget::Video(id) => self.video_repository.exists(id).await?,
            LikeTarget::Comment(id) => self.comment_repository.exists(id).await?,
            LikeTarget::Tweet(id) => self.tweet_repository.exists(id).await?,
        };

        if !exists {
            return Err(match target {
                LikeTarget::Video(_) => AppError::not_found("Video not found"),
                LikeTarget::Comment(_) => AppError::not_found("Comment not found"),
                LikeTarget::Tweet(_) => AppError::not_found("Tweet not found"),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Like;
    use crate::domain::repositories::{
        MockCommentRepository, MockLikeRepository, MockTweetRepository, MockVideoRepository,
    };
    use chrono::Utc;
    use mockall::Sequence;
    use mockall::predicate::eq;

    type TestLikeService = LikeService<
        MockLikeRepository,
        MockVideoRepository,
        MockCommentRepository,
        MockTweetRepository,
    >;

    fn service(
        likes: MockLikeRepository,
        videos: MockVideoRepository,
        comments: MockCommentRepository,
        tweets: MockTweetRepository,
    ) -> TestLikeService {
        LikeService::new(
            Arc::new(likes),
            Arc::new(videos),
            Arc::new(comments),
            Arc::new(tweets),
        )
    }

    fn like(target: LikeTarget, user_id: Uuid) -> Like {
        Like {
            id: Uuid::new_v4(),
            target,
            liked_by: user_id,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_toggle_creates_like_when_absent() {
        let video_id = Uuid::new_v4();
        let user_id = Uuid::new_v4();
        let target = LikeTarget::Video(video_id);

        let mut videos = MockVideoRepository::new();
        videos
            .expect_exists()
            .with(eq(video_id))
            .returning(|_| Ok(true));

        let mut likes = MockLikeRepository::new();
        likes
            .expect_find_for_target()
            .with(eq(target), eq(user_id))
            .returning(|_, _| Ok(None));
        likes
            .expect_create()
            .with(eq(target), eq(user_id))
            .times(1)
            .returning(|t, u| Ok(like(t, u)));
        likes.expect_delete().times(0);

        let svc = service(
            likes,
            videos,
            MockCommentRepository::new(),
            MockTweetRepository::new(),
        );
        assert!(svc.toggle(target, user_id).await.unwrap());
    }

    #[tokio::test]
    async fn test_toggle_removes_existing_like() {
        let comment_id = Uuid::new_v4();
        let user_id = Uuid::new_v4();
        let target = LikeTarget::Comment(comment_id);
        let existing = like(target, user_id);
        let existing_id = existing.id;

        let mut comments = MockCommentRepository::new();
        comments.expect_exists().returning(|_| Ok(true));

        let mut likes = MockLikeRepository::new();
        likes.expect_find_for_target().returning(move |t, u| {
            let mut existing = like(t, u);
            existing.id = existing_id;
            Ok(Some(existing))
        });
        likes
            .expect_delete()
            .with(eq(existing_id))
            .times(1)
            .returning(|_| Ok(true));
        likes.expect_create().times(0);

        let svc = service(
            likes,
            MockVideoRepository::new(),
            comments,
            MockTweetRepository::new(),
        );
        assert!(!svc.toggle(target, user_id).await.unwrap());
    }

    #[tokio::test]
    async fn test_toggle_twice_is_an_involution() {
        let tweet_id = Uuid::new_v4();
        let user_id = Uuid::new_v4();
        let target = LikeTarget::Tweet(tweet_id);

        let mut tweets = MockTweetRepository::new();
        tweets.expect_exists().returning(|_| Ok(true));

        let mut seq = Sequence::new();
        let mut likes = MockLikeRepository::new();
        likes
            .expect_find_for_target()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(None));
        likes
            .expect_create()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|t, u| Ok(like(t, u)));
        likes
            .expect_find_for_target()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|t, u| Ok(Some(like(t, u))));
        likes
            .expect_delete()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(true));

        let svc = service(
            likes,
            MockVideoRepository::new(),
            MockCommentRepository::new(),
            tweets,
        );
        assert!(svc.toggle(target, user_id).await.unwrap());
        assert!(!svc.toggle(target, user_id).await.unwrap());
    }

    #[tokio::test]
    async fn test_toggle_missing_target_is_not_found() {
        let mut videos = MockVideoRepository::new();
        videos.expect_exists().returning(|_| Ok(false));

        let mut likes = MockLikeRepository::new();
        likes.expect_find_for_target().times(0);

        let svc = service(
            likes,
            videos,
            MockCommentRepository::new(),
            MockTweetRepository::new(),
        );
        let err = svc
            .toggle(LikeTarget::Video(Uuid::new_v4()), Uuid::new_v4())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_liked_videos_empty_is_not_found() {
        let mut likes = MockLikeRepository::new();
        likes.expect_liked_videos().returning(|_| Ok(Vec::new()));

        let svc = service(
            likes,
            MockVideoRepository::new(),
            MockCommentRepository::new(),
            MockTweetRepository::new(),
        );
        let err = svc.liked_videos(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_liked_videos_returns_summaries() {
        let user_id = Uuid::new_v4();

        let mut likes = MockLikeRepository::new();
        likes.expect_liked_videos().with(eq(user_id)).returning(|_| {
            Ok(vec![VideoSummary {
                id: Uuid::new_v4(),
                title: "Title".into(),
                description: "Description".into(),
                views: 42,
                owner_id: Uuid::new_v4(),
            }])
        });

        let svc = service(
            likes,
            MockVideoRepository::new(),
            MockCommentRepository::new(),
            MockTweetRepository::new(),
        );
        let videos = svc.liked_videos(user_id).await.unwrap();
        assert_eq!(videos.len(), 1);
        assert_eq!(videos[0].views, 42);
    }
}
