//! Shared application state injected into all handlers.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::{CommentService, DashboardService, LikeService};
use crate::infrastructure::persistence::{
    PgCommentRepository, PgLikeRepository, PgTweetRepository, PgUserRepository, PgVideoRepository,
};

/// Comment service wired to the PostgreSQL repositories.
pub type AppCommentService =
    CommentService<PgCommentRepository, PgVideoRepository, PgLikeRepository>;
/// Like service wired to the PostgreSQL repositories.
pub type AppLikeService =
    LikeService<PgLikeRepository, PgVideoRepository, PgCommentRepository, PgTweetRepository>;
/// Dashboard service wired to the PostgreSQL repositories.
pub type AppDashboardService = DashboardService<PgVideoRepository, PgUserRepository>;

#[derive(Clone)]
pub struct AppState {
    /// Raw pool, used by the health check.
    pub db: PgPool,
    pub comment_service: Arc<AppCommentService>,
    pub like_service: Arc<AppLikeService>,
    pub dashboard_service: Arc<AppDashboardService>,
}

impl AppState {
    /// Wires repositories and services around a connection pool.
    pub fn new(pool: PgPool) -> Self {
        let pool_arc = Arc::new(pool.clone());

        let comment_repository = Arc::new(PgCommentRepository::new(pool_arc.clone()));
        let like_repository = Arc::new(PgLikeRepository::new(pool_arc.clone()));
        let video_repository = Arc::new(PgVideoRepository::new(pool_arc.clone()));
        let user_repository = Arc::new(PgUserRepository::new(pool_arc.clone()));
        let tweet_repository = Arc::new(PgTweetRepository::new(pool_arc));

        let comment_service = Arc::new(CommentService::new(
            comment_repository.clone(),
            video_repository.clone(),
            like_repository.clone(),
        ));
        let like_service = Arc::new(LikeService::new(
            like_repository,
            video_repository.clone(),
            comment_repository,
            tweet_repository,
        ));
        let dashboard_service = Arc::new(DashboardService::new(video_repository, user_repository));

        Self {
            db: pool,
            comment_service,
            like_service,
            dashboard_service,
        }
    }
}
