//! Business logic services for the application layer.

pub mod comment_service;
pub mod dashboard_service;
pub mod like_service;

pub use comment_service::{CommentPage, CommentService};
pub use dashboard_service::DashboardService;
pub use like_service::LikeService;
