//! Handlers for comment endpoints (list, create, update, delete).

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::comment::{
    CommentListResponse, CommentResponse, CreateCommentRequest, UpdateCommentRequest,
};
use crate::api::dto::envelope::ApiResponse;
use crate::api::dto::pagination::PaginationParams;
use crate::api::middleware::{CurrentUser, OptionalUser};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::parse_id;

/// Lists comments for a video, annotated with like count, owner profile
/// fields, and the requester's like state.
///
/// # Endpoint
///
/// `GET /videos/{videoId}/comments?page=1&limit=10`
///
/// The requesting user is optional here; anonymous requests get
/// `isLiked: false` on every item. An empty page is a success.
///
/// # Errors
///
/// Returns 400 on a malformed video id, page 0, or limit above 10.
/// Returns 404 if the video does not exist.
pub async fn list_comments_handler(
    State(state): State<AppState>,
    Path(video_id): Path<String>,
    Query(params): Query<PaginationParams>,
    OptionalUser(requester): OptionalUser,
) -> Result<ApiResponse<CommentListResponse>, AppError> {
    let video_id = parse_id(&video_id, "video id")?;
    let (page, limit) = params.validate().map_err(AppError::bad_request)?;

    let comments = state
        .comment_service
        .list_for_video(video_id, page, limit, requester)
        .await?;

    Ok(ApiResponse::ok(
        comments.into(),
        "Video comments fetched successfully",
    ))
}

/// Adds a comment to a video.
///
/// # Endpoint
///
/// `POST /videos/{videoId}/comments` with body `{"content": "..."}`
///
/// # Errors
///
/// Returns 400 on a malformed video id or empty content, 401 without an
/// authenticated user, 404 if the video does not exist.
pub async fn add_comment_handler(
    State(state): State<AppState>,
    Path(video_id): Path<String>,
    CurrentUser(owner_id): CurrentUser,
    Json(payload): Json<CreateCommentRequest>,
) -> Result<ApiResponse<CommentResponse>, AppError> {
    payload.validate()?;
    let video_id = parse_id(&video_id, "video id")?;

    let comment = state
        .comment_service
        .add(video_id, &payload.content, owner_id)
        .await?;

    Ok(ApiResponse::ok(
        comment.into(),
        "Comment created successfully",
    ))
}

/// Updates the content of a comment.
///
/// # Endpoint
///
/// `PATCH /comments/{commentId}` with body `{"content": "..."}`
///
/// Only the owner's update is applied; a non-owner receives the stored
/// comment unchanged with a success envelope (see
/// [`crate::application::services::CommentService::update`]).
///
/// # Errors
///
/// Returns 400 on a malformed comment id or empty content, 401 without an
/// authenticated user, 404 if the comment does not exist.
pub async fn update_comment_handler(
    State(state): State<AppState>,
    Path(comment_id): Path<String>,
    CurrentUser(requester_id): CurrentUser,
    Json(payload): Json<UpdateCommentRequest>,
) -> Result<ApiResponse<CommentResponse>, AppError> {
    payload.validate()?;
    let comment_id = parse_id(&comment_id, "comment id")?;

    let comment = state
        .comment_service
        .update(comment_id, &payload.content, requester_id)
        .await?;

    Ok(ApiResponse::ok(
        comment.into(),
        "Comment updated successfully",
    ))
}

/// Deletes a comment and all likes referencing it.
///
/// # Endpoint
///
/// `DELETE /comments/{commentId}`
///
/// # Errors
///
/// Returns 400 on a malformed comment id, 401 without an authenticated
/// user, 403 if the requester is not the owner, 404 if the comment does
/// not exist.
pub async fn delete_comment_handler(
    State(state): State<AppState>,
    Path(comment_id): Path<String>,
    CurrentUser(requester_id): CurrentUser,
) -> Result<ApiResponse<serde_json::Value>, AppError> {
    let comment_id = parse_id(&comment_id, "comment id")?;

    state
        .comment_service
        .delete(comment_id, requester_id)
        .await?;

    Ok(ApiResponse::ok(json!({}), "Comment deleted successfully"))
}
