mod common;

use serde_json::{Value, json};
use uuid::Uuid;

#[tokio::test]
async fn test_list_comments_rejects_malformed_video_id() {
    let server = common::test_server();

    let response = server.get("/videos/not-a-uuid/comments").await;

    response.assert_status_bad_request();
    let body = response.json::<Value>();
    assert_eq!(body["statusCode"], 400);
    assert_eq!(body["message"], "Invalid video id");
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_list_comments_rejects_limit_above_cap() {
    let server = common::test_server();

    let response = server
        .get(&format!("/videos/{}/comments", Uuid::new_v4()))
        .add_query_param("limit", "11")
        .await;

    response.assert_status_bad_request();
    assert_eq!(response.json::<Value>()["success"], false);
}

#[tokio::test]
async fn test_list_comments_rejects_page_zero() {
    let server = common::test_server();

    let response = server
        .get(&format!("/videos/{}/comments", Uuid::new_v4()))
        .add_query_param("page", "0")
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_add_comment_requires_identity() {
    let server = common::test_server();

    let response = server
        .post(&format!("/videos/{}/comments", Uuid::new_v4()))
        .json(&json!({ "content": "nice video" }))
        .await;

    response.assert_status_unauthorized();
    let body = response.json::<Value>();
    assert_eq!(body["statusCode"], 401);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_add_comment_rejects_empty_content() {
    let server = common::test_server();

    let response = server
        .post(&format!("/videos/{}/comments", Uuid::new_v4()))
        .add_header("x-user-id", Uuid::new_v4().to_string())
        .json(&json!({ "content": "" }))
        .await;

    response.assert_status_bad_request();
    let body = response.json::<Value>();
    assert_eq!(body["message"], "Validation failed");
    assert!(!body["errors"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_add_comment_rejects_malformed_video_id() {
    let server = common::test_server();

    let response = server
        .post("/videos/123/comments")
        .add_header("x-user-id", Uuid::new_v4().to_string())
        .json(&json!({ "content": "nice video" }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(response.json::<Value>()["message"], "Invalid video id");
}

#[tokio::test]
async fn test_update_comment_rejects_malformed_comment_id() {
    let server = common::test_server();

    let response = server
        .patch("/comments/xyz")
        .add_header("x-user-id", Uuid::new_v4().to_string())
        .json(&json!({ "content": "edited" }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(response.json::<Value>()["message"], "Invalid comment id");
}

#[tokio::test]
async fn test_delete_comment_requires_identity() {
    let server = common::test_server();

    let response = server
        .delete(&format!("/comments/{}", Uuid::new_v4()))
        .await;

    response.assert_status_unauthorized();
}
