mod common;

use serde_json::Value;
use uuid::Uuid;

#[tokio::test]
async fn test_toggle_video_like_requires_identity() {
    let server = common::test_server();

    let response = server
        .post(&format!("/videos/{}/like", Uuid::new_v4()))
        .await;

    response.assert_status_unauthorized();
    let body = response.json::<Value>();
    assert_eq!(body["statusCode"], 401);
    assert_eq!(body["success"], false);
    assert_eq!(body["errors"], serde_json::json!([]));
}

#[tokio::test]
async fn test_toggle_video_like_rejects_malformed_id() {
    let server = common::test_server();

    let response = server
        .post("/videos/not-a-uuid/like")
        .add_header("x-user-id", Uuid::new_v4().to_string())
        .await;

    response.assert_status_bad_request();
    assert_eq!(response.json::<Value>()["message"], "Invalid video id");
}

#[tokio::test]
async fn test_toggle_comment_like_rejects_malformed_id() {
    let server = common::test_server();

    let response = server
        .post("/comments/42/like")
        .add_header("x-user-id", Uuid::new_v4().to_string())
        .await;

    response.assert_status_bad_request();
    assert_eq!(response.json::<Value>()["message"], "Invalid comment id");
}

#[tokio::test]
async fn test_toggle_tweet_like_rejects_malformed_id() {
    let server = common::test_server();

    let response = server
        .post("/tweets/oops/like")
        .add_header("x-user-id", Uuid::new_v4().to_string())
        .await;

    response.assert_status_bad_request();
    assert_eq!(response.json::<Value>()["message"], "Invalid tweet id");
}

#[tokio::test]
async fn test_liked_videos_requires_identity() {
    let server = common::test_server();

    let response = server.get("/likes/videos").await;

    response.assert_status_unauthorized();
}

#[tokio::test]
async fn test_malformed_identity_header_is_rejected() {
    let server = common::test_server();

    let response = server
        .post(&format!("/videos/{}/like", Uuid::new_v4()))
        .add_header("x-user-id", "not-a-uuid")
        .await;

    response.assert_status_unauthorized();
}
