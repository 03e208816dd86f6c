mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{FakeForum, request, send, test_app};

#[tokio::test]
async fn test_create_post_tag() {
    let fake = FakeForum::new();
    let app = test_app(fake.clone());

    let (status, body) = send(
        app,
        request("POST", "/v1/posttags", Some(json!({ "post_id": "p1", "tag_id": "t1" }))),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["post_id"], "p1");
    assert_eq!(body["tag_id"], "t1");
    assert_eq!(fake.last_call().method, "CreatePostTag");
}

#[tokio::test]
async fn test_get_post_tag_by_path_pair() {
    let fake = FakeForum::new();
    let app = test_app(fake.clone());

    let (status, _) = send(app, request("GET", "/v1/posttags/p1/t2", None)).await;

    assert_eq!(status, StatusCode::OK);
    let call = fake.last_call();
    assert_eq!(call.method, "GetPostTag");
    assert_eq!(call.request, json!({ "post_id": "p1", "tag_id": "t2" }));
}

#[tokio::test]
async fn test_update_post_tag_moves_to_new_tag() {
    let fake = FakeForum::new();
    let app = test_app(fake.clone());

    let (status, body) = send(
        app,
        request(
            "PUT",
            "/v1/posttags/p1/t1",
            Some(json!({ "new_tag_id": "t3" })),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["tag_id"], "t3");
    assert_eq!(
        fake.last_call().request,
        json!({ "post_id": "p1", "tag_id": "t1", "new_tag_id": "t3" })
    );
}

#[tokio::test]
async fn test_delete_post_tag_reads_path_not_body() {
    let fake = FakeForum::new();
    let app = test_app(fake.clone());

    let (status, _) = send(
        app,
        request(
            "DELETE",
            "/v1/posttags/p1/t1",
            Some(json!({ "post_id": "x", "tag_id": "y" })),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        fake.last_call().request,
        json!({ "post_id": "p1", "tag_id": "t1" })
    );
}

#[tokio::test]
async fn test_list_post_tags_filters() {
    let fake = FakeForum::new();
    let app = test_app(fake.clone());

    let (status, body) = send(app, request("GET", "/v1/posttags?tag_id=t1", None)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["post_tags"].as_array().unwrap().len(), 2);
    assert_eq!(
        fake.last_call().request,
        json!({ "post_id": "", "tag_id": "t1", "page": 1, "limit": 10 })
    );
}

#[tokio::test]
async fn test_posts_by_tag_uses_static_segment() {
    let fake = FakeForum::new().with_list_size(4);
    let app = test_app(fake.clone());

    let (status, body) = send(
        app,
        request("GET", "/v1/posttags/t7/posts?page=2&limit=4", None),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["posts"].as_array().unwrap().len(), 4);
    assert_eq!(body["page"], 2);

    let call = fake.last_call();
    assert_eq!(call.method, "GetPostsByTag");
    assert_eq!(call.request, json!({ "tag_id": "t7", "page": 2, "limit": 4 }));
}

#[tokio::test]
async fn test_posts_by_tag_bad_page_is_400() {
    let fake = FakeForum::new();
    let app = test_app(fake.clone());

    let (status, _) = send(app, request("GET", "/v1/posttags/t7/posts?page=x", None)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(fake.call_count(), 0);
}
