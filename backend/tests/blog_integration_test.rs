//! Integration tests for blog CRUD

mod common;

use axum::http::{Method, StatusCode};
use serde_json::{json, Value};

async fn create_blog(app: &common::TestApp, cookie: &str, blog: Value) -> Value {
    let response = app
        .request(Method::POST, "/api/v1/blogs/", Some(blog), Some(cookie))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    response.body["data"].clone()
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_created_blog_is_retrievable() {
    let app = common::TestApp::new().await;
    let cookie = app.login_new_user().await;

    let created = create_blog(
        &app,
        &cookie,
        json!({ "title": "Hello", "body": "First post", "slug": "hello" }),
    )
    .await;
    let id = created["id"].as_i64().unwrap();
    assert!(id > 0);

    let fetched = app.get(&format!("/api/v1/blogs/{}", id)).await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body["data"]["title"], "Hello");
    assert_eq!(fetched.body["data"]["body"], "First post");
    assert_eq!(fetched.body["data"]["slug"], "hello");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_list_includes_created_blog() {
    let app = common::TestApp::new().await;
    let cookie = app.login_new_user().await;
    let slug = common::unique_username("listed");

    create_blog(&app, &cookie, json!({ "title": "t", "body": "b", "slug": slug })).await;

    let response = app.get("/api/v1/blogs/").await;
    assert_eq!(response.status, StatusCode::OK);

    let blogs = response.body["data"].as_array().unwrap();
    assert!(blogs.iter().any(|b| b["slug"] == slug.as_str()));
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_missing_blog_is_not_found() {
    let app = common::TestApp::new().await;

    let response = app.get(&format!("/api/v1/blogs/{}", i64::MAX)).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["status"], 404);
    assert_eq!(response.body["message"], "record not found");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_partial_update_keeps_empty_fields() {
    let app = common::TestApp::new().await;
    let cookie = app.login_new_user().await;

    let created = create_blog(
        &app,
        &cookie,
        json!({ "title": "Old", "body": "Body", "slug": "old" }),
    )
    .await;
    let path = format!("/api/v1/blogs/{}", created["id"]);

    let response = app
        .request(
            Method::PUT,
            &path,
            Some(json!({ "title": "New", "body": "" })),
            Some(&cookie),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["message"], "Blog updated");

    let fetched = app.get(&path).await;
    assert_eq!(fetched.body["data"]["title"], "New");
    assert_eq!(fetched.body["data"]["body"], "Body");
    assert_eq!(fetched.body["data"]["slug"], "old");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_update_missing_blog_is_bad_request() {
    let app = common::TestApp::new().await;
    let cookie = app.login_new_user().await;

    let response = app
        .request(
            Method::PUT,
            &format!("/api/v1/blogs/{}", i64::MAX),
            Some(json!({ "title": "x" })),
            Some(&cookie),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["status"], 400);
    assert_eq!(response.body["message"], "blog not found");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_update_missing_blog_checked_before_body() {
    let app = common::TestApp::new().await;
    let cookie = app.login_new_user().await;

    let response = app
        .request_raw(
            Method::PUT,
            &format!("/api/v1/blogs/{}", i64::MAX),
            "{not json",
            Some(&cookie),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "blog not found");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_update_existing_blog_with_bad_body_is_decode_error() {
    let app = common::TestApp::new().await;
    let cookie = app.login_new_user().await;

    let created = create_blog(&app, &cookie, json!({ "title": "t", "body": "b", "slug": "s" })).await;
    let path = format!("/api/v1/blogs/{}", created["id"]);

    let response = app
        .request_raw(Method::PUT, &path, "{not json", Some(&cookie))
        .await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body["status"], 500);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_deleted_blog_is_gone() {
    let app = common::TestApp::new().await;
    let cookie = app.login_new_user().await;

    let created = create_blog(&app, &cookie, json!({ "title": "t", "body": "b", "slug": "s" })).await;
    let path = format!("/api/v1/blogs/{}", created["id"]);

    let deleted = app.request(Method::DELETE, &path, None, Some(&cookie)).await;
    assert_eq!(deleted.status, StatusCode::OK);
    assert_eq!(deleted.body["message"], "Blog deleted");

    let fetched = app.get(&path).await;
    assert_eq!(fetched.status, StatusCode::NOT_FOUND);

    let again = app.request(Method::DELETE, &path, None, Some(&cookie)).await;
    assert_eq!(again.status, StatusCode::BAD_REQUEST);
    assert_eq!(again.body["message"], "blog not found");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_mutations_after_logout_are_rejected() {
    let app = common::TestApp::new().await;
    let cookie = app.login_new_user().await;

    let logout = app
        .request(Method::POST, "/api/v1/logout", None, Some(&cookie))
        .await;
    let cleared = logout.session_cookie().unwrap();

    let response = app
        .request(
            Method::POST,
            "/api/v1/blogs/",
            Some(json!({ "title": "t", "body": "b", "slug": "s" })),
            Some(&cleared),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}
