mod common;

use axum::http::StatusCode;
use chrono::Utc;
use sea_orm::EntityTrait;

use common::{assert_redirect, body_text, TestApp};
use ride_sharing::entities::feedback;

#[tokio::test]
async fn test_valid_feedback_is_stored_with_timestamp() {
    let app = TestApp::new().await;
    let before = Utc::now();

    let response = app
        .post_form("/Feedback", "CustomerName=Ada+Lovelace&Comments=Great+driver")
        .await;
    assert_redirect(&response, "/");

    let rows = feedback::Entity::find().all(&app.db).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].customer_name, "Ada Lovelace");
    assert_eq!(rows[0].comments, "Great driver");
    assert!(rows[0].created_at.timestamp() >= before.timestamp());
}

#[tokio::test]
async fn test_overlong_comments_are_rejected_and_redisplayed() {
    let app = TestApp::new().await;
    let comments = "x".repeat(501);

    let response = app
        .post_form(
            "/Feedback",
            &format!("CustomerName=Ada+Lovelace&Comments={}", comments),
        )
        .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let html = body_text(response).await;
    assert!(html.contains("Comments must be at most 500 characters"));
    assert!(html.contains("value=\"Ada Lovelace\""));
    assert!(html.contains(&comments));

    assert!(feedback::Entity::find().all(&app.db).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_missing_name_is_rejected() {
    let app = TestApp::new().await;

    let response = app.post_form("/Feedback", "Comments=Nice").await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body_text(response).await.contains("Customer name is required"));

    assert!(feedback::Entity::find().all(&app.db).await.unwrap().is_empty());
}
