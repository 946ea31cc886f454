mod common;

use common::*;
use serde_json::{json, Value};

#[tokio::test]
async fn test_user_detail_hides_password() {
    let app = spawn_app().await;
    let token = app.token(USER_EMAIL).await;

    let response = app.get(&format!("/api/user/{USER_ID}"), &token).await;
    assert_eq!(response.status().as_u16(), 200);
    let user: Value = response.json().await.unwrap();
    assert_eq!(user["email"], USER_EMAIL);
    assert_eq!(user["firstName"], "John");
    assert_eq!(user["admin"], false);
    assert!(user.get("password").is_none());

    assert_eq!(app.get("/api/user/9999", &token).await.status().as_u16(), 404);
    assert_eq!(app.get("/api/user/abc", &token).await.status().as_u16(), 400);
}

#[tokio::test]
async fn test_users_delete_only_themselves() {
    let app = spawn_app().await;
    let token = app.token(USER_EMAIL).await;

    let other = app.delete(&format!("/api/user/{OTHER_ID}"), &token).await;
    assert_eq!(other.status().as_u16(), 401);

    let missing = app.delete("/api/user/9999", &token).await;
    assert_eq!(missing.status().as_u16(), 404);
}

#[tokio::test]
async fn test_account_deletion_drops_participation_and_token() {
    let app = spawn_app().await;
    let admin = app.token(ADMIN_EMAIL).await;
    let token = app.token(USER_EMAIL).await;

    let response = app.delete(&format!("/api/user/{USER_ID}"), &token).await;
    assert_eq!(response.status().as_u16(), 200);

    let session: Value = app.get("/api/session/1", &admin).await.json().await.unwrap();
    assert_eq!(session["users"], json!([ADMIN_ID, OTHER_ID]));

    assert_eq!(app.get("/api/session", &token).await.status().as_u16(), 401);
    assert_eq!(app.login(USER_EMAIL, PASSWORD).await.status().as_u16(), 401);
}
