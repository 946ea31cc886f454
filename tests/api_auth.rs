mod common;

use common::*;
use serde_json::{json, Value};

#[tokio::test]
async fn test_login_returns_session_information() {
    let app = spawn_app().await;

    let response = app.login(ADMIN_EMAIL, PASSWORD).await;
    assert_eq!(response.status().as_u16(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["type"], "Bearer");
    assert_eq!(body["id"], ADMIN_ID);
    assert_eq!(body["username"], ADMIN_EMAIL);
    assert_eq!(body["firstName"], "Admin");
    assert_eq!(body["lastName"], "Admin");
    assert_eq!(body["admin"], true);
    assert_eq!(body["token"].as_str().unwrap().split('.').count(), 3);
}

#[tokio::test]
async fn test_login_rejects_bad_credentials() {
    let app = spawn_app().await;

    let wrong_password = app.login(USER_EMAIL, "wrong-password").await;
    assert_eq!(wrong_password.status().as_u16(), 401);
    let body: Value = wrong_password.json().await.unwrap();
    assert!(body["message"].is_string());

    let unknown_email = app.login("nobody@test.com", PASSWORD).await;
    assert_eq!(unknown_email.status().as_u16(), 401);
}

#[tokio::test]
async fn test_login_requires_both_fields() {
    let app = spawn_app().await;

    let response = app
        .client
        .post(app.url("/api/auth/login"))
        .json(&json!({ "email": ADMIN_EMAIL }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn test_repeated_failures_lock_the_email() {
    let app = spawn_app().await;

    for _ in 0..5 {
        let response = app.login(OTHER_EMAIL, "wrong-password").await;
        assert_eq!(response.status().as_u16(), 401);
    }

    let locked = app.login(OTHER_EMAIL, PASSWORD).await;
    assert_eq!(locked.status().as_u16(), 429);

    let unaffected = app.login(USER_EMAIL, PASSWORD).await;
    assert_eq!(unaffected.status().as_u16(), 200);
}

#[tokio::test]
async fn test_register_then_login() {
    let app = spawn_app().await;

    let response = app
        .client
        .post(app.url("/api/auth/register"))
        .json(&json!({
            "email": "new@test.com",
            "firstName": "Jane",
            "lastName": "Smith",
            "password": "password123"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200, "Registration failed");
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "User registered successfully!");

    let login = app.login("new@test.com", "password123").await;
    assert_eq!(login.status().as_u16(), 200);
    let session: Value = login.json().await.unwrap();
    assert_eq!(session["admin"], false);
}

#[tokio::test]
async fn test_register_rejects_taken_email() {
    let app = spawn_app().await;

    let response = app
        .client
        .post(app.url("/api/auth/register"))
        .json(&json!({
            "email": USER_EMAIL,
            "firstName": "John",
            "lastName": "Again",
            "password": "password123"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Error: Email is already taken!");
}

#[tokio::test]
async fn test_concurrent_registrations_with_one_email() {
    let app = spawn_app().await;
    let body = json!({
        "email": "race@test.com",
        "firstName": "Jane",
        "lastName": "Smith",
        "password": "password123"
    });
    let register = || app.client.post(app.url("/api/auth/register")).json(&body).send();

    let (first, second) = tokio::join!(register(), register());
    let mut statuses = [first.unwrap().status().as_u16(), second.unwrap().status().as_u16()];
    statuses.sort();
    assert_eq!(statuses, [200, 400]);
}

#[tokio::test]
async fn test_register_validates_fields() {
    let app = spawn_app().await;

    for body in [
        json!({ "email": "bad-email", "firstName": "Jane", "lastName": "Smith", "password": "password123" }),
        json!({ "email": "a@test.com", "firstName": "Jo", "lastName": "Smith", "password": "password123" }),
        json!({ "email": "a@test.com", "firstName": "Jane", "lastName": "Smith", "password": "123" }),
        json!({ "email": "a@test.com", "lastName": "Smith", "password": "password123" }),
    ] {
        let response = app
            .client
            .post(app.url("/api/auth/register"))
            .json(&body)
            .send()
            .await
            .unwrap();
        assert_eq!(response.status().as_u16(), 400, "accepted {body}");
    }
}

#[tokio::test]
async fn test_protected_routes_need_a_valid_token() {
    let app = spawn_app().await;

    let missing = app.client.get(app.url("/api/session")).send().await.unwrap();
    assert_eq!(missing.status().as_u16(), 401);

    let forged = app.get("/api/session", "not.a.token").await;
    assert_eq!(forged.status().as_u16(), 401);

    let token = app.token(USER_EMAIL).await;
    let ok = app.get("/api/session", &token).await;
    assert_eq!(ok.status().as_u16(), 200);
}
