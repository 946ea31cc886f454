#![allow(dead_code)]

use chrono::{TimeZone, Utc};
use serde_json::{json, Value};
use zeroize::Zeroizing;

use yoga_studio::{
    config::{Config, PasswordCost},
    db::Store,
    models::yoga_session::SessionFields,
    repositories::{teacher as teacher_repo, yoga_session as session_repo},
    services::auth as auth_service,
    AppState,
};

pub const PASSWORD: &str = "test!1234";
pub const ADMIN_EMAIL: &str = "admin@test.com";
pub const USER_EMAIL: &str = "user@test.com";
pub const OTHER_EMAIL: &str = "other@test.com";

pub const ADMIN_ID: i64 = 1;
pub const USER_ID: i64 = 2;
pub const OTHER_ID: i64 = 3;
pub const SESSION_ID: i64 = 1;

// Shared test context
pub struct TestApp {
    pub client: reqwest::Client,
    pub base_url: String,
    pub state: AppState,
}

pub fn test_config() -> Config {
    Config {
        database_url: None,
        bind_addr: "127.0.0.1:0".parse().unwrap(),
        jwt_secret: Zeroizing::new(vec![42u8; 32]),
        jwt_expiration_hours: 1,
        password_cost: PasswordCost {
            memory_kib: 1024,
            iterations: 1,
            parallelism: 1,
        },
        seed_demo_data: false,
        cors_origins: vec!["http://localhost:4200".to_string()],
    }
}

/// Starts the API on a random port over a fresh in-memory store holding:
/// admin (1), user (2), other (3), teachers Margot (1) and Hélène (2), and
/// "Yoga session" (1) attended by users 1, 2 and 3.
pub async fn spawn_app() -> TestApp {
    let config = test_config();
    let state = AppState::with_store(&config, Store::memory());
    let store = &state.store;

    auth_service::ensure_user(store, &config, ADMIN_EMAIL, "Admin", "Admin", PASSWORD, true)
        .await
        .unwrap();
    auth_service::ensure_user(store, &config, USER_EMAIL, "John", "Doe", PASSWORD, false)
        .await
        .unwrap();
    auth_service::ensure_user(store, &config, OTHER_EMAIL, "Jane", "Smith", PASSWORD, false)
        .await
        .unwrap();

    teacher_repo::create(store, "Margot", "DELAHAYE").await.unwrap();
    teacher_repo::create(store, "Hélène", "THIERCÉ").await.unwrap();

    let session = session_repo::create(
        store,
        &SessionFields {
            name: "Yoga session".to_string(),
            description: "A relaxing yoga session".to_string(),
            date: Utc.with_ymd_and_hms(2026, 2, 15, 0, 0, 0).unwrap(),
            teacher_id: 1,
        },
    )
    .await
    .unwrap();
    for user_id in [ADMIN_ID, USER_ID, OTHER_ID] {
        session_repo::add_participant(store, session.id, user_id).await.unwrap();
    }

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    tokio::spawn(yoga_studio::serve(listener, state.clone()));

    TestApp {
        client: reqwest::Client::new(),
        base_url,
        state,
    }
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn login(&self, email: &str, password: &str) -> reqwest::Response {
        self.client
            .post(self.url("/api/auth/login"))
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .unwrap()
    }

    /// Logs in and returns the bearer token.
    pub async fn token(&self, email: &str) -> String {
        let response = self.login(email, PASSWORD).await;
        assert_eq!(response.status().as_u16(), 200, "login failed for {email}");
        let body: Value = response.json().await.unwrap();
        body["token"].as_str().unwrap().to_string()
    }

    pub async fn get(&self, path: &str, token: &str) -> reqwest::Response {
        self.client
            .get(self.url(path))
            .bearer_auth(token)
            .send()
            .await
            .unwrap()
    }

    pub async fn post(&self, path: &str, token: &str, body: &Value) -> reqwest::Response {
        self.client
            .post(self.url(path))
            .bearer_auth(token)
            .json(body)
            .send()
            .await
            .unwrap()
    }

    pub async fn post_empty(&self, path: &str, token: &str) -> reqwest::Response {
        self.client
            .post(self.url(path))
            .bearer_auth(token)
            .send()
            .await
            .unwrap()
    }

    pub async fn put(&self, path: &str, token: &str, body: &Value) -> reqwest::Response {
        self.client
            .put(self.url(path))
            .bearer_auth(token)
            .json(body)
            .send()
            .await
            .unwrap()
    }

    pub async fn delete(&self, path: &str, token: &str) -> reqwest::Response {
        self.client
            .delete(self.url(path))
            .bearer_auth(token)
            .send()
            .await
            .unwrap()
    }
}

pub fn session_body(name: &str) -> Value {
    json!({
        "name": name,
        "date": "2026-03-15",
        "teacher_id": 1,
        "description": "Deep stretches"
    })
}
