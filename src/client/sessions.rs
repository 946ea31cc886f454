use reqwest::Method;

use crate::client::api::ApiClient;
use crate::client::error::Result;
use crate::models::yoga_session::{ClassSession, SessionPayload};

const PATH: &str = "/api/session";

/// One-to-one wrapper over the session endpoints.
#[derive(Clone)]
pub struct SessionApi {
    api: ApiClient,
}

impl SessionApi {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn list(&self) -> Result<Vec<ClassSession>> {
        self.api.get(PATH).await
    }

    pub async fn detail(&self, id: i64) -> Result<ClassSession> {
        self.api.get(&format!("{PATH}/{id}")).await
    }

    pub async fn create(&self, payload: &SessionPayload) -> Result<ClassSession> {
        self.api.send_json(Method::POST, PATH, payload).await
    }

    pub async fn update(&self, id: i64, payload: &SessionPayload) -> Result<ClassSession> {
        self.api.send_json(Method::PUT, &format!("{PATH}/{id}"), payload).await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.api.send_empty(Method::DELETE, &format!("{PATH}/{id}")).await
    }

    /// Enrolls `user_id` in session `id`.
    pub async fn participate(&self, id: i64, user_id: i64) -> Result<()> {
        self.api
            .send_empty(Method::POST, &format!("{PATH}/{id}/participate/{user_id}"))
            .await
    }

    /// Withdraws `user_id` from session `id`.
    pub async fn un_participate(&self, id: i64, user_id: i64) -> Result<()> {
        self.api
            .send_empty(Method::DELETE, &format!("{PATH}/{id}/participate/{user_id}"))
            .await
    }
}
