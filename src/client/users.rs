use reqwest::Method;

use crate::client::api::ApiClient;
use crate::client::error::Result;
use crate::models::user::User;

const PATH: &str = "/api/user";

/// Access to user profiles.
#[derive(Clone)]
pub struct UserApi {
    api: ApiClient,
}

impl UserApi {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn get_by_id(&self, id: i64) -> Result<User> {
        self.api.get(&format!("{PATH}/{id}")).await
    }

    /// Deletes the account `id`; the server only allows one's own.
    pub async fn delete(&self, id: i64) -> Result<()> {
        self.api.send_empty(Method::DELETE, &format!("{PATH}/{id}")).await
    }
}
