use crate::client::api::ApiClient;
use crate::client::error::Result;
use crate::models::teacher::Teacher;

const PATH: &str = "/api/teacher";

/// Read-only access to teachers.
#[derive(Clone)]
pub struct TeacherApi {
    api: ApiClient,
}

impl TeacherApi {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn list(&self) -> Result<Vec<Teacher>> {
        self.api.get(PATH).await
    }

    pub async fn detail(&self, id: i64) -> Result<Teacher> {
        self.api.get(&format!("{PATH}/{id}")).await
    }
}
