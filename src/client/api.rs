use reqwest::{header, Method, RequestBuilder};
use serde::{de::DeserializeOwned, Serialize};

use crate::client::error::{ClientError, Result};
use crate::front::session_state::SessionState;

/// Shared HTTP plumbing for the resource clients.
///
/// Every request carries `Authorization: Bearer <token>` while the session
/// state holds a login.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: SessionState,
}

impl ApiClient {
    /// Creates a client for the API rooted at `base_url`, e.g. `http://127.0.0.1:8080`.
    pub fn new(base_url: impl Into<String>, session: SessionState) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            session,
        }
    }

    /// The session state whose token is attached to requests.
    pub fn session(&self) -> &SessionState {
        &self.session
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, format!("{}{}", self.base_url, path));
        match self.session.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Vec<u8>> {
        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::debug!("❌ Request failed with {}: {}", status, body);
            return Err(ClientError::RequestFailed {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response.bytes().await?.to_vec())
    }

    fn with_body<B: Serialize>(builder: RequestBuilder, body: &B) -> Result<RequestBuilder> {
        let bytes = sonic_rs::to_vec(body)?;
        Ok(builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(bytes))
    }

    /// `GET path`, decoding the JSON response.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let bytes = self.send(self.request(Method::GET, path)).await?;
        Ok(sonic_rs::from_slice(&bytes)?)
    }

    /// Sends `body` as JSON and decodes the JSON response.
    pub async fn send_json<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let builder = Self::with_body(self.request(method, path), body)?;
        let bytes = self.send(builder).await?;
        Ok(sonic_rs::from_slice(&bytes)?)
    }

    /// Sends `body` as JSON and ignores the response body.
    pub async fn send_json_discard<B: Serialize>(&self, method: Method, path: &str, body: &B) -> Result<()> {
        let builder = Self::with_body(self.request(method, path), body)?;
        self.send(builder).await?;
        Ok(())
    }

    /// Sends a bodiless request and ignores the response body.
    pub async fn send_empty(&self, method: Method, path: &str) -> Result<()> {
        self.send(self.request(method, path)).await?;
        Ok(())
    }
}
