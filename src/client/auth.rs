use reqwest::Method;

use crate::client::api::ApiClient;
use crate::client::error::{ClientError, Result};
use crate::models::session::SessionInfo;
use crate::validation::auth::{LoginRequest, RegisterRequest};

const PATH: &str = "/api/auth";

/// Calls the login and register endpoints.
#[derive(Clone)]
pub struct AuthClient {
    api: ApiClient,
}

impl AuthClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Exchanges credentials for session information.
    ///
    /// A `401` becomes `ClientError::Unauthorized`; other failures pass
    /// through unchanged. The session state is not touched here.
    pub async fn login(&self, request: &LoginRequest) -> Result<SessionInfo> {
        self.api
            .send_json(Method::POST, &format!("{PATH}/login"), request)
            .await
            .map_err(|e| match e {
                ClientError::RequestFailed { status: 401, .. } => ClientError::Unauthorized,
                other => other,
            })
    }

    /// Creates an account. A `400`, such as a taken email, becomes
    /// `ClientError::BadRequest` carrying the server's message.
    pub async fn register(&self, request: &RegisterRequest) -> Result<()> {
        self.api
            .send_json_discard(Method::POST, &format!("{PATH}/register"), request)
            .await
            .map_err(|e| match e {
                ClientError::RequestFailed { status: 400, body } => ClientError::BadRequest(message_of(&body)),
                other => other,
            })
    }
}

/// Pulls `message` out of an error body, falling back to the raw text.
fn message_of(body: &str) -> String {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        message: String,
    }

    sonic_rs::from_str::<ErrorBody>(body)
        .map(|b| b.message)
        .unwrap_or_else(|_| body.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_message_is_extracted() {
        assert_eq!(
            message_of(r#"{"message":"Error: Email is already taken!"}"#),
            "Error: Email is already taken!"
        );
        assert_eq!(message_of("plain"), "plain");
    }
}
