use thiserror::Error;

/// Failures surfaced by the API clients.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The credentials were rejected.
    #[error("Unauthorized")]
    Unauthorized,

    /// The server refused the payload, e.g. a registration with a taken email.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Any other non-success response, kept as-is.
    #[error("Request failed with status {status}: {body}")]
    RequestFailed { status: u16, body: String },

    /// The request never got a response.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body did not match the expected shape.
    #[error("Decode error: {0}")]
    Decode(#[from] sonic_rs::Error),
}

impl ClientError {
    /// The HTTP status behind this error, when there was a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Unauthorized => Some(401),
            ClientError::BadRequest(_) => Some(400),
            ClientError::RequestFailed { status, .. } => Some(*status),
            ClientError::Transport(e) => e.status().map(|s| s.as_u16()),
            ClientError::Decode(_) => None,
        }
    }
}

/// A `Result` type that uses `ClientError` as the error type.
pub type Result<T> = std::result::Result<T, ClientError>;
