use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// The application's error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// A database error.
    #[error("Database error: {0}")]
    Database(#[from] tokio_postgres::Error),

    /// A connection pool error.
    #[error("Pool error: {0}")]
    Pool(#[from] deadpool_postgres::PoolError),

    /// The pool could not be built from the configuration.
    #[error("Pool creation error: {0}")]
    CreatePool(#[from] deadpool_postgres::CreatePoolError),

    /// A row was missing an expected column.
    #[error("Missing data: {0}")]
    MissingData(String),

    /// Bad credentials or an unusable bearer token.
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// No authenticated caller, or the caller may not touch this account.
    #[error("Unauthorized")]
    Unauthorized,

    /// The caller is authenticated but lacks the role for this action.
    #[error("Forbidden")]
    Forbidden,

    /// A resource not found error.
    #[error("Resource not found")]
    NotFound,

    /// A validation error.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A request that is well-formed but conflicts with current state.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// A password hashing error.
    #[error("Password hashing error: {0}")]
    PasswordHash(String),

    /// A bearer token that failed to decode or verify.
    #[error("Token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    /// A token that could not be signed.
    #[error("Token encoding error: {0}")]
    TokenEncoding(jsonwebtoken::errors::Error),

    /// An internal server error.
    #[error("Internal server error: {0}")]
    Internal(String),

    /// A rate limit exceeded error.
    #[error("Rate limit exceeded: {0}")]
    RateLimitExceeded(String),
}

/// A `Result` type that uses `AppError` as the error type.
pub type Result<T> = std::result::Result<T, AppError>;

impl AppError {
    /// Registration with an email that already has an account.
    pub fn email_taken() -> Self {
        AppError::BadRequest("Error: Email is already taken!".to_string())
    }
}

impl From<garde::Report> for AppError {
    fn from(report: garde::Report) -> Self {
        AppError::Validation(report.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Database(ref e) => {
                tracing::error!("Database error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Database error".to_string())
            }

            AppError::Pool(ref e) => {
                tracing::error!("Pool error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Database error".to_string())
            }

            AppError::CreatePool(ref e) => {
                tracing::error!("Pool creation error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Database error".to_string())
            }

            AppError::MissingData(ref column) => {
                tracing::error!("Row is missing column: {}", column);
                (StatusCode::INTERNAL_SERVER_ERROR, "Database error".to_string())
            }

            AppError::Authentication(ref msg) => {
                tracing::warn!("Authentication failed: {}", msg);
                (StatusCode::UNAUTHORIZED, msg.clone())
            }

            AppError::Unauthorized => {
                tracing::warn!("Unauthorized request");
                (StatusCode::UNAUTHORIZED, "Unauthorized".to_string())
            }

            AppError::Forbidden => {
                tracing::warn!("Forbidden request");
                (StatusCode::FORBIDDEN, "Forbidden".to_string())
            }

            AppError::NotFound => {
                tracing::debug!("Resource not found");
                (StatusCode::NOT_FOUND, "Resource not found".to_string())
            }

            AppError::Validation(ref msg) => {
                tracing::debug!("Validation error: {}", msg);
                (StatusCode::BAD_REQUEST, msg.clone())
            }

            AppError::BadRequest(ref msg) => {
                tracing::debug!("Bad request: {}", msg);
                (StatusCode::BAD_REQUEST, msg.clone())
            }

            AppError::PasswordHash(ref msg) => {
                tracing::error!("Password hashing error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
            }

            AppError::Token(ref e) => {
                tracing::warn!("Rejected bearer token: {}", e);
                (StatusCode::UNAUTHORIZED, "Unauthorized".to_string())
            }

            AppError::TokenEncoding(ref e) => {
                tracing::error!("Token encoding error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
            }

            AppError::Internal(ref msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
            }

            AppError::RateLimitExceeded(ref msg) => {
                tracing::warn!("Rate limit exceeded: {}", msg);
                (StatusCode::TOO_MANY_REQUESTS, msg.clone())
            }
        };

        let body = sonic_rs::to_string(&sonic_rs::json!({
            "message": message
        }))
        .unwrap_or_else(|_| r#"{"message":"Internal server error"}"#.to_string());

        (status, [(http::header::CONTENT_TYPE, "application/json")], body).into_response()
    }
}
