use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::error::{AppError, Result};

/// Serializes `value` with `sonic_rs` into a JSON response.
pub fn json<T: Serialize>(status: StatusCode, value: &T) -> Result<Response> {
    let body = sonic_rs::to_string(value)
        .map_err(|e| AppError::Internal(format!("Response serialization failed: {}", e)))?;
    Ok((status, [(header::CONTENT_TYPE, "application/json")], body).into_response())
}

/// A `{"message": ...}` response.
pub fn message(status: StatusCode, message: &str) -> Result<Response> {
    json(status, &sonic_rs::json!({ "message": message }))
}
