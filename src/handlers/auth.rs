use axum::{
    extract::State,
    http::StatusCode,
    response::Response,
};

use crate::{
    error::Result,
    handlers::response,
    services::auth as auth_service,
    state::AppState,
    validation::{
        auth::{LoginRequest, RegisterRequest},
        extract::ValidJson,
    },
};

/// Handles user registration.
#[axum::debug_handler]
pub async fn register(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<RegisterRequest>,
) -> Result<Response> {
    tracing::info!("📝 Register attempt - Payload: {:?}", payload);

    let user = auth_service::register(&state.store, &state.config, &payload).await?;
    tracing::info!("✅ User registered: {}", user.id);

    response::message(StatusCode::OK, "User registered successfully!")
}

/// Handles user login.
#[axum::debug_handler]
pub async fn login(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<LoginRequest>,
) -> Result<Response> {
    tracing::info!("🔐 Login attempt - Payload: {:?}", payload);

    let session = auth_service::login(&state.store, &state.config, &payload).await?;
    tracing::info!("✅ User logged in: {}", session.id);

    response::json(StatusCode::OK, &session)
}
