use axum::{
    extract::State,
    http::StatusCode,
    response::Response,
    Extension,
};

use crate::{
    error::Result,
    handlers::response,
    models::session::AuthUser,
    services::users as user_service,
    state::AppState,
    validation::extract::ValidPath,
};

/// Gets a user's public profile.
#[axum::debug_handler]
pub async fn detail(
    State(state): State<AppState>,
    ValidPath(user_id): ValidPath<i64>,
) -> Result<Response> {
    let user = user_service::detail(&state, user_id).await?;
    response::json(StatusCode::OK, &user)
}

/// Deletes the caller's own account.
#[axum::debug_handler]
pub async fn delete(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthUser>,
    ValidPath(user_id): ValidPath<i64>,
) -> Result<Response> {
    tracing::info!("👋 Account deletion requested for user: {}", user_id);
    user_service::delete(&state, &caller, user_id).await?;
    response::message(StatusCode::OK, "User deleted successfully")
}
