use axum::{extract::State, http::StatusCode, response::Response};

use crate::{
    error::Result,
    handlers::response,
    services::teachers as teacher_service,
    state::AppState,
    validation::extract::ValidPath,
};

/// Lists every teacher.
#[axum::debug_handler]
pub async fn list(State(state): State<AppState>) -> Result<Response> {
    let teachers = teacher_service::list(&state).await?;
    response::json(StatusCode::OK, &teachers)
}

/// Gets one teacher.
#[axum::debug_handler]
pub async fn detail(
    State(state): State<AppState>,
    ValidPath(teacher_id): ValidPath<i64>,
) -> Result<Response> {
    let teacher = teacher_service::detail(&state, teacher_id).await?;
    response::json(StatusCode::OK, &teacher)
}
