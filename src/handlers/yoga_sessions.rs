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
    services::yoga_sessions as session_service,
    state::AppState,
    validation::{
        extract::{ValidJson, ValidPath},
        yoga_session::SessionRequest,
    },
};

/// Lists every session.
#[axum::debug_handler]
pub async fn list(State(state): State<AppState>) -> Result<Response> {
    let sessions = session_service::list(&state).await?;
    response::json(StatusCode::OK, &sessions)
}

/// Gets one session.
#[axum::debug_handler]
pub async fn detail(
    State(state): State<AppState>,
    ValidPath(session_id): ValidPath<i64>,
) -> Result<Response> {
    let session = session_service::detail(&state, session_id).await?;
    response::json(StatusCode::OK, &session)
}

/// Creates a session.
#[axum::debug_handler]
pub async fn create(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthUser>,
    ValidJson(payload): ValidJson<SessionRequest>,
) -> Result<Response> {
    tracing::debug!("📝 Create session - Payload: {:?}", payload);
    let session = session_service::create(&state, &caller, payload).await?;
    response::json(StatusCode::OK, &session)
}

/// Updates a session.
#[axum::debug_handler]
pub async fn update(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthUser>,
    ValidPath(session_id): ValidPath<i64>,
    ValidJson(payload): ValidJson<SessionRequest>,
) -> Result<Response> {
    tracing::debug!("📝 Update session {} - Payload: {:?}", session_id, payload);
    let session = session_service::update(&state, &caller, session_id, payload).await?;
    response::json(StatusCode::OK, &session)
}

/// Deletes a session.
#[axum::debug_handler]
pub async fn delete(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthUser>,
    ValidPath(session_id): ValidPath<i64>,
) -> Result<Response> {
    session_service::delete(&state, &caller, session_id).await?;
    response::message(StatusCode::OK, "Session deleted successfully")
}

/// Adds the caller to a session.
#[axum::debug_handler]
pub async fn participate(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthUser>,
    ValidPath((session_id, user_id)): ValidPath<(i64, i64)>,
) -> Result<Response> {
    session_service::participate(&state, &caller, session_id, user_id).await?;
    response::message(StatusCode::OK, "Participation recorded")
}

/// Removes the caller from a session.
#[axum::debug_handler]
pub async fn unparticipate(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthUser>,
    ValidPath((session_id, user_id)): ValidPath<(i64, i64)>,
) -> Result<Response> {
    session_service::unparticipate(&state, &caller, session_id, user_id).await?;
    response::message(StatusCode::OK, "Participation removed")
}
