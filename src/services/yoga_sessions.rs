use crate::{
    error::{AppError, Result},
    models::{
        session::AuthUser,
        yoga_session::{ClassSession, SessionFields},
    },
    repositories::{teacher as teacher_repo, user as user_repo, yoga_session as session_repo},
    state::AppState,
    validation::yoga_session::SessionRequest,
};

fn require_admin(caller: &AuthUser) -> Result<()> {
    if caller.admin {
        Ok(())
    } else {
        tracing::warn!("❌ User {} is not allowed to manage sessions", caller.id);
        Err(AppError::Forbidden)
    }
}

/// Turns a validated request into fields, checking the teacher exists.
async fn checked_fields(state: &AppState, request: SessionRequest) -> Result<SessionFields> {
    let fields = request
        .into_fields()
        .ok_or_else(|| AppError::Validation("date and teacher_id are required".to_string()))?;

    if teacher_repo::find_by_id(&state.store, fields.teacher_id).await?.is_none() {
        return Err(AppError::BadRequest(format!("Teacher {} does not exist", fields.teacher_id)));
    }

    Ok(fields)
}

/// Lists every session.
pub async fn list(state: &AppState) -> Result<Vec<ClassSession>> {
    session_repo::list(&state.store).await
}

/// Gets a session by id.
///
/// # Returns
///
/// A `Result` containing the `ClassSession`, or `NotFound`.
pub async fn detail(state: &AppState, session_id: i64) -> Result<ClassSession> {
    session_repo::find_by_id(&state.store, session_id)
        .await?
        .ok_or(AppError::NotFound)
}

/// Creates a session. Admins only.
///
/// # Arguments
///
/// * `state` - The application state.
/// * `caller` - The authenticated user.
/// * `request` - The validated session fields.
///
/// # Returns
///
/// A `Result` containing the created `ClassSession`.
pub async fn create(state: &AppState, caller: &AuthUser, request: SessionRequest) -> Result<ClassSession> {
    require_admin(caller)?;
    let fields = checked_fields(state, request).await?;
    let session = session_repo::create(&state.store, &fields).await?;
    tracing::info!("✅ Session {} created by user {}", session.id, caller.id);
    Ok(session)
}

/// Replaces a session's fields. Admins only.
pub async fn update(
    state: &AppState,
    caller: &AuthUser,
    session_id: i64,
    request: SessionRequest,
) -> Result<ClassSession> {
    require_admin(caller)?;
    detail(state, session_id).await?;
    let fields = checked_fields(state, request).await?;
    let session = session_repo::update(&state.store, session_id, &fields)
        .await?
        .ok_or(AppError::NotFound)?;
    tracing::info!("✅ Session {} updated by user {}", session.id, caller.id);
    Ok(session)
}

/// Deletes a session. Admins only.
pub async fn delete(state: &AppState, caller: &AuthUser, session_id: i64) -> Result<()> {
    require_admin(caller)?;
    if !session_repo::delete(&state.store, session_id).await? {
        return Err(AppError::NotFound);
    }
    tracing::info!("🗑️ Session {} deleted by user {}", session_id, caller.id);
    Ok(())
}

/// Adds `user_id` to the participants of `session_id`.
///
/// Fails with `NotFound` when the session or the user is missing, `Forbidden`
/// when `user_id` is not the caller, and `BadRequest` when already
/// participating.
pub async fn participate(state: &AppState, caller: &AuthUser, session_id: i64, user_id: i64) -> Result<()> {
    let session = detail(state, session_id).await?;
    if user_repo::find_by_id(&state.store, user_id).await?.is_none() {
        return Err(AppError::NotFound);
    }
    if caller.id != user_id {
        tracing::warn!("❌ User {} tried to enroll user {}", caller.id, user_id);
        return Err(AppError::Forbidden);
    }
    if session.has_participant(user_id) {
        return Err(AppError::BadRequest("Already participating".to_string()));
    }

    session_repo::add_participant(&state.store, session_id, user_id).await?;
    tracing::info!("✅ User {} joined session {}", user_id, session_id);
    Ok(())
}

/// Removes `user_id` from the participants of `session_id`.
///
/// Fails with `NotFound` when the session is missing, `Forbidden` when
/// `user_id` is not the caller, and `BadRequest` when not participating.
pub async fn unparticipate(state: &AppState, caller: &AuthUser, session_id: i64, user_id: i64) -> Result<()> {
    let session = detail(state, session_id).await?;
    if caller.id != user_id {
        tracing::warn!("❌ User {} tried to withdraw user {}", caller.id, user_id);
        return Err(AppError::Forbidden);
    }
    if !session.has_participant(user_id) {
        return Err(AppError::BadRequest("Not participating".to_string()));
    }

    session_repo::remove_participant(&state.store, session_id, user_id).await?;
    tracing::info!("✅ User {} left session {}", user_id, session_id);
    Ok(())
}
