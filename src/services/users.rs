use crate::{
    error::{AppError, Result},
    models::{session::AuthUser, user::User},
    repositories::user as user_repo,
    state::AppState,
};

/// Gets the public view of a user.
pub async fn detail(state: &AppState, user_id: i64) -> Result<User> {
    let record = user_repo::find_by_id(&state.store, user_id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(User::from(&record))
}

/// Deletes the caller's own account along with their participations.
///
/// # Returns
///
/// `NotFound` when no such user exists, `Unauthorized` when `user_id` is not
/// the caller.
pub async fn delete(state: &AppState, caller: &AuthUser, user_id: i64) -> Result<()> {
    let record = user_repo::find_by_id(&state.store, user_id)
        .await?
        .ok_or(AppError::NotFound)?;

    if record.email != caller.email {
        tracing::warn!("❌ User {} tried to delete account {}", caller.id, user_id);
        return Err(AppError::Unauthorized);
    }

    user_repo::delete_user(&state.store, user_id).await?;
    tracing::info!("🗑️ Account {} deleted", user_id);
    Ok(())
}
