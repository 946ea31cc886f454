use crate::{
    error::{AppError, Result},
    models::teacher::Teacher,
    repositories::teacher as teacher_repo,
    state::AppState,
};

/// Lists every teacher.
pub async fn list(state: &AppState) -> Result<Vec<Teacher>> {
    teacher_repo::list(&state.store).await
}

/// Gets a teacher by id, or `NotFound`.
pub async fn detail(state: &AppState, teacher_id: i64) -> Result<Teacher> {
    teacher_repo::find_by_id(&state.store, teacher_id)
        .await?
        .ok_or(AppError::NotFound)
}

/// Ensures a teacher named `first_name last_name` exists.
pub async fn ensure_teacher(state: &AppState, first_name: &str, last_name: &str) -> Result<Teacher> {
    let existing = teacher_repo::list(&state.store)
        .await?
        .into_iter()
        .find(|t| t.first_name == first_name && t.last_name == last_name);

    match existing {
        Some(teacher) => Ok(teacher),
        None => {
            let teacher = teacher_repo::create(&state.store, first_name, last_name).await?;
            tracing::info!("✅ Teacher {} {} created with ID: {}", first_name, last_name, teacher.id);
            Ok(teacher)
        }
    }
}
