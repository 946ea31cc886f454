use crate::{
    error::Result,
    services::{auth as auth_service, teachers as teacher_service},
    state::AppState,
};

/// The demo administrator created at startup.
pub const DEMO_ADMIN_EMAIL: &str = "yoga@studio.com";
const DEMO_ADMIN_PASSWORD: &str = "test!1234";

/// Teachers every fresh install starts with.
pub const DEMO_TEACHERS: [(&str, &str); 2] = [("Margot", "DELAHAYE"), ("Hélène", "THIERCÉ")];

/// Makes sure the demo administrator and teachers exist.
///
/// Existing rows are left untouched, so this is safe to run on every startup.
///
/// # Arguments
///
/// * `state` - The application state.
///
/// # Returns
///
/// A `Result` containing the id of the demo administrator.
pub async fn ensure_demo_data(state: &AppState) -> Result<i64> {
    for (first_name, last_name) in DEMO_TEACHERS {
        teacher_service::ensure_teacher(state, first_name, last_name).await?;
    }

    let admin = auth_service::ensure_user(
        &state.store,
        &state.config,
        DEMO_ADMIN_EMAIL,
        "Admin",
        "Admin",
        DEMO_ADMIN_PASSWORD,
        true,
    )
    .await?;

    tracing::info!("✅ Demo data ready (admin id: {})", admin.id);
    Ok(admin.id)
}
