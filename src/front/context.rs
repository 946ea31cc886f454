use std::sync::Arc;

use tokio::sync::Mutex;

use crate::client::{
    api::ApiClient, auth::AuthClient, sessions::SessionApi, teachers::TeacherApi, users::UserApi,
};
use crate::front::{
    navigation::{Navigator, Snackbar, SnackbarMessage},
    routes::{self, Route},
    session_state::SessionState,
};

/// Everything a page needs, handed to each component explicitly.
#[derive(Clone)]
pub struct AppContext {
    pub session: SessionState,
    pub auth: AuthClient,
    pub sessions: SessionApi,
    pub teachers: TeacherApi,
    pub users: UserApi,
    navigator: Arc<Mutex<Navigator>>,
    snackbar: Arc<Mutex<Snackbar>>,
}

impl AppContext {
    /// A logged-out context talking to the API at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let session = SessionState::new();
        let api = ApiClient::new(base_url, session.clone());
        Self {
            session,
            auth: AuthClient::new(api.clone()),
            sessions: SessionApi::new(api.clone()),
            teachers: TeacherApi::new(api.clone()),
            users: UserApi::new(api),
            navigator: Arc::new(Mutex::new(Navigator::new())),
            snackbar: Arc::new(Mutex::new(Snackbar::new())),
        }
    }

    /// Navigates to `route` through the guards. Returns where it landed.
    pub async fn navigate(&self, route: Route) -> Route {
        let landed = routes::resolve(route, self.session.is_logged());
        if landed != route {
            tracing::debug!("🚧 {} redirected to {}", route, landed);
        }
        self.navigator.lock().await.push(landed);
        landed
    }

    /// Navigates to a raw path such as `/sessions/detail/1`.
    pub async fn navigate_path(&self, path: &str) -> Route {
        self.navigate(Route::parse(path)).await
    }

    pub async fn current_route(&self) -> Route {
        self.navigator.lock().await.current()
    }

    /// Goes back one page.
    pub async fn back(&self) -> Route {
        self.navigator.lock().await.back()
    }

    pub async fn notify(&self, message: &str) {
        self.snackbar.lock().await.open(message);
    }

    pub async fn last_notification(&self) -> Option<SnackbarMessage> {
        self.snackbar.lock().await.last().cloned()
    }
}
