use std::sync::Arc;

use tokio::sync::watch;

use crate::models::session::SessionInfo;

/// Holds who is logged in, in memory only.
///
/// Cloning yields another handle to the same state. The login flag is derived
/// from the stored information, so the two can never disagree. `is_logged`
/// subscribers always see the latest value first, then every later change.
#[derive(Clone)]
pub struct SessionState {
    info: Arc<watch::Sender<Option<SessionInfo>>>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionState {
    /// A logged-out state.
    pub fn new() -> Self {
        let (info, _) = watch::channel(None);
        Self { info: Arc::new(info) }
    }

    /// Stores `info` and announces the login.
    pub fn log_in(&self, info: SessionInfo) {
        tracing::info!("🔐 Logged in as user {}", info.id);
        self.info.send_replace(Some(info));
    }

    /// Forgets the current login and announces the logout.
    pub fn log_out(&self) {
        let was_logged = self.info.send_if_modified(|info| info.take().is_some());
        if was_logged {
            tracing::info!("👋 Logged out");
        }
    }

    /// Whether someone is logged in right now.
    pub fn is_logged(&self) -> bool {
        self.info.borrow().is_some()
    }

    /// A receiver that starts at the current login state.
    pub fn subscribe(&self) -> LoggedReceiver {
        let mut inner = self.info.subscribe();
        inner.mark_changed();
        LoggedReceiver { inner }
    }

    /// A copy of the current session information.
    pub fn information(&self) -> Option<SessionInfo> {
        self.info.borrow().clone()
    }

    /// The bearer token, while logged in.
    pub fn token(&self) -> Option<String> {
        self.info.borrow().as_ref().map(|info| info.token.clone())
    }

    /// The logged-in user's id.
    pub fn user_id(&self) -> Option<i64> {
        self.info.borrow().as_ref().map(|info| info.id)
    }

    /// Whether the logged-in user is an administrator. `false` when logged out.
    pub fn is_admin(&self) -> bool {
        self.info.borrow().as_ref().is_some_and(|info| info.admin)
    }
}

/// Login-state view over the session channel.
pub struct LoggedReceiver {
    inner: watch::Receiver<Option<SessionInfo>>,
}

impl LoggedReceiver {
    /// Waits for the next login or logout.
    pub async fn changed(&mut self) -> Result<(), watch::error::RecvError> {
        self.inner.changed().await
    }

    /// The current login state.
    pub fn borrow(&self) -> bool {
        self.inner.borrow().is_some()
    }

    /// The current login state, marking it seen.
    pub fn borrow_and_update(&mut self) -> bool {
        self.inner.borrow_and_update().is_some()
    }
}

#[cfg(test)]
pub(crate) fn sample_info(id: i64, admin: bool) -> SessionInfo {
    SessionInfo {
        token: format!("token-{id}"),
        token_type: "Bearer".to_string(),
        id,
        username: format!("user{id}@test.com"),
        first_name: "Test".to_string(),
        last_name: "User".to_string(),
        admin,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_and_logout_keep_info_and_flag_in_step() {
        let state = SessionState::new();
        assert!(!state.is_logged());
        assert!(state.information().is_none());

        state.log_in(sample_info(2, false));
        assert!(state.is_logged());
        assert_eq!(state.user_id(), Some(2));
        assert_eq!(state.token().as_deref(), Some("token-2"));

        state.log_out();
        assert!(!state.is_logged());
        assert!(state.information().is_none());
        assert!(state.token().is_none());
    }

    #[tokio::test]
    async fn subscribers_see_current_value_then_changes() {
        let state = SessionState::new();
        state.log_in(sample_info(1, true));

        let mut late = state.subscribe();
        late.changed().await.unwrap();
        assert!(late.borrow_and_update());

        state.log_out();
        late.changed().await.unwrap();
        assert!(!late.borrow_and_update());
    }

    #[tokio::test]
    async fn login_flag_never_runs_ahead_of_information() {
        let state = SessionState::new();
        let mut logged = state.subscribe();
        logged.borrow_and_update();

        state.log_in(sample_info(4, false));
        logged.changed().await.unwrap();
        assert!(logged.borrow_and_update());
        assert_eq!(state.information().map(|info| info.id), Some(4));

        state.log_out();
        logged.changed().await.unwrap();
        assert!(!logged.borrow_and_update());
        assert!(state.information().is_none());
    }

    #[test]
    fn logging_out_twice_is_harmless() {
        let state = SessionState::new();
        state.log_out();
        state.log_in(sample_info(5, false));
        state.log_out();
        state.log_out();
        assert!(!state.is_logged());
    }

    #[test]
    fn clones_share_state() {
        let state = SessionState::new();
        let other = state.clone();
        other.log_in(sample_info(3, false));
        assert!(state.is_logged());
        assert!(!state.is_admin());
    }
}
