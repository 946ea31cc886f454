use crate::front::routes::Route;

/// Navigation history, newest last.
#[derive(Debug, Default)]
pub struct Navigator {
    history: Vec<Route>,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `route` as the current page.
    pub fn push(&mut self, route: Route) {
        tracing::debug!("🧭 Navigating to {}", route);
        self.history.push(route);
    }

    /// The current page, `Root` before any navigation.
    pub fn current(&self) -> Route {
        self.history.last().copied().unwrap_or(Route::Root)
    }

    /// Returns to the previous page, if there is one.
    pub fn back(&mut self) -> Route {
        if self.history.len() > 1 {
            self.history.pop();
        }
        self.current()
    }

    pub fn history(&self) -> &[Route] {
        &self.history
    }
}

/// How long a snackbar stays on screen, in milliseconds.
pub const SNACKBAR_DURATION_MS: u64 = 3000;

/// A transient notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnackbarMessage {
    pub message: String,
    pub action: String,
    pub duration_ms: u64,
}

/// Notifications shown so far, oldest first.
#[derive(Debug, Default)]
pub struct Snackbar {
    shown: Vec<SnackbarMessage>,
}

impl Snackbar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows `message` with a "Close" action for three seconds.
    pub fn open(&mut self, message: &str) {
        tracing::debug!("💬 Snackbar: {}", message);
        self.shown.push(SnackbarMessage {
            message: message.to_string(),
            action: "Close".to_string(),
            duration_ms: SNACKBAR_DURATION_MS,
        });
    }

    pub fn last(&self) -> Option<&SnackbarMessage> {
        self.shown.last()
    }

    pub fn shown(&self) -> &[SnackbarMessage] {
        &self.shown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn back_pops_history_but_keeps_the_first_page() {
        let mut navigator = Navigator::new();
        assert_eq!(navigator.current(), Route::Root);

        navigator.push(Route::Sessions);
        navigator.push(Route::SessionDetail(1));
        assert_eq!(navigator.back(), Route::Sessions);
        assert_eq!(navigator.back(), Route::Sessions);
    }

    #[test]
    fn snackbar_uses_close_and_three_seconds() {
        let mut snackbar = Snackbar::new();
        snackbar.open("Session created !");
        let last = snackbar.last().unwrap();
        assert_eq!(last.action, "Close");
        assert_eq!(last.duration_ms, 3000);
    }
}
