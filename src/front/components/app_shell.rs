use crate::front::{context::AppContext, routes::Route, session_state::LoggedReceiver};

/// The toolbar around every page.
pub struct AppShell {
    ctx: AppContext,
}

impl AppShell {
    pub fn new(ctx: AppContext) -> Self {
        Self { ctx }
    }

    /// Login state for the toolbar links, current value first.
    pub fn is_logged(&self) -> LoggedReceiver {
        self.ctx.session.subscribe()
    }

    pub async fn logout(&self) -> Route {
        self.ctx.session.log_out();
        self.ctx.navigate(Route::Login).await
    }

    pub async fn back(&self) -> Route {
        self.ctx.back().await
    }
}
