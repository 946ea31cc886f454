use crate::front::{
    context::AppContext,
    forms::{self, Form, SubmitOutcome},
    routes::Route,
};
use crate::validation::auth::LoginRequest;

/// Shown under the form when the credentials are rejected.
pub const LOGIN_ERROR: &str = "An error occurred";

/// The login page.
pub struct LoginComponent {
    ctx: AppContext,
    pub form: Form,
    on_error: bool,
}

impl LoginComponent {
    pub fn new(ctx: AppContext) -> Self {
        Self {
            ctx,
            form: forms::login_form(),
            on_error: false,
        }
    }

    pub fn on_error(&self) -> bool {
        self.on_error
    }

    pub fn error_message(&self) -> Option<&'static str> {
        self.on_error.then_some(LOGIN_ERROR)
    }

    /// Logs in and moves to `/sessions`. Failures leave the user logged out on
    /// this page with the error shown.
    pub async fn submit(&mut self) -> SubmitOutcome {
        if !self.form.is_valid() {
            return SubmitOutcome::Blocked;
        }

        let request = LoginRequest {
            email: self.form.value("email").to_string(),
            password: self.form.value("password").to_string(),
        };

        match self.ctx.auth.login(&request).await {
            Ok(info) => {
                self.on_error = false;
                self.ctx.session.log_in(info);
                self.ctx.navigate(Route::Sessions).await;
                SubmitOutcome::Succeeded
            }
            Err(e) => {
                tracing::warn!("❌ Login failed: {}", e);
                self.on_error = true;
                SubmitOutcome::Failed
            }
        }
    }
}
