use crate::front::{
    context::AppContext,
    forms::{self, Form, SubmitOutcome},
    routes::Route,
};
use crate::validation::auth::RegisterRequest;

pub const REGISTER_ERROR: &str = "An error occurred";

/// The registration page.
pub struct RegisterComponent {
    ctx: AppContext,
    pub form: Form,
    on_error: bool,
}

impl RegisterComponent {
    pub fn new(ctx: AppContext) -> Self {
        Self {
            ctx,
            form: forms::register_form(),
            on_error: false,
        }
    }

    pub fn on_error(&self) -> bool {
        self.on_error
    }

    pub fn error_message(&self) -> Option<&'static str> {
        self.on_error.then_some(REGISTER_ERROR)
    }

    /// Creates the account and moves to `/login`; on failure stays here.
    pub async fn submit(&mut self) -> SubmitOutcome {
        if !self.form.is_valid() {
            return SubmitOutcome::Blocked;
        }

        let request = RegisterRequest {
            email: self.form.value("email").to_string(),
            first_name: self.form.value("firstName").to_string(),
            last_name: self.form.value("lastName").to_string(),
            password: self.form.value("password").to_string(),
        };

        match self.ctx.auth.register(&request).await {
            Ok(()) => {
                self.on_error = false;
                self.ctx.navigate(Route::Login).await;
                SubmitOutcome::Succeeded
            }
            Err(e) => {
                tracing::warn!("❌ Registration failed: {}", e);
                self.on_error = true;
                SubmitOutcome::Failed
            }
        }
    }
}
