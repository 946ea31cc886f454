use crate::client::error::Result;
use crate::front::{
    context::AppContext,
    forms::{self, Form, SubmitOutcome},
    routes::Route,
};
use crate::models::{date_format, teacher::Teacher, yoga_session::SessionPayload};

pub const SESSION_CREATED: &str = "Session created !";
pub const SESSION_UPDATED: &str = "Session updated !";

/// The create and edit pages, which share one form.
pub struct SessionFormComponent {
    ctx: AppContext,
    pub form: Form,
    update_id: Option<i64>,
    teachers: Vec<Teacher>,
}

impl SessionFormComponent {
    pub fn new(ctx: AppContext) -> Self {
        Self {
            ctx,
            form: forms::session_form(),
            update_id: None,
            teachers: Vec::new(),
        }
    }

    /// Prepares the form for `route`.
    ///
    /// Non-admins are sent back to `/sessions`. `/sessions/update/:id` loads
    /// that session into the form; anything else starts empty.
    pub async fn init(&mut self, route: Route) -> Result<Route> {
        if !self.ctx.session.is_admin() {
            return Ok(self.ctx.navigate(Route::Sessions).await);
        }

        self.teachers = self.ctx.teachers.list().await?;
        self.form = forms::session_form();
        self.update_id = None;

        if let Route::SessionUpdate(id) = route {
            let session = self.ctx.sessions.detail(id).await?;
            self.form.set("name", session.name);
            self.form.set("date", session.date.format("%Y-%m-%d").to_string());
            self.form.set("teacher_id", session.teacher_id.to_string());
            self.form.set("description", session.description);
            self.update_id = Some(id);
        }

        Ok(route)
    }

    pub fn on_update(&self) -> bool {
        self.update_id.is_some()
    }

    /// Choices for the teacher select.
    pub fn teachers(&self) -> &[Teacher] {
        &self.teachers
    }

    /// The request body built from the form, if every value converts.
    pub fn payload(&self) -> Option<SessionPayload> {
        Some(SessionPayload {
            name: self.form.value("name").to_string(),
            date: date_format::parse_flexible(self.form.value("date"))?.date_naive(),
            teacher_id: self.form.value("teacher_id").trim().parse().ok()?,
            description: self.form.value("description").to_string(),
        })
    }

    /// Creates or updates the session, then returns to the list.
    pub async fn submit(&mut self) -> Result<SubmitOutcome> {
        if !self.form.is_valid() {
            return Ok(SubmitOutcome::Blocked);
        }
        let Some(payload) = self.payload() else {
            tracing::debug!("Session form holds values that do not convert");
            return Ok(SubmitOutcome::Blocked);
        };

        match self.update_id {
            Some(id) => {
                self.ctx.sessions.update(id, &payload).await?;
                self.ctx.notify(SESSION_UPDATED).await;
            }
            None => {
                self.ctx.sessions.create(&payload).await?;
                self.ctx.notify(SESSION_CREATED).await;
            }
        }

        self.ctx.navigate(Route::Sessions).await;
        Ok(SubmitOutcome::Succeeded)
    }
}
