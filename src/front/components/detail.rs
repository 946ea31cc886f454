use crate::client::error::{ClientError, Result};
use crate::front::{
    context::AppContext,
    routes::Route,
    view,
    visibility::{self, DetailActions},
};
use crate::models::{teacher::Teacher, yoga_session::ClassSession};

pub const SESSION_DELETED: &str = "Session deleted !";

/// What the detail page prints.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    pub title: String,
    pub teacher: Option<String>,
    pub attendees: String,
    pub date: String,
    pub description: String,
    pub created_at: String,
    pub updated_at: String,
}

/// The `/sessions/detail/:id` page.
pub struct DetailComponent {
    ctx: AppContext,
    session_id: i64,
    session: Option<ClassSession>,
    teacher: Option<Teacher>,
}

impl DetailComponent {
    pub fn new(ctx: AppContext, session_id: i64) -> Self {
        Self {
            ctx,
            session_id,
            session: None,
            teacher: None,
        }
    }

    pub fn session_id(&self) -> i64 {
        self.session_id
    }

    fn user_id(&self) -> Result<i64> {
        self.ctx.session.user_id().ok_or(ClientError::Unauthorized)
    }

    /// Fetches the session, then its teacher.
    pub async fn load(&mut self) -> Result<()> {
        let session = self.ctx.sessions.detail(self.session_id).await?;
        self.teacher = Some(self.ctx.teachers.detail(session.teacher_id).await?);
        self.session = Some(session);
        Ok(())
    }

    pub fn session(&self) -> Option<&ClassSession> {
        self.session.as_ref()
    }

    pub fn teacher(&self) -> Option<&Teacher> {
        self.teacher.as_ref()
    }

    pub fn is_admin(&self) -> bool {
        self.ctx.session.is_admin()
    }

    pub fn is_participate(&self) -> bool {
        match (&self.session, self.ctx.session.user_id()) {
            (Some(session), Some(user_id)) => session.has_participant(user_id),
            _ => false,
        }
    }

    /// `None` until the session is loaded.
    pub fn actions(&self) -> Option<DetailActions> {
        let session = self.session.as_ref()?;
        let user_id = self.ctx.session.user_id()?;
        Some(visibility::detail_actions(self.is_admin(), user_id, session))
    }

    pub fn view(&self) -> Option<DetailView> {
        let session = self.session.as_ref()?;
        Some(DetailView {
            title: view::title_case(&session.name),
            teacher: self.teacher.as_ref().map(view::teacher_name),
            attendees: view::attendees(session.users.len()),
            date: view::long_date(&session.date),
            description: session.description.clone(),
            created_at: view::long_date(&session.created_at),
            updated_at: view::long_date(&session.updated_at),
        })
    }

    /// Deletes the session, then returns to the list.
    pub async fn delete(&mut self) -> Result<Route> {
        self.ctx.sessions.delete(self.session_id).await?;
        self.ctx.notify(SESSION_DELETED).await;
        Ok(self.ctx.navigate(Route::Sessions).await)
    }

    /// Joins the session, then re-fetches it.
    pub async fn participate(&mut self) -> Result<()> {
        let user_id = self.user_id()?;
        self.ctx.sessions.participate(self.session_id, user_id).await?;
        self.load().await
    }

    /// Leaves the session, then re-fetches it.
    pub async fn un_participate(&mut self) -> Result<()> {
        let user_id = self.user_id()?;
        self.ctx.sessions.un_participate(self.session_id, user_id).await?;
        self.load().await
    }

    pub async fn back(&self) -> Route {
        self.ctx.back().await
    }
}
