use crate::client::error::Result;
use crate::front::{
    context::AppContext,
    routes::Route,
    view,
    visibility::{self, ListActions},
};
use crate::models::yoga_session::ClassSession;

/// One card on the list page.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionCard {
    pub id: i64,
    pub name: String,
    pub date: String,
    pub description: String,
}

/// The `/sessions` page.
pub struct ListComponent {
    ctx: AppContext,
    sessions: Vec<ClassSession>,
}

impl ListComponent {
    pub fn new(ctx: AppContext) -> Self {
        Self {
            ctx,
            sessions: Vec::new(),
        }
    }

    pub async fn load(&mut self) -> Result<()> {
        self.sessions = self.ctx.sessions.list().await?;
        Ok(())
    }

    pub fn sessions(&self) -> &[ClassSession] {
        &self.sessions
    }

    pub fn cards(&self) -> Vec<SessionCard> {
        self.sessions
            .iter()
            .map(|session| SessionCard {
                id: session.id,
                name: session.name.clone(),
                date: format!("Session on {}", view::long_date(&session.date)),
                description: session.description.clone(),
            })
            .collect()
    }

    pub fn actions(&self) -> ListActions {
        visibility::list_actions(self.ctx.session.is_admin())
    }

    pub async fn open_create(&self) -> Route {
        self.ctx.navigate(Route::SessionCreate).await
    }

    pub async fn open_detail(&self, id: i64) -> Route {
        self.ctx.navigate(Route::SessionDetail(id)).await
    }

    pub async fn open_edit(&self, id: i64) -> Route {
        self.ctx.navigate(Route::SessionUpdate(id)).await
    }
}
