use crate::client::error::{ClientError, Result};
use crate::front::{
    context::AppContext,
    routes::Route,
    view,
    visibility::{self, MeActions},
};
use crate::models::user::User;

pub const ACCOUNT_DELETED: &str = "Your account has been deleted !";
pub const ADMIN_BADGE: &str = "You are admin";

/// What the account page prints.
#[derive(Debug, Clone, PartialEq)]
pub struct MeView {
    pub name: String,
    pub email: String,
    pub admin_badge: Option<&'static str>,
    pub created_at: String,
    pub updated_at: String,
}

/// The `/me` page.
pub struct MeComponent {
    ctx: AppContext,
    user: Option<User>,
}

impl MeComponent {
    pub fn new(ctx: AppContext) -> Self {
        Self { ctx, user: None }
    }

    fn user_id(&self) -> Result<i64> {
        self.ctx.session.user_id().ok_or(ClientError::Unauthorized)
    }

    /// Fetches the logged-in user's profile.
    pub async fn load(&mut self) -> Result<()> {
        let id = self.user_id()?;
        self.user = Some(self.ctx.users.get_by_id(id).await?);
        Ok(())
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn actions(&self) -> MeActions {
        let admin = self.user.as_ref().map_or(self.ctx.session.is_admin(), |u| u.admin);
        visibility::me_actions(admin)
    }

    pub fn view(&self) -> Option<MeView> {
        let user = self.user.as_ref()?;
        Some(MeView {
            name: view::user_name(user),
            email: user.email.clone(),
            admin_badge: self.actions().admin_badge.then_some(ADMIN_BADGE),
            created_at: view::long_date(&user.created_at),
            updated_at: view::long_date(&user.updated_at),
        })
    }

    /// Deletes the account, logs out and leaves the page.
    pub async fn delete(&mut self) -> Result<Route> {
        let id = self.user_id()?;
        self.ctx.users.delete(id).await?;
        self.ctx.notify(ACCOUNT_DELETED).await;
        self.ctx.session.log_out();
        self.user = None;
        Ok(self.ctx.navigate(Route::Root).await)
    }

    pub async fn back(&self) -> Route {
        self.ctx.back().await
    }
}
