use std::fmt;

/// The pages of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Root,
    Login,
    Register,
    Sessions,
    SessionCreate,
    SessionUpdate(i64),
    SessionDetail(i64),
    Me,
    NotFound,
}

impl Route {
    /// Parses a path such as `/sessions/detail/3`. Unknown paths map to `NotFound`.
    pub fn parse(path: &str) -> Route {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Route::Root,
            ["login"] => Route::Login,
            ["register"] => Route::Register,
            ["sessions"] => Route::Sessions,
            ["sessions", "create"] => Route::SessionCreate,
            ["sessions", "update", id] => id.parse().map_or(Route::NotFound, Route::SessionUpdate),
            ["sessions", "detail", id] => id.parse().map_or(Route::NotFound, Route::SessionDetail),
            ["me"] => Route::Me,
            _ => Route::NotFound,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Root => "/".to_string(),
            Route::Login => "/login".to_string(),
            Route::Register => "/register".to_string(),
            Route::Sessions => "/sessions".to_string(),
            Route::SessionCreate => "/sessions/create".to_string(),
            Route::SessionUpdate(id) => format!("/sessions/update/{id}"),
            Route::SessionDetail(id) => format!("/sessions/detail/{id}"),
            Route::Me => "/me".to_string(),
            Route::NotFound => "/404".to_string(),
        }
    }

    /// Pages behind the auth guard.
    pub fn requires_login(&self) -> bool {
        matches!(
            self,
            Route::Sessions
                | Route::SessionCreate
                | Route::SessionUpdate(_)
                | Route::SessionDetail(_)
                | Route::Me
        )
    }

    /// Pages only offered to visitors who are not logged in.
    pub fn guest_only(&self) -> bool {
        matches!(self, Route::Login | Route::Register)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Redirects protected pages to `/login` while logged out.
pub struct AuthGuard;

impl AuthGuard {
    pub fn check(route: Route, logged: bool) -> Option<Route> {
        (route.requires_login() && !logged).then_some(Route::Login)
    }
}

/// Redirects `/login` and `/register` to `/sessions` while logged in.
pub struct UnauthGuard;

impl UnauthGuard {
    pub fn check(route: Route, logged: bool) -> Option<Route> {
        (route.guest_only() && logged).then_some(Route::Sessions)
    }
}

/// Where a navigation to `route` actually lands.
pub fn resolve(route: Route, logged: bool) -> Route {
    let route = match route {
        Route::Root if logged => Route::Sessions,
        Route::Root => Route::Login,
        other => other,
    };
    AuthGuard::check(route, logged)
        .or_else(|| UnauthGuard::check(route, logged))
        .unwrap_or(route)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_page() {
        assert_eq!(Route::parse("/"), Route::Root);
        assert_eq!(Route::parse(""), Route::Root);
        assert_eq!(Route::parse("/login"), Route::Login);
        assert_eq!(Route::parse("/sessions/"), Route::Sessions);
        assert_eq!(Route::parse("/sessions/create"), Route::SessionCreate);
        assert_eq!(Route::parse("/sessions/update/7"), Route::SessionUpdate(7));
        assert_eq!(Route::parse("/sessions/detail/3?tab=1"), Route::SessionDetail(3));
        assert_eq!(Route::parse("/sessions/detail/abc"), Route::NotFound);
        assert_eq!(Route::parse("/nowhere"), Route::NotFound);
    }

    #[test]
    fn path_round_trips() {
        for route in [Route::Me, Route::SessionUpdate(4), Route::SessionDetail(9), Route::Register] {
            assert_eq!(Route::parse(&route.path()), route);
        }
    }

    #[test]
    fn protected_pages_need_a_login() {
        for route in [Route::Sessions, Route::Me, Route::SessionCreate, Route::SessionDetail(1)] {
            assert_eq!(resolve(route, false), Route::Login);
            assert_eq!(resolve(route, true), route);
        }
    }

    #[test]
    fn guests_pages_bounce_logged_users() {
        assert_eq!(resolve(Route::Login, true), Route::Sessions);
        assert_eq!(resolve(Route::Register, true), Route::Sessions);
        assert_eq!(resolve(Route::Register, false), Route::Register);
    }

    #[test]
    fn root_is_canonicalized() {
        assert_eq!(resolve(Route::Root, true), Route::Sessions);
        assert_eq!(resolve(Route::Root, false), Route::Login);
        assert_eq!(resolve(Route::NotFound, false), Route::NotFound);
    }
}
