use axum::{
    Router,
    routing::{get, post},
    middleware::from_fn_with_state,
};

use anyhow::Context;
use http::{HeaderValue, Method, header};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_governor::governor::GovernorConfigBuilder;
use tower_http::{
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
    cors::CorsLayer,
};
use tracing::Level;

pub mod config;
pub mod error;
pub mod state;
pub mod db;
pub mod seed;

pub mod models {
    pub mod date_format;
    pub mod user;
    pub mod teacher;
    pub mod yoga_session;
    pub mod session;
}

pub mod repositories {
    pub mod user;
    pub mod teacher;
    pub mod yoga_session;
}

pub mod services {
    pub mod auth;
    pub mod yoga_sessions;
    pub mod teachers;
    pub mod users;
}

pub mod handlers {
    pub mod response;
    pub mod auth;
    pub mod yoga_sessions;
    pub mod teachers;
    pub mod users;
}

pub mod middleware_layer {
    pub mod auth;
    pub mod rate_limit;
}

pub mod validation {
    pub mod extract;
    pub mod auth;
    pub mod yoga_session;
}

pub mod client {
    pub mod error;
    pub mod api;
    pub mod auth;
    pub mod sessions;
    pub mod teachers;
    pub mod users;
}

pub mod front {
    pub mod session_state;
    pub mod forms;
    pub mod routes;
    pub mod navigation;
    pub mod visibility;
    pub mod view;
    pub mod context;
    pub mod components {
        pub mod app_shell;
        pub mod login;
        pub mod register;
        pub mod list;
        pub mod detail;
        pub mod session_form;
        pub mod me;
    }
}

pub use config::Config;
pub use state::AppState;

/// Builds the HTTP API.
///
/// Login and register sit behind a per-IP governor; login is additionally
/// locked per email after repeated failures. Everything else requires a
/// bearer token.
pub fn router(state: AppState) -> anyhow::Result<Router> {
    let origins = state
        .config
        .cors_origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .with_context(|| format!("Invalid CORS origin: {origin}"))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
        .max_age(Duration::from_secs(86400));

    let auth_governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_millisecond(250)
            .burst_size(30)
            .use_headers()
            .finish()
            .context("Invalid governor configuration")?,
    );

    let register_routes = Router::new()
        .route("/api/auth/register", post(handlers::auth::register))
        .with_state(state.clone());

    let login_routes = Router::new()
        .route("/api/auth/login", post(handlers::auth::login))
        .route_layer(from_fn_with_state(
            state.clone(),
            middleware_layer::rate_limit::rate_limit_login,
        ))
        .with_state(state.clone());

    let auth_routes = Router::new()
        .merge(register_routes)
        .merge(login_routes)
        .layer(tower_governor::GovernorLayer::new(auth_governor_conf));

    let protected_routes = Router::new()
        .route(
            "/api/session",
            get(handlers::yoga_sessions::list).post(handlers::yoga_sessions::create),
        )
        .route(
            "/api/session/{id}",
            get(handlers::yoga_sessions::detail)
                .put(handlers::yoga_sessions::update)
                .delete(handlers::yoga_sessions::delete),
        )
        .route(
            "/api/session/{id}/participate/{user_id}",
            post(handlers::yoga_sessions::participate).delete(handlers::yoga_sessions::unparticipate),
        )
        .route("/api/teacher", get(handlers::teachers::list))
        .route("/api/teacher/{id}", get(handlers::teachers::detail))
        .route(
            "/api/user/{id}",
            get(handlers::users::detail).delete(handlers::users::delete),
        )
        .route_layer(from_fn_with_state(
            state.clone(),
            middleware_layer::auth::require_auth,
        ))
        .with_state(state.clone());

    let app = Router::new()
        .merge(auth_routes)
        .merge(protected_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(false))
                .on_request(DefaultOnRequest::default().level(Level::DEBUG))
                .on_response(DefaultOnResponse::default().level(Level::DEBUG))
                .on_failure(DefaultOnFailure::default().level(Level::ERROR)),
        )
        .layer(cors);

    Ok(app)
}

/// Serves the API on `listener` until the process stops.
///
/// Peer addresses are exposed to the per-IP governor through connect info.
pub async fn serve(listener: tokio::net::TcpListener, state: AppState) -> anyhow::Result<()> {
    let app = router(state)?;

    tracing::info!("🚀 Server listening on http://{}", listener.local_addr()?);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use http::{Request, StatusCode};
    use tower::ServiceExt;
    use zeroize::Zeroizing;

    fn state(origins: &[&str]) -> AppState {
        let config = Config {
            database_url: None,
            bind_addr: "127.0.0.1:0".parse().unwrap(),
            jwt_secret: Zeroizing::new(vec![1u8; 32]),
            jwt_expiration_hours: 1,
            password_cost: config::PasswordCost { memory_kib: 1024, iterations: 1, parallelism: 1 },
            seed_demo_data: false,
            cors_origins: origins.iter().map(|o| o.to_string()).collect(),
        };
        AppState::with_store(&config, db::Store::memory())
    }

    #[tokio::test]
    async fn protected_routes_reject_anonymous_requests() {
        let app = router(state(&["http://localhost:4200"])).unwrap();
        let response = app
            .oneshot(Request::get("/api/session").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn invalid_cors_origin_is_a_startup_error() {
        assert!(router(state(&["not a header\n"])).is_err());
    }
}
