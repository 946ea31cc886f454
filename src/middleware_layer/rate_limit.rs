use axum::{
    body::Body,
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use sonic_rs::JsonValueTrait;
use std::{
    collections::HashMap,
    sync::Arc,
    time::{Duration, Instant},
};
use tokio::sync::Mutex;

use crate::{error::AppError, state::AppState};

/// Failed logins allowed per email before it is locked out.
pub const MAX_LOGIN_FAILURES: u32 = 5;
/// How long a lockout lasts, counted from the last failure.
pub const LOCKOUT_WINDOW: Duration = Duration::from_secs(15 * 60);
/// Login bodies larger than this are not inspected.
const MAX_LOGIN_BODY_BYTES: usize = 16 * 1024;

#[derive(Debug, Clone, Copy)]
struct Failures {
    count: u32,
    last: Instant,
}

/// Counts failed logins per email, in process.
///
/// Entries older than the lockout window are dropped whenever a failure is
/// recorded, so the map only holds emails that failed recently.
#[derive(Clone)]
pub struct LoginAttempts {
    failures: Arc<Mutex<HashMap<String, Failures>>>,
    window: Duration,
}

impl Default for LoginAttempts {
    fn default() -> Self {
        Self::with_window(LOCKOUT_WINDOW)
    }
}

impl LoginAttempts {
    /// Creates an empty tracker using [`LOCKOUT_WINDOW`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty tracker whose lockouts last `window`.
    pub fn with_window(window: Duration) -> Self {
        Self {
            failures: Arc::default(),
            window,
        }
    }

    /// The time left on a lockout for `email`, if any.
    pub async fn lockout_remaining(&self, email: &str) -> Option<Duration> {
        let mut failures = self.failures.lock().await;
        let entry = *failures.get(email)?;
        let elapsed = entry.last.elapsed();
        if elapsed >= self.window {
            failures.remove(email);
            return None;
        }
        (entry.count >= MAX_LOGIN_FAILURES).then(|| self.window - elapsed)
    }

    /// Records one failed attempt for `email`.
    pub async fn record_failure(&self, email: &str) {
        let mut failures = self.failures.lock().await;
        let window = self.window;
        failures.retain(|_, entry| entry.last.elapsed() < window);

        let entry = failures.entry(email.to_string()).or_insert(Failures {
            count: 0,
            last: Instant::now(),
        });
        entry.count += 1;
        entry.last = Instant::now();
    }

    /// Forgets the failures recorded for `email`.
    pub async fn reset(&self, email: &str) {
        self.failures.lock().await.remove(email);
    }

    /// Number of emails currently tracked.
    pub async fn tracked(&self) -> usize {
        self.failures.lock().await.len()
    }
}

fn extract_email_from_body(body_bytes: &[u8]) -> Option<String> {
    let json = sonic_rs::from_slice::<sonic_rs::Value>(body_bytes).ok()?;
    json.get("email")
        .and_then(|v| v.as_str())
        .map(|s| s.trim().to_lowercase())
}

/// A middleware that locks an email out after repeated failed logins.
///
/// A `401` from the login handler counts as a failure; a success clears the
/// count.
pub async fn rate_limit_login(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let (parts, body) = req.into_parts();
    let body_bytes = match axum::body::to_bytes(body, MAX_LOGIN_BODY_BYTES).await {
        Ok(bytes) => bytes,
        Err(_) => {
            return AppError::Validation("Login request too large".to_string()).into_response();
        }
    };

    let Some(email) = extract_email_from_body(&body_bytes) else {
        let new_req = Request::from_parts(parts, Body::from(body_bytes));
        return next.run(new_req).await;
    };

    if let Some(remaining) = state.login_attempts.lockout_remaining(&email).await {
        return AppError::RateLimitExceeded(format!(
            "Too many failed login attempts. Try again in {} minutes",
            remaining.as_secs().div_ceil(60)
        ))
        .into_response();
    }

    let new_req = Request::from_parts(parts, Body::from(body_bytes));
    let response = next.run(new_req).await;

    if response.status() == http::StatusCode::UNAUTHORIZED {
        state.login_attempts.record_failure(&email).await;
    } else if response.status().is_success() {
        state.login_attempts.reset(&email).await;
    }

    response
}
