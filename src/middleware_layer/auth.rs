use axum::{
    body::Body,
    extract::State,
    http::{header, Request},
    middleware::Next,
    response::Response,
};

use crate::{
    error::AppError,
    models::session::AuthUser,
    repositories::user as user_repo,
    services::auth as auth_service,
    state::AppState,
};

/// Extracts the bearer token from the `Authorization` header.
///
/// # Arguments
///
/// * `request` - The incoming request.
///
/// # Returns
///
/// An `Option` containing the token if present.
fn extract_bearer_token(request: &Request<Body>) -> Option<&str> {
    let value = request.headers().get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    let token = token.trim();
    (scheme.eq_ignore_ascii_case(auth_service::TOKEN_TYPE) && !token.is_empty()).then_some(token)
}

/// A middleware that requires a valid bearer token.
///
/// The token's user must still exist; the resulting `AuthUser` is inserted
/// into the request extensions.
///
/// # Arguments
///
/// * `state` - The application state.
/// * `request` - The incoming request.
/// * `next` - The next middleware in the chain.
///
/// # Returns
///
/// A `Response`, or `401` through `AppError`.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    tracing::debug!("🔐 Checking authentication...");

    let token = extract_bearer_token(&request).ok_or_else(|| {
        tracing::warn!("❌ No bearer token found");
        AppError::Unauthorized
    })?;

    let claims = auth_service::decode_token(&state.config, token)?;

    let user = user_repo::find_by_id(&state.store, claims.uid)
        .await?
        .filter(|user| user.email == claims.sub)
        .ok_or_else(|| {
            tracing::warn!("❌ Token for unknown user: {}", claims.uid);
            AppError::Unauthorized
        })?;

    tracing::debug!("✅ User authenticated: {}", user.id);

    request.extensions_mut().insert(AuthUser {
        id: user.id,
        email: user.email,
        admin: user.admin,
    });

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request_with(value: &str) -> Request<Body> {
        Request::builder()
            .header(header::AUTHORIZATION, value)
            .body(Body::empty())
            .unwrap()
    }

    #[test]
    fn reads_bearer_scheme_only() {
        assert_eq!(extract_bearer_token(&request_with("Bearer abc.def.ghi")), Some("abc.def.ghi"));
        assert_eq!(extract_bearer_token(&request_with("bearer abc")), Some("abc"));
        assert_eq!(extract_bearer_token(&request_with("Basic dXNlcg==")), None);
        assert_eq!(extract_bearer_token(&request_with("Bearer ")), None);
        assert_eq!(extract_bearer_token(&Request::new(Body::empty())), None);
    }
}
