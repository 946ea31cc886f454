use serde::{Deserialize, Serialize};

/// The login response: who is signed in, with which role, and the bearer
/// token to send back on every protected request.
///
/// Held client-side by the session state holder for as long as the user is
/// logged in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionInfo {
    /// The signed bearer token.
    pub token: String,
    /// Always `Bearer`.
    #[serde(rename = "type")]
    pub token_type: String,
    /// The id of the logged-in user.
    pub id: i64,
    /// The login email.
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    /// Whether the user may manage sessions.
    pub admin: bool,
}

/// JWT claims carried by the bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// The user's email.
    pub sub: String,
    /// The user's id.
    pub uid: i64,
    /// Issued at, seconds since the epoch.
    pub iat: i64,
    /// Expiry, seconds since the epoch.
    pub exp: i64,
}

/// The authenticated caller, inserted into request extensions by
/// `require_auth`.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: i64,
    pub email: String,
    pub admin: bool,
}
