use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored account, including its password hash.
#[derive(Clone, Debug)]
pub struct UserRecord {
    /// The unique identifier for the user.
    pub id: i64,
    /// The login email, unique across accounts.
    pub email: String,
    /// The user's first name.
    pub first_name: String,
    /// The user's last name.
    pub last_name: String,
    /// The Argon2 hash of the user's password.
    pub password: String,
    /// Whether the user may manage sessions.
    pub admin: bool,
    /// The timestamp when the user was created.
    pub created_at: DateTime<Utc>,
    /// The timestamp when the user was last updated.
    pub updated_at: DateTime<Utc>,
}

/// The public view of an account, as served by `GET /api/user/{id}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub admin: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&UserRecord> for User {
    fn from(record: &UserRecord) -> Self {
        Self {
            id: record.id,
            email: record.email.clone(),
            first_name: record.first_name.clone(),
            last_name: record.last_name.clone(),
            admin: record.admin,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}
