use std::collections::BTreeSet;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A scheduled yoga class. Not to be confused with the login session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassSession {
    pub id: i64,
    pub name: String,
    pub description: String,
    #[serde(deserialize_with = "crate::models::date_format::deserialize")]
    pub date: DateTime<Utc>,
    #[serde(rename = "teacher_id")]
    pub teacher_id: i64,
    /// Ids of participating users. A set: order carries no meaning.
    #[serde(default)]
    pub users: BTreeSet<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ClassSession {
    /// Whether `user_id` is among the participants.
    pub fn has_participant(&self, user_id: i64) -> bool {
        self.users.contains(&user_id)
    }
}

/// Validated fields for creating or replacing a session.
#[derive(Clone, Debug)]
pub struct SessionFields {
    pub name: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub teacher_id: i64,
}

/// Body of `POST /api/session` and `PUT /api/session/{id}` as the client sends it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionPayload {
    pub name: String,
    /// Serialized as `YYYY-MM-DD`.
    pub date: NaiveDate,
    pub teacher_id: i64,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_serializes_with_wire_field_names() {
        let payload = SessionPayload {
            name: "Advanced Yoga".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 3, 15).unwrap(),
            teacher_id: 1,
            description: "Deep stretches".to_string(),
        };
        let json = sonic_rs::to_string(&payload).unwrap();
        assert_eq!(
            json,
            r#"{"name":"Advanced Yoga","date":"2026-03-15","teacher_id":1,"description":"Deep stretches"}"#
        );
    }

    #[test]
    fn session_decodes_from_api_shape() {
        let json = r#"{
            "id": 1,
            "name": "Yoga session",
            "description": "A relaxing yoga session",
            "date": "2026-02-15T00:00:00.000Z",
            "teacher_id": 1,
            "users": [3, 1, 2, 2],
            "createdAt": "2026-01-01T00:00:00.000Z",
            "updatedAt": "2026-01-20T00:00:00.000Z"
        }"#;
        let session: ClassSession = sonic_rs::from_str(json).unwrap();
        assert_eq!(session.users.len(), 3);
        assert!(session.has_participant(2));
        assert!(!session.has_participant(5));
    }
}
