use chrono::{DateTime, Utc};
use garde::Validate;
use serde::Deserialize;

use crate::models::yoga_session::SessionFields;

/// The request payload for creating or updating a session.
///
/// Extra fields such as `users` or `createdAt` are ignored: participants only
/// change through the participate endpoints.
#[derive(Deserialize, Validate, Debug, Clone)]
pub struct SessionRequest {
    #[garde(length(chars, min = 1, max = 50))]
    #[serde(default)]
    pub name: String,
    #[garde(required)]
    #[serde(default, deserialize_with = "crate::models::date_format::deserialize_option")]
    pub date: Option<DateTime<Utc>>,
    #[garde(required)]
    #[serde(default)]
    pub teacher_id: Option<i64>,
    #[garde(length(chars, min = 1, max = 2500))]
    #[serde(default)]
    pub description: String,
}

impl SessionRequest {
    /// Converts a validated request into storable fields.
    ///
    /// Returns `None` if a required field is missing, which `validate` rules out.
    pub fn into_fields(self) -> Option<SessionFields> {
        Some(SessionFields {
            name: self.name,
            description: self.description,
            date: self.date?,
            teacher_id: self.teacher_id?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_form_payload() {
        let body = r#"{"name":"Advanced Yoga","date":"2026-03-15","teacher_id":1,"description":"Stretch"}"#;
        let request: SessionRequest = sonic_rs::from_str(body).unwrap();
        assert!(request.validate().is_ok());
        let fields = request.into_fields().unwrap();
        assert_eq!(fields.teacher_id, 1);
    }

    #[test]
    fn rejects_blank_name_and_long_description() {
        let blank = SessionRequest {
            name: String::new(),
            date: Some(Utc::now()),
            teacher_id: Some(1),
            description: "Description".to_string(),
        };
        assert!(blank.validate().is_err());

        let long = SessionRequest {
            name: "Session".to_string(),
            date: Some(Utc::now()),
            teacher_id: Some(1),
            description: "A".repeat(2501),
        };
        assert!(long.validate().is_err());
    }

    #[test]
    fn missing_date_fails_validation() {
        let body = r#"{"name":"Session","teacher_id":1,"description":"Description"}"#;
        let request: SessionRequest = sonic_rs::from_str(body).unwrap();
        assert!(request.validate().is_err());
    }
}
