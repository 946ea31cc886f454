use garde::Validate;
use serde::{Deserialize, Serialize};

/// The request payload for user login.
#[derive(Deserialize, Serialize, Validate, Clone, PartialEq)]
pub struct LoginRequest {
    #[garde(length(min = 1))]
    #[serde(default)]
    pub email: String,
    #[garde(length(min = 1))]
    #[serde(default)]
    pub password: String,
}

/// The request payload for user registration.
#[derive(Deserialize, Serialize, Validate, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[garde(email, length(max = 50))]
    #[serde(default)]
    pub email: String,
    #[garde(length(chars, min = 3, max = 20))]
    #[serde(default)]
    pub first_name: String,
    #[garde(length(chars, min = 3, max = 20))]
    #[serde(default)]
    pub last_name: String,
    #[garde(length(min = 6, max = 40))]
    #[serde(default)]
    pub password: String,
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

impl std::fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("email", &self.email)
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .finish_non_exhaustive()
    }
}
