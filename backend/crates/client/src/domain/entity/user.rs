//! User and authentication contracts

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserStatus {
    Active,
    Banned,
    Deleted,
    #[serde(other)]
    Unknown,
}

/// GET /users/profile, and the `user` entry of the session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Absent on the locally built profile stored right after registration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub firstname: Option<String>,
    #[serde(default)]
    pub lastname: Option<String>,
    #[serde(default)]
    pub date_of_birth: Option<String>,
    #[serde(default)]
    pub customer_id: Option<i64>,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub status: Option<UserStatus>,
}

impl UserProfile {
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r.eq_ignore_ascii_case(role))
    }

    pub fn is_admin(&self) -> bool {
        self.has_role("ADMIN") || self.has_role("SUPER_ADMIN")
    }

    /// Older profiles carry no customer link; their user id doubles as one
    pub fn customer_id(&self) -> Option<i64> {
        self.customer_id.or(self.id)
    }

    pub fn is_banned(&self) -> bool {
        self.status == Some(UserStatus::Banned)
    }
}

/// POST /authentication/login
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub jwt: Option<String>,
}

/// POST /users/create
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub firstname: String,
    pub lastname: String,
    pub date_of_birth: String,
    pub email: String,
    pub username: String,
    pub password: String,
    pub active: bool,
    pub enabled: bool,
    pub roles: Vec<String>,
}

/// POST /users/roles/add, /users/roles/remove
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleChange {
    pub username: String,
    pub role_name: String,
}
