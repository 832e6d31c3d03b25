use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use super::Timestamp;

/// Role assigned to a user account.
///
/// The role decides which navigation and UI affordances the client exposes.
/// It is never the source of truth for authorization: the remote API enforces
/// access to protected resources independently.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Student,
    Teacher,
    Admin,
}

impl UserRole {
    /// Return the canonical string representation used on the wire.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Teacher => "teacher",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = &'static str;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "student" => Ok(Self::Student),
            "teacher" => Ok(Self::Teacher),
            "admin" => Ok(Self::Admin),
            _ => Err("unknown user role"),
        }
    }
}

/// Snapshot of an authenticated identity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    /// Unique identifier for the user.
    pub id: uuid::Uuid,

    /// The user's first name.
    pub first_name: String,

    /// The user's last name.
    pub last_name: String,

    /// The user's email address.
    pub email: String,

    /// The user's assigned role.
    pub role: UserRole,

    /// When the account was created.
    pub created_at: Timestamp,
}

impl User {
    /// The user's display name.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Request to authenticate with email/password credentials.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    /// The user's email address.
    pub email: String,

    /// The user's password.
    pub password: String,
}

/// Request to create a new account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterRequest {
    /// The user's first name.
    pub first_name: String,

    /// The user's last name.
    pub last_name: String,

    /// The user's email address.
    pub email: String,

    /// The user's password.
    pub password: String,

    /// The requested role; accounts self-register as student or teacher.
    pub role: UserRole,
}

/// Response to a successful login or registration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthResponse {
    /// Opaque bearer token presented on subsequent requests.
    pub token: String,

    /// Snapshot of the authenticated user.
    pub user: User,
}

/// Admin request to change another user's role.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateRoleRequest {
    /// The role to assign.
    pub role: UserRole,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn sample_user(role: UserRole) -> User {
        User {
            id: Uuid::new_v4(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            role,
            created_at: Timestamp(Utc::now()),
        }
    }

    #[test]
    fn user_role_roundtrip() {
        for (text, role) in [
            ("student", UserRole::Student),
            ("teacher", UserRole::Teacher),
            ("admin", UserRole::Admin),
        ] {
            assert_eq!(role.as_str(), text);
            assert_eq!(role.to_string(), text);
            assert_eq!(UserRole::from_str(text).unwrap(), role);
        }
    }

    #[test]
    fn user_role_invalid() {
        assert!(UserRole::from_str("principal").is_err());
        assert!(UserRole::from_str("").is_err());
    }

    #[test]
    fn user_role_serde_snake_case() {
        let json = serde_json::to_string(&UserRole::Teacher).unwrap();
        assert_eq!(json, "\"teacher\"");
        let role: UserRole = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(role, UserRole::Admin);
    }

    #[test]
    fn user_full_name() {
        let user = sample_user(UserRole::Student);
        assert_eq!(user.full_name(), "Ada Lovelace");
    }

    #[test]
    fn user_serialization_roundtrip() {
        let user = sample_user(UserRole::Teacher);
        let serialized = serde_json::to_string(&user).unwrap();
        let deserialized: User = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, user);
        assert_eq!(deserialized.role, UserRole::Teacher);
    }

    #[test]
    fn auth_response_roundtrip() {
        let response = AuthResponse {
            token: "opaque-bearer-token".to_string(),
            user: sample_user(UserRole::Admin),
        };
        let serialized = serde_json::to_string(&response).unwrap();
        let deserialized: AuthResponse = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, response);
        assert!(!deserialized.token.is_empty());
    }

    #[test]
    fn login_request_shape() {
        let request = LoginRequest {
            email: "ada@example.com".to_string(),
            password: "correct horse".to_string(),
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"email\""));
        assert!(json.contains("\"password\""));
    }
}
