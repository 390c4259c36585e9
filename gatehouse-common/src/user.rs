//! User account records as served by the account service

use serde::{Deserialize, Serialize};
use std::fmt;

/// A user account. The account service owns these; the dashboard only reads them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub role: UserRole,
    pub status: UserStatus,
}

/// Account role. Values other than `ADMIN` are carried through verbatim
/// so the dashboard can display roles this build does not know about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum UserRole {
    Admin,
    Other(String),
}

impl UserRole {
    /// Exact text as the service sent it
    pub fn as_str(&self) -> &str {
        match self {
            UserRole::Admin => "ADMIN",
            UserRole::Other(role) => role,
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, UserRole::Admin)
    }
}

impl From<String> for UserRole {
    fn from(value: String) -> Self {
        match value.as_str() {
            "ADMIN" => UserRole::Admin,
            _ => UserRole::Other(value),
        }
    }
}

impl From<UserRole> for String {
    fn from(role: UserRole) -> Self {
        match role {
            UserRole::Admin => "ADMIN".to_string(),
            UserRole::Other(role) => role,
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Account status. Unrecognized values are carried through verbatim,
/// matching is byte-exact on the uppercase wire form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum UserStatus {
    Active,
    Inactive,
    Suspended,
    Other(String),
}

impl UserStatus {
    /// Exact text as the service sent it
    pub fn as_str(&self) -> &str {
        match self {
            UserStatus::Active => "ACTIVE",
            UserStatus::Inactive => "INACTIVE",
            UserStatus::Suspended => "SUSPENDED",
            UserStatus::Other(status) => status,
        }
    }
}

impl From<String> for UserStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "ACTIVE" => UserStatus::Active,
            "INACTIVE" => UserStatus::Inactive,
            "SUSPENDED" => UserStatus::Suspended,
            _ => UserStatus::Other(value),
        }
    }
}

impl From<UserStatus> for String {
    fn from(status: UserStatus) -> Self {
        match status {
            UserStatus::Active => "ACTIVE".to_string(),
            UserStatus::Inactive => "INACTIVE".to_string(),
            UserStatus::Suspended => "SUSPENDED".to_string(),
            UserStatus::Other(status) => status,
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_deserialization() {
        let json = r#"{
            "id": 42,
            "username": "carol",
            "email": "carol@example.com",
            "role": "USER",
            "status": "INACTIVE"
        }"#;

        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, 42);
        assert_eq!(user.username, "carol");
        assert_eq!(user.email, "carol@example.com");
        assert_eq!(user.role, UserRole::Other("USER".to_string()));
        assert_eq!(user.status, UserStatus::Inactive);
    }

    #[test]
    fn test_known_status_round_trip() {
        for (status, wire) in [
            (UserStatus::Active, "\"ACTIVE\""),
            (UserStatus::Inactive, "\"INACTIVE\""),
            (UserStatus::Suspended, "\"SUSPENDED\""),
        ] {
            assert_eq!(serde_json::to_string(&status).unwrap(), wire);
            assert_eq!(serde_json::from_str::<UserStatus>(wire).unwrap(), status);
        }
    }

    #[test]
    fn test_unknown_status_kept_verbatim() {
        let status: UserStatus = serde_json::from_str("\"PENDING_REVIEW\"").unwrap();
        assert_eq!(status, UserStatus::Other("PENDING_REVIEW".to_string()));
        assert_eq!(status.as_str(), "PENDING_REVIEW");
        assert_eq!(serde_json::to_string(&status).unwrap(), "\"PENDING_REVIEW\"");
    }

    #[test]
    fn test_status_matching_is_case_sensitive() {
        let status: UserStatus = serde_json::from_str("\"active\"").unwrap();
        assert_eq!(status, UserStatus::Other("active".to_string()));
        assert_eq!(status.as_str(), "active");
    }

    #[test]
    fn test_role_matching() {
        let admin: UserRole = serde_json::from_str("\"ADMIN\"").unwrap();
        assert!(admin.is_admin());
        assert_eq!(admin.as_str(), "ADMIN");

        let moderator: UserRole = serde_json::from_str("\"MODERATOR\"").unwrap();
        assert!(!moderator.is_admin());
        assert_eq!(moderator.as_str(), "MODERATOR");
    }
}
