//! Wire types shared between the account service and gatehouse-ui

pub mod auth;
pub mod user;

pub use user::{User, UserRole, UserStatus};

use serde::{Deserialize, Serialize};

/// Standard response envelope wrapped around every account-service payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

/// One server-side page of records, kept in server order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub content: Vec<T>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_page_envelope() {
        let body = r#"{
            "data": {
                "content": [
                    {"id": 1, "username": "alice", "email": "alice@example.com", "role": "ADMIN", "status": "ACTIVE"},
                    {"id": 2, "username": "bob", "email": "bob@example.com", "role": "USER", "status": "SUSPENDED"}
                ]
            }
        }"#;

        let envelope: ApiResponse<Page<User>> = serde_json::from_str(body).unwrap();
        let users = envelope.data.content;
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].username, "alice");
        assert_eq!(users[0].role, UserRole::Admin);
        assert_eq!(users[1].status, UserStatus::Suspended);
    }

    #[test]
    fn test_envelope_preserves_server_order() {
        let body = r#"{"data": {"content": [
            {"id": 3, "username": "c", "email": "c@x", "role": "USER", "status": "ACTIVE"},
            {"id": 1, "username": "a", "email": "a@x", "role": "USER", "status": "ACTIVE"},
            {"id": 2, "username": "b", "email": "b@x", "role": "USER", "status": "ACTIVE"}
        ]}}"#;

        let envelope: ApiResponse<Page<User>> = serde_json::from_str(body).unwrap();
        let ids: Vec<i64> = envelope.data.content.iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_envelope_without_data_is_an_error() {
        let missing_data = r#"{"message": "ok"}"#;
        assert!(serde_json::from_str::<ApiResponse<Page<User>>>(missing_data).is_err());

        let missing_content = r#"{"data": {"totalElements": 0}}"#;
        assert!(serde_json::from_str::<ApiResponse<Page<User>>>(missing_content).is_err());
    }

    #[test]
    fn test_envelope_ignores_extra_fields() {
        let body = r#"{
            "data": {"content": [], "totalElements": 0, "totalPages": 0, "number": 0},
            "message": "ok",
            "timestamp": "2024-01-01T00:00:00Z"
        }"#;

        let envelope: ApiResponse<Page<User>> = serde_json::from_str(body).unwrap();
        assert!(envelope.data.content.is_empty());
    }
}
