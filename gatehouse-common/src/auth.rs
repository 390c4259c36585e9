//! Login exchange with the account service

use serde::{Deserialize, Serialize};

/// Credentials posted to `/api/auth/login`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Payload inside the login response envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    pub username: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_request_serialization() {
        let request = LoginRequest {
            username: "admin".to_string(),
            password: "hunter2".to_string(),
        };
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"username":"admin","password":"hunter2"}"#);
    }

    #[test]
    fn test_login_response_uses_camel_case() {
        let json = r#"{"accessToken": "tok-123", "username": "admin"}"#;
        let response: LoginResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.access_token, "tok-123");
        assert_eq!(response.username, "admin");
    }
}
