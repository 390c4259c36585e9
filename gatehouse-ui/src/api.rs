//! API client for communicating with the account service

use gatehouse_common::auth::{LoginRequest, LoginResponse};
use gatehouse_common::{ApiResponse, Page, User};
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

const API_BASE: &str = "http://localhost:8080/api";

#[derive(Clone, Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("HTTP {0}")]
    Status(u16),
    #[error("unexpected response body: {0}")]
    Decode(String),
}

/// Generic JSON fetch helper, attaching the bearer token when one is held
async fn get_json<T: DeserializeOwned>(path: &str, token: Option<&str>) -> Result<T, ApiError> {
    let url = format!("{}{}", API_BASE, path);

    let mut request = reqwasm::http::Request::get(&url);
    if let Some(token) = token {
        request = request.header("Authorization", &format!("Bearer {}", token));
    }

    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if response.ok() {
        response.json().await.map_err(|e| ApiError::Decode(e.to_string()))
    } else {
        Err(ApiError::Status(response.status()))
    }
}

/// POST request helper
async fn post_json<T: DeserializeOwned, B: Serialize>(path: &str, body: &B) -> Result<T, ApiError> {
    let url = format!("{}{}", API_BASE, path);
    let body = serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))?;

    let response = reqwasm::http::Request::post(&url)
        .header("Content-Type", "application/json")
        .body(body)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if response.ok() {
        response.json().await.map_err(|e| ApiError::Decode(e.to_string()))
    } else {
        Err(ApiError::Status(response.status()))
    }
}

/// List all user accounts, in the order the service returns them.
/// A missing token still issues the request; the service answers 401.
pub async fn list_users(token: Option<&str>) -> Result<Vec<User>, ApiError> {
    let envelope: ApiResponse<Page<User>> = get_json("/admin/users", token).await?;
    Ok(envelope.data.content)
}

/// Exchange credentials for an access token
pub async fn login(request: &LoginRequest) -> Result<LoginResponse, ApiError> {
    let envelope: ApiResponse<LoginResponse> = post_json("/auth/login", request).await?;
    Ok(envelope.data)
}
