//! Victory AI platform API client implementation

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client as HttpClient, StatusCode};
use serde::Deserialize;
use serde_json::json;

use super::{Registration, VictoryApi};
use crate::error::{ApiError, Result};

/// Default platform base URL, overridable via --api-host / VOXCTL_API_HOST
const DEFAULT_API_HOST: &str = "http://localhost:5000";

/// All endpoints live under this prefix on the platform host
const API_PREFIX: &str = "/api";

/// Victory AI platform API client
pub struct VictoryClient {
    http: HttpClient,
    base_url: String,
}

impl VictoryClient {
    /// Create a client against the default platform host
    pub fn new() -> Result<Self> {
        Self::with_host(None)
    }

    /// Create a client against a custom host (development, testing)
    pub fn with_host(host: Option<String>) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let host = host.unwrap_or_else(|| DEFAULT_API_HOST.to_string());
        let base_url = format!("{}{}", host.trim_end_matches('/'), API_PREFIX);

        Ok(Self { http, base_url })
    }

    async fn post(&self, path: &str, body: &serde_json::Value) -> Result<reqwest::Response> {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(ApiError::from)?;

        log::debug!("POST {} -> {}", url, response.status());
        Ok(response)
    }
}

/// Map a non-success status to the matching error, consuming the response
/// body as the message where one is available.
async fn status_error(response: reqwest::Response) -> ApiError {
    let status = response.status();
    match status {
        StatusCode::UNAUTHORIZED => ApiError::Unauthorized,
        StatusCode::NOT_FOUND => {
            let msg = response
                .text()
                .await
                .unwrap_or_else(|_| "Resource not found".to_string());
            ApiError::NotFound(msg)
        }
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
            let msg = response
                .text()
                .await
                .unwrap_or_else(|_| "Bad request".to_string());
            ApiError::BadRequest(msg)
        }
        status if status.is_server_error() => {
            let msg = response
                .text()
                .await
                .unwrap_or_else(|_| format!("Server error: {}", status));
            ApiError::ServerError(msg)
        }
        status => ApiError::InvalidResponse(format!("Unexpected status code: {}", status)),
    }
}

#[async_trait]
impl VictoryApi for VictoryClient {
    async fn login(&self, email: &str, password: &str) -> Result<String> {
        #[derive(Deserialize)]
        struct LoginResponse {
            #[serde(default)]
            token: Option<String>,
        }

        let body = json!({ "email": email, "password": password });
        let response = self.post("/auth/login", &body).await?;

        if !response.status().is_success() {
            return Err(status_error(response).await.into());
        }

        let login: LoginResponse = response.json().await.map_err(|e| {
            ApiError::InvalidResponse(format!("Failed to parse login response: {}", e))
        })?;

        // The contract is a non-empty token field, not just a 2xx status
        match login.token {
            Some(token) if !token.is_empty() => Ok(token),
            _ => Err(ApiError::InvalidResponse(
                "Login response did not contain a token".to_string(),
            )
            .into()),
        }
    }

    async fn register(&self, registration: &Registration) -> Result<()> {
        let body = serde_json::to_value(registration)?;
        let response = self.post("/auth/register", &body).await?;

        match response.status() {
            StatusCode::CREATED => Ok(()),
            _ => Err(status_error(response).await.into()),
        }
    }

    async fn deploy_workflow(&self, workflow_name: &str) -> Result<()> {
        let body = json!({ "workflowname": workflow_name });
        let response = self.post("/deploy/n8n", &body).await?;

        match response.status() {
            StatusCode::OK => Ok(()),
            _ => Err(status_error(response).await.into()),
        }
    }
}
