//! Victory AI platform API client

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

#[cfg(test)]
pub mod mock;
pub mod victory;

#[cfg(test)]
pub use mock::MockVictoryClient;
pub use victory::VictoryClient;

/// Victory AI platform API trait
#[async_trait]
pub trait VictoryApi: Send + Sync {
    /// Log in with email and password, returning the bearer token.
    ///
    /// Success means the response carried a non-empty `token` field.
    async fn login(&self, email: &str, password: &str) -> Result<String>;

    /// Register a new account. Success is HTTP 201; no token is returned,
    /// a separate login is required afterward.
    async fn register(&self, registration: &Registration) -> Result<()>;

    /// Deploy an n8n workflow by name. Success is HTTP 200.
    async fn deploy_workflow(&self, workflow_name: &str) -> Result<()>;
}

/// Registration request payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub email: String,
    pub password: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
}
