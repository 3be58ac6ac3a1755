//! Mock Victory API client for testing
//!
//! Provides a mock implementation of the API trait for unit testing without
//! making real API calls.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::{Registration, VictoryApi};
use crate::error::{ApiError, Result};

/// Mock API client for testing.
///
/// Configure expected responses via builder methods, then inspect call counts
/// and captured requests after the code under test has run.
#[derive(Default)]
pub struct MockVictoryClient {
    /// Token to return from login
    token: Arc<Mutex<Option<String>>>,
    /// Error to return (if any), consumed on first use
    error: Arc<Mutex<Option<ApiError>>>,
    /// Track number of calls for verification
    call_count: Arc<Mutex<CallCounts>>,
    /// Captured registrations for test assertions
    registrations: Arc<Mutex<Vec<Registration>>>,
    /// Captured workflow names for test assertions
    deployed_workflows: Arc<Mutex<Vec<String>>>,
}

/// Tracks API call counts for test verification
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub login: usize,
    pub register: usize,
    pub deploy_workflow: usize,
}

impl MockVictoryClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the token returned by login
    pub fn with_token(mut self, token: &str) -> Self {
        self.token = Arc::new(Mutex::new(Some(token.to_string())));
        self
    }

    /// Set an error to return from the next call
    pub fn with_error(mut self, error: ApiError) -> Self {
        self.error = Arc::new(Mutex::new(Some(error)));
        self
    }

    /// Get current call counts
    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }

    /// Get workflow names captured by deploy_workflow
    pub async fn deployed_workflows(&self) -> Vec<String> {
        self.deployed_workflows.lock().await.clone()
    }

    async fn take_error(&self) -> Option<ApiError> {
        self.error.lock().await.take()
    }
}

#[async_trait]
impl VictoryApi for MockVictoryClient {
    async fn login(&self, _email: &str, _password: &str) -> Result<String> {
        self.call_count.lock().await.login += 1;

        if let Some(err) = self.take_error().await {
            return Err(err.into());
        }

        let token = self.token.lock().await.clone();
        token.ok_or_else(|| {
            ApiError::InvalidResponse("Login response did not contain a token".to_string()).into()
        })
    }

    async fn register(&self, registration: &Registration) -> Result<()> {
        self.call_count.lock().await.register += 1;
        self.registrations.lock().await.push(registration.clone());

        if let Some(err) = self.take_error().await {
            return Err(err.into());
        }

        Ok(())
    }

    async fn deploy_workflow(&self, workflow_name: &str) -> Result<()> {
        self.call_count.lock().await.deploy_workflow += 1;
        self.deployed_workflows
            .lock()
            .await
            .push(workflow_name.to_string());

        if let Some(err) = self.take_error().await {
            return Err(err.into());
        }

        Ok(())
    }
}
