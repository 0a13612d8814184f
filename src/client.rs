//! HTTP client for a running sandbox server.
//!
//! Used by the CLI's `send`, `approve` and `status` commands. The base URL
//! and API key come from [`SandboxConfig`].

use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;

use sandbox_core::{ApplyResult, PendingView, ProjectSummary, Submission};

use crate::config::SandboxConfig;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: API key required or invalid")]
    Unauthorized,

    #[error("Server error: {0}")]
    Server(String),
}

#[derive(Debug, Clone)]
pub struct SandboxClient {
    base_url: String,
    api_key: Option<String>,
    client: Client,
}

impl SandboxClient {
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
            client: Client::new(),
        }
    }

    pub fn from_config(config: &SandboxConfig) -> Self {
        Self::new(config.api_url(), config.api_key.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.client.request(method, &url);
        if let Some(ref key) = self.api_key {
            req = req.bearer_auth(key);
        }
        req
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }
        let body = response.text().await.unwrap_or_default();
        Err(match status {
            StatusCode::NOT_FOUND => ClientError::NotFound(body),
            StatusCode::BAD_REQUEST => ClientError::BadRequest(body),
            StatusCode::CONFLICT => ClientError::Conflict(body),
            StatusCode::UNAUTHORIZED => ClientError::Unauthorized,
            _ => ClientError::Server(format!("{}: {}", status, body)),
        })
    }

    pub async fn health(&self) -> Result<serde_json::Value, ClientError> {
        let response = self.request(Method::GET, "/health").send().await?;
        self.handle_response(response).await
    }

    /// Submit typed command text; the result is proposed, not applied.
    pub async fn submit(&self, text: &str) -> Result<Submission, ClientError> {
        let response = self
            .request(Method::POST, "/commands")
            .json(&serde_json::json!({ "text": text }))
            .send()
            .await?;
        self.handle_response(response).await
    }

    pub async fn pending(&self) -> Result<PendingView, ClientError> {
        let response = self.request(Method::GET, "/pending").send().await?;
        self.handle_response(response).await
    }

    pub async fn approve(&self) -> Result<ApplyResult, ClientError> {
        let response = self.request(Method::POST, "/pending/approve").send().await?;
        self.handle_response(response).await
    }

    pub async fn projects(&self) -> Result<Vec<ProjectSummary>, ClientError> {
        let response = self.request(Method::GET, "/projects").send().await?;
        self.handle_response(response).await
    }

    pub async fn recent(&self) -> Result<Vec<String>, ClientError> {
        let response = self.request(Method::GET, "/recent").send().await?;
        self.handle_response(response).await
    }
}
