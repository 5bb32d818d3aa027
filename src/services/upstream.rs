use async_trait::async_trait;
use axum::http::StatusCode;
use reqwest::Client;
use serde_json::Value;

use crate::modules::users::{
    interface::{ControllerError, Result, UserController},
    schema::ControllerResponse,
};

/// Upstream user service client
/// Forwards register/login bodies and relays the reply untouched
pub struct UpstreamController {
    client: Client,
    base_url: String,
}

impl UpstreamController {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    async fn forward(&self, path: &str, body: Value) -> Result<ControllerResponse> {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("Upstream {} unreachable: {}", url, e);
                ControllerError::Upstream(e.to_string())
            })?;

        // reqwest and axum may pin different `http` versions
        let status = StatusCode::from_u16(response.status().as_u16())
            .map_err(|e| ControllerError::Internal(e.to_string()))?;

        let body: Value = response
            .json()
            .await
            .map_err(|e| ControllerError::InvalidUpstreamBody(e.to_string()))?;

        tracing::debug!("Upstream {} answered {}", url, status);
        Ok(ControllerResponse::new(status, body))
    }
}

#[async_trait]
impl UserController for UpstreamController {
    async fn register(&self, body: Value) -> Result<ControllerResponse> {
        self.forward("/register", body).await
    }

    async fn login(&self, body: Value) -> Result<ControllerResponse> {
        self.forward("/login", body).await
    }
}
