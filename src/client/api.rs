use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::ClientConfig;

pub const FALLBACK_ERROR_MESSAGE: &str = "Something went wrong!";

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationPayload {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegisterResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub data: Option<RegisterData>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegisterData {
    #[serde(default)]
    pub user: Option<RegisteredUser>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegisteredUser {
    #[serde(default)]
    pub token: Option<String>,
}

impl RegisterResponse {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }

    /// `data.user.token`, if the server sent one.
    pub fn token(&self) -> Option<&str> {
        self.data
            .as_ref()
            .and_then(|data| data.user.as_ref())
            .and_then(|user| user.token.as_deref())
    }
}

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

// =============================================================================
// ERRORS
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("Network error: {0}")]
    Transport(String),

    #[error("Server returned status {status}")]
    Server { status: u16, message: Option<String> },

    #[error("Registration was not accepted")]
    Rejected { message: Option<String> },

    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl SubmitError {
    /// Text for the form-level error: the server's message when it sent one.
    pub fn user_message(&self) -> String {
        let server_message = match self {
            Self::Server { message, .. } | Self::Rejected { message } => message.as_deref(),
            Self::Transport(_) | Self::Decode(_) => None,
        };

        server_message
            .filter(|message| !message.is_empty())
            .unwrap_or(FALLBACK_ERROR_MESSAGE)
            .to_string()
    }
}

// =============================================================================
// TRANSPORT
// =============================================================================

#[async_trait]
pub trait RegistrationApi: Send + Sync {
    async fn register(&self, payload: &RegistrationPayload) -> Result<RegisterResponse, SubmitError>;
}

/// Registration client for the users backend.
pub struct HttpRegistrationApi {
    client: Client,
    register_url: String,
}

impl HttpRegistrationApi {
    pub fn new(config: &ClientConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(client: Client, config: &ClientConfig) -> Self {
        Self {
            client,
            register_url: config.register_url(),
        }
    }
}

#[async_trait]
impl RegistrationApi for HttpRegistrationApi {
    async fn register(&self, payload: &RegistrationPayload) -> Result<RegisterResponse, SubmitError> {
        let response = self
            .client
            .post(&self.register_url)
            .json(payload)
            .send()
            .await
            .map_err(|e| SubmitError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.bytes().await.unwrap_or_else(|e| {
                tracing::debug!("Failed to read error body for status {}: {}", status, e);
                Default::default()
            });
            let message = serde_json::from_slice::<ErrorBody>(&body)
                .ok()
                .and_then(|body| body.message);

            return Err(SubmitError::Server {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<RegisterResponse>()
            .await
            .map_err(|e| SubmitError::Decode(e.to_string()))
    }
}
