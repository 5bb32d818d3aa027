use async_trait::async_trait;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;

use super::schema::{ControllerResponse, ErrorResponse};

pub type Result<T> = std::result::Result<T, ControllerError>;

/// Registration and login handling behind the route table.
#[async_trait]
pub trait UserController: Send + Sync {
    async fn register(&self, body: Value) -> Result<ControllerResponse>;
    async fn login(&self, body: Value) -> Result<ControllerResponse>;
}

#[derive(Debug, thiserror::Error)]
pub enum ControllerError {
    #[error("Upstream request failed: {0}")]
    Upstream(String),

    #[error("Upstream returned an invalid body: {0}")]
    InvalidUpstreamBody(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ControllerError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
            Self::InvalidUpstreamBody(_) => StatusCode::BAD_GATEWAY,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ControllerError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}
