use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::Value;

// =============================================================================
// CONTROLLER RESPONSE
// =============================================================================

/// Status and JSON body produced by a user controller, relayed as-is.
#[derive(Debug, Clone)]
pub struct ControllerResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl ControllerResponse {
    pub fn new(status: StatusCode, body: Value) -> Self {
        Self { status, body }
    }

    pub fn ok(body: Value) -> Self {
        Self::new(StatusCode::OK, body)
    }
}

impl IntoResponse for ControllerResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

// =============================================================================
// ERROR RESPONSE
// =============================================================================

/// Same shape the registration form reads its failure message from.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub status: &'static str,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: "error",
            message: message.into(),
        }
    }
}
