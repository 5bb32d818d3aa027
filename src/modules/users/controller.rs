use axum::{body::Bytes, extract::State};
use serde_json::Value;
use std::sync::Arc;

use crate::AppState;
use crate::modules::users::{
    interface::ControllerError,
    schema::ControllerResponse,
};

pub async fn register(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<ControllerResponse, ControllerError> {
    tracing::debug!("Dispatching POST /register");
    state.controller.register(parse_body(&body)).await
}

pub async fn login(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<ControllerResponse, ControllerError> {
    tracing::debug!("Dispatching POST /login");
    state.controller.login(parse_body(&body)).await
}

/// Empty or non-JSON bodies reach the controller as `Value::Null`.
fn parse_body(body: &[u8]) -> Value {
    if body.is_empty() {
        return Value::Null;
    }

    serde_json::from_slice(body).unwrap_or_else(|e| {
        tracing::debug!("Request body is not JSON ({}), passing null", e);
        Value::Null
    })
}
