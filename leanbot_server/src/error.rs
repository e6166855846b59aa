use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use leanbot_core::DecisionError;
use serde_json::json;
use thiserror::Error;

/// 协议层错误，全部映射为 400，响应体为 `{"error": "..."}`
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("missing action")]
    MissingAction,

    #[error("malformed form body: {0}")]
    MalformedForm(String),

    #[error("unknown action: {0}")]
    UnknownAction(String),

    #[error("missing game_state")]
    MissingGameState,

    #[error("malformed game_state: {0}")]
    MalformedGameState(#[from] serde_json::Error),

    #[error(transparent)]
    Decision(#[from] DecisionError),
}

impl ServerError {
    pub fn status(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}
