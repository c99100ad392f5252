use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use shared::{MessageError, TaskId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("missing or invalid authorization")]
    Unauthorized,
    #[error("task {0} not found")]
    NotFound(TaskId),
    #[error(transparent)]
    InvalidMessage(#[from] MessageError),
}

impl ServerError {
    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::Unauthorized => StatusCode::UNAUTHORIZED,
            ServerError::NotFound(_) => StatusCode::NOT_FOUND,
            ServerError::InvalidMessage(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::warn!(%status, error = %self, "request rejected");
        (status, Json(json!({ "message": self.to_string() }))).into_response()
    }
}
