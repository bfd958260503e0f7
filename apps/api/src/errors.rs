use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
///
/// `Display` is always the user-facing message; the boundary cause stays in
/// `source` for the operator log.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    InFlight(String),

    #[error("{message}")]
    Boundary {
        message: &'static str,
        #[source]
        source: LlmError,
    },
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::InFlight(_) => StatusCode::CONFLICT,
            AppError::Boundary { .. } => StatusCode::BAD_GATEWAY,
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

#[derive(Serialize)]
struct DataBody<T> {
    data: T,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(ErrorBody {
            error: self.to_string(),
        });
        (status, body).into_response()
    }
}

/// Discriminated outcome of an action: either `data` or `error`, never both.
///
/// Serialized over HTTP as `{"data": ...}` or `{"error": "..."}`.
#[derive(Debug)]
pub enum ActionResult<T> {
    Data(T),
    Error(AppError),
}

#[cfg(test)]
impl<T> ActionResult<T> {
    pub fn data(&self) -> Option<&T> {
        match self {
            ActionResult::Data(data) => Some(data),
            ActionResult::Error(_) => None,
        }
    }

    pub fn error(&self) -> Option<&AppError> {
        match self {
            ActionResult::Data(_) => None,
            ActionResult::Error(e) => Some(e),
        }
    }
}

impl<T> From<Result<T, AppError>> for ActionResult<T> {
    fn from(result: Result<T, AppError>) -> Self {
        match result {
            Ok(data) => ActionResult::Data(data),
            Err(e) => ActionResult::Error(e),
        }
    }
}

impl<T: Serialize> IntoResponse for ActionResult<T> {
    fn into_response(self) -> Response {
        match self {
            ActionResult::Data(data) => (StatusCode::OK, Json(DataBody { data })).into_response(),
            ActionResult::Error(e) => e.into_response(),
        }
    }
}
