//! Error handling

use axum::{
    extract::rejection::JsonRejection,
    response::{IntoResponse, Response},
    http::StatusCode,
    Json,
};
use serde_json::json;

use crate::sim::SimError;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug)]
pub enum AppError {
    // Simulation input errors
    InvalidAttackType(String),
    UnknownDefense(String),

    // Request errors
    ValidationError(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidAttackType(_)
            | AppError::UnknownDefense(_)
            | AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error_message = match &self {
            AppError::InvalidAttackType(kind) => format!("Invalid attack type: {}", kind),
            AppError::UnknownDefense(name) => format!("Unknown defense: {}", name),
            AppError::ValidationError(msg) => {
                tracing::debug!("Rejected request body: {}", msg);
                msg.clone()
            }
        };

        let body = Json(json!({
            "error": error_message,
            "status": status.as_u16()
        }));

        (status, body).into_response()
    }
}

impl From<SimError> for AppError {
    fn from(err: SimError) -> Self {
        match err {
            SimError::InvalidAttackType(kind) => AppError::InvalidAttackType(kind),
            SimError::UnknownDefense(name) => AppError::UnknownDefense(name),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::ValidationError(rejection.body_text())
    }
}
