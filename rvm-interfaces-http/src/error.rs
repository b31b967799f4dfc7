use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

#[derive(Debug)]
pub enum HttpError {
    Unauthorized,
    InvalidCredentials,
    BadRequest(String),
    NotFound(String),
    Conflict(String),
}

impl From<rvm_application::AppError> for HttpError {
    fn from(value: rvm_application::AppError) -> Self {
        match value {
            rvm_application::AppError::Unauthorized => HttpError::Unauthorized,
            rvm_application::AppError::NotFound(msg) => HttpError::NotFound(msg),
            rvm_application::AppError::Conflict(msg) => HttpError::Conflict(msg),
            rvm_application::AppError::BadRequest(msg) => HttpError::BadRequest(msg),
        }
    }
}

#[derive(Serialize)]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            HttpError::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized".to_string()),
            HttpError::InvalidCredentials => {
                (StatusCode::UNAUTHORIZED, "Invalid credentials".to_string())
            }
            HttpError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            HttpError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            HttpError::Conflict(msg) => (StatusCode::CONFLICT, msg),
        };
        (status, Json(MessageBody::new(message))).into_response()
    }
}
