use axum::body::Bytes;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use serde::{Deserialize, Serialize};

use rvm_application::commands::session_commands;
use rvm_application::{AppError, AppState};

use crate::error::{HttpError, MessageBody};
use crate::middleware::extract_bearer;

#[derive(Deserialize)]
pub struct LoginPayload {
    pub username: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
}

pub async fn login(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<LoginResponse>, HttpError> {
    let payload: LoginPayload = serde_json::from_slice(&body)
        .map_err(|_| HttpError::BadRequest("username and password are required".to_string()))?;
    let token = session_commands::login(&state, &payload.username, &payload.password)
        .await
        .map_err(|err| match err {
            AppError::Unauthorized => HttpError::InvalidCredentials,
            other => HttpError::from(other),
        })?;
    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        token,
    }))
}

pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> Json<MessageBody> {
    let token = extract_bearer(&headers);
    session_commands::logout(&state, token.as_deref()).await;
    Json(MessageBody::new("Logged out"))
}
