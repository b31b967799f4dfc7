use axum::http::HeaderMap;

use rvm_application::commands::session_commands;
use rvm_application::AppState;

use crate::error::HttpError;

pub async fn authorize(state: &AppState, headers: &HeaderMap) -> Result<(), HttpError> {
    let token = extract_bearer(headers);
    if session_commands::is_authorized(state, token.as_deref()).await {
        Ok(())
    } else {
        Err(HttpError::Unauthorized)
    }
}

pub fn extract_bearer(headers: &HeaderMap) -> Option<String> {
    let value = headers.get("Authorization")?.to_str().ok()?.trim();
    let prefix = "Bearer ";
    if !value.starts_with(prefix) {
        return None;
    }
    let token = value[prefix.len()..].trim();
    if token.is_empty() {
        return None;
    }
    Some(token.to_string())
}
