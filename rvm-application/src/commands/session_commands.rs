use tracing::{info, warn};

use crate::{AppError, AppState};

/// Checks the demo admin credentials and opens a session.
pub async fn login(state: &AppState, username: &str, password: &str) -> Result<String, AppError> {
    let (Some(expected_user), Some(expected_password)) = (
        state.config.admin_username.as_deref(),
        state.config.admin_password.as_deref(),
    ) else {
        return Err(AppError::BadRequest("login is not enabled".to_string()));
    };
    if username != expected_user || password != expected_password {
        state.metrics.record_login_failure();
        warn!(username = %username, "admin login rejected");
        return Err(AppError::Unauthorized);
    }
    let token = state.sessions.issue().await;
    info!(username = %username, "admin logged in");
    Ok(token)
}

pub async fn logout(state: &AppState, token: Option<&str>) {
    if let Some(token) = token {
        if state.sessions.revoke(token).await {
            info!("admin logged out");
        }
    }
}

/// A request passes when auth is disabled, or when it carries the static API
/// token or a live session token.
pub async fn is_authorized(state: &AppState, token: Option<&str>) -> bool {
    if !state.config.auth_enabled() {
        return true;
    }
    let Some(token) = token else {
        return false;
    };
    if state.config.api_token.as_deref() == Some(token) {
        return true;
    }
    state.sessions.contains(token).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{demo_state, demo_state_with};

    fn gated() -> AppState {
        demo_state_with(|config| {
            config.admin_username = Some("polygreen".to_string());
            config.admin_password = Some("poly123".to_string());
        })
    }

    #[tokio::test]
    async fn open_when_no_credentials_configured() {
        let state = demo_state();
        assert!(is_authorized(&state, None).await);
    }

    #[tokio::test]
    async fn login_issues_session_accepted_until_logout() {
        let state = gated();
        assert!(!is_authorized(&state, None).await);
        let token = login(&state, "polygreen", "poly123").await.expect("login");
        assert!(is_authorized(&state, Some(&token)).await);
        logout(&state, Some(&token)).await;
        assert!(!is_authorized(&state, Some(&token)).await);
    }

    #[tokio::test]
    async fn login_rejects_wrong_password() {
        let state = gated();
        let err = login(&state, "polygreen", "wrong").await.expect_err("reject");
        assert!(matches!(err, AppError::Unauthorized));
    }

    #[tokio::test]
    async fn static_api_token_is_accepted() {
        let state = demo_state_with(|config| config.api_token = Some("secret".to_string()));
        assert!(is_authorized(&state, Some("secret")).await);
        assert!(!is_authorized(&state, Some("other")).await);
    }
}
