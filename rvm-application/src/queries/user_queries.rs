use tracing::warn;

use crate::{AppError, AppState};
use rvm_domain::{User, UserDetail};

pub async fn list_users(state: &AppState) -> Vec<User> {
    state.metrics.record_request();
    state.fleet.list_users().await
}

pub async fn get_user(state: &AppState, user_id: u64) -> Result<UserDetail, AppError> {
    state.metrics.record_request();
    state.fleet.user_detail(user_id).await.map_err(|err| {
        warn!("user lookup failed: {}", err);
        state.metrics.record_not_found();
        AppError::from(err)
    })
}
