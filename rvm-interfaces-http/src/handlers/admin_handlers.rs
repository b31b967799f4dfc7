use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::Json;

use rvm_application::queries::{dashboard_queries, machine_queries, user_queries};
use rvm_application::AppState;
use rvm_domain::{FleetSummary, Machine, MachineDetail, User, UserDetail};

use crate::error::HttpError;
use crate::middleware::authorize;

pub async fn dashboard(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<FleetSummary>, HttpError> {
    authorize(&state, &headers).await?;
    Ok(Json(dashboard_queries::get_dashboard(&state).await))
}

pub async fn list_users(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<User>>, HttpError> {
    authorize(&state, &headers).await?;
    Ok(Json(user_queries::list_users(&state).await))
}

pub async fn user_detail(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(user_id): Path<String>,
) -> Result<Json<UserDetail>, HttpError> {
    authorize(&state, &headers).await?;
    let user_id = user_id
        .parse::<u64>()
        .map_err(|_| HttpError::BadRequest(format!("invalid user id '{}'", user_id)))?;
    let detail = user_queries::get_user(&state, user_id).await?;
    Ok(Json(detail))
}

pub async fn list_machines(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<Machine>>, HttpError> {
    authorize(&state, &headers).await?;
    Ok(Json(machine_queries::list_machines(&state).await))
}

pub async fn machine_detail(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(machine_id): Path<String>,
) -> Result<Json<MachineDetail>, HttpError> {
    authorize(&state, &headers).await?;
    let detail = machine_queries::get_machine(&state, &machine_id).await?;
    Ok(Json(detail))
}
