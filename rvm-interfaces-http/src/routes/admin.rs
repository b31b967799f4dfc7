use axum::routing::{get, post};
use axum::Router;

use rvm_application::AppState;

use crate::handlers::{admin_handlers, machine_handlers, ops_handlers, session_handlers};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(ops_handlers::root))
        .route("/admin/login", post(session_handlers::login))
        .route("/admin/logout", get(session_handlers::logout))
        .route("/admin/dashboard", get(admin_handlers::dashboard))
        .route("/admin/users", get(admin_handlers::list_users))
        .route("/admin/users/:id", get(admin_handlers::user_detail))
        .route("/admin/machines", get(admin_handlers::list_machines))
        .route("/admin/machines/add", post(machine_handlers::add_machine))
        .route(
            "/admin/machines/:machine_id",
            get(admin_handlers::machine_detail),
        )
        .route(
            "/admin/machine/:machine_id/empty",
            post(machine_handlers::empty_machine),
        )
        .route("/ops/health/live", get(ops_handlers::health_live))
        .route(
            "/ops/metrics/prometheus",
            get(ops_handlers::metrics_prometheus),
        )
        .with_state(state)
}
