use crate::AppState;
use rvm_domain::FleetSummary;

pub async fn get_dashboard(state: &AppState) -> FleetSummary {
    state.metrics.record_request();
    state.fleet.summary().await
}
