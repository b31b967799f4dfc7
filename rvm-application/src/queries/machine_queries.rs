use tracing::warn;

use crate::{AppError, AppState};
use rvm_domain::{Machine, MachineDetail};

pub async fn list_machines(state: &AppState) -> Vec<Machine> {
    state.metrics.record_request();
    state.fleet.list_machines().await
}

pub async fn get_machine(state: &AppState, code: &str) -> Result<MachineDetail, AppError> {
    state.metrics.record_request();
    state.fleet.machine_detail(code).await.map_err(|err| {
        warn!("machine lookup failed: {}", err);
        state.metrics.record_not_found();
        AppError::from(err)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::demo_state;

    #[tokio::test]
    async fn get_machine_reports_fill_percentage() {
        let state = demo_state();
        let detail = get_machine(&state, "M002").await.expect("m002");
        assert_eq!(detail.fill_percentage, 20.0);
    }

    #[tokio::test]
    async fn get_machine_unknown_code_is_not_found() {
        let state = demo_state();
        let err = get_machine(&state, "M999").await.expect_err("missing");
        assert!(matches!(err, AppError::NotFound(ref msg) if msg == "Machine not found"));
        assert!(state
            .metrics
            .render_prometheus()
            .contains("rvm_not_found_total 1\n"));
    }
}
