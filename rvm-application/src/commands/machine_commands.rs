use chrono::Utc;
use tracing::{info, warn};

use crate::{AppError, AppState};
use rvm_domain::{DirectoryError, EmptyReceipt, Machine, MachineDraft};

pub async fn empty_machine(state: &AppState, code: &str) -> Result<EmptyReceipt, AppError> {
    state.metrics.record_request();
    let receipt = state
        .fleet
        .empty_machine(code, Utc::now())
        .await
        .map_err(|err| {
            warn!("empty machine failed: {}", err);
            if matches!(err, DirectoryError::MachineNotFound(_)) {
                state.metrics.record_not_found();
            }
            AppError::from(err)
        })?;
    state.metrics.record_empty(receipt.bottles_collected);
    info!(
        machine_id = %receipt.machine.machine_id,
        bottles_collected = receipt.bottles_collected,
        "machine emptied"
    );
    Ok(receipt)
}

pub async fn add_machine(state: &AppState, draft: MachineDraft) -> Result<Machine, AppError> {
    state.metrics.record_request();
    let machine = state
        .fleet
        .add_machine(draft, Utc::now())
        .await
        .map_err(|err| {
            warn!("add machine rejected: {}", err);
            AppError::from(err)
        })?;
    state.metrics.record_add();
    info!(
        id = machine.id,
        machine_id = %machine.machine_id,
        name = %machine.name,
        "machine added"
    );
    Ok(machine)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queries::{dashboard_queries, machine_queries};
    use crate::test_support::demo_state;

    #[tokio::test]
    async fn empty_machine_twice_collects_once() {
        let state = demo_state();
        let first = empty_machine(&state, "M001").await.expect("first");
        assert_eq!(first.bottles_collected, 10);
        let second = empty_machine(&state, "M001").await.expect("second");
        assert_eq!(second.bottles_collected, 0);

        let detail = machine_queries::get_machine(&state, "M001").await.expect("m001");
        assert_eq!(detail.machine.current_bottles, 0);
        assert!(detail.machine.last_emptied.is_some());
        assert!(state
            .metrics
            .render_prometheus()
            .contains("rvm_bottles_collected_total 10\n"));
    }

    #[tokio::test]
    async fn empty_unknown_machine_is_not_found() {
        let state = demo_state();
        let err = empty_machine(&state, "nope").await.expect_err("missing");
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn add_machine_grows_fleet() {
        let state = demo_state();
        let draft = MachineDraft {
            name: Some("Station C".to_string()),
            ..MachineDraft::default()
        };
        let machine = add_machine(&state, draft).await.expect("add");
        assert_eq!(machine.name, "Station C");
        assert_eq!(machine.machine_id, "M003");
        assert_eq!(dashboard_queries::get_dashboard(&state).await.total_machines, 3);
    }

    #[tokio::test]
    async fn add_machine_duplicate_code_conflicts() {
        let state = demo_state();
        let draft = MachineDraft {
            machine_id: Some("M002".to_string()),
            ..MachineDraft::default()
        };
        let err = add_machine(&state, draft).await.expect_err("duplicate");
        assert!(matches!(err, AppError::Conflict(_)));
    }
}
