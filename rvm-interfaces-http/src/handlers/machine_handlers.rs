use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::Json;
use serde::Serialize;
use serde_json::Value;
use tracing::warn;

use rvm_application::commands::machine_commands;
use rvm_application::AppState;
use rvm_domain::{Machine, MachineDraft};

use crate::error::HttpError;
use crate::middleware::authorize;

#[derive(Serialize)]
pub struct EmptyMachineResponse {
    pub message: String,
    pub bottles_collected: u32,
    pub machine: Machine,
}

#[derive(Serialize)]
pub struct AddMachineResponse {
    pub message: String,
    pub machine: Machine,
}

pub async fn empty_machine(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(machine_id): Path<String>,
) -> Result<Json<EmptyMachineResponse>, HttpError> {
    authorize(&state, &headers).await?;
    let receipt = machine_commands::empty_machine(&state, &machine_id).await?;
    Ok(Json(EmptyMachineResponse {
        message: format!("Machine {} emptied successfully", receipt.machine.machine_id),
        bottles_collected: receipt.bottles_collected,
        machine: receipt.machine,
    }))
}

pub async fn add_machine(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<AddMachineResponse>, HttpError> {
    authorize(&state, &headers).await?;
    let draft = parse_draft(&body)?;
    let machine = machine_commands::add_machine(&state, draft).await?;
    Ok(Json(AddMachineResponse {
        message: format!("Machine {} added successfully", machine.name),
        machine,
    }))
}

/// Bodies that are not a JSON object fall back to an empty draft so every
/// field takes its default. An object with a mistyped field is rejected.
fn parse_draft(body: &[u8]) -> Result<MachineDraft, HttpError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(MachineDraft::default());
    }
    let value = match serde_json::from_slice::<Value>(body) {
        Ok(value @ Value::Object(_)) => value,
        Ok(_) => {
            warn!("add-machine body is not a JSON object, using defaults");
            return Ok(MachineDraft::default());
        }
        Err(err) => {
            warn!("malformed add-machine body, using defaults: {}", err);
            return Ok(MachineDraft::default());
        }
    };
    serde_json::from_value(value)
        .map_err(|err| HttpError::BadRequest(format!("invalid machine fields: {}", err)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_draft_reads_fields() {
        let draft = parse_draft(br#"{"name":"Station C","max_capacity":40}"#).expect("draft");
        assert_eq!(draft.name.as_deref(), Some("Station C"));
        assert_eq!(draft.max_capacity, Some(40));
        assert!(draft.machine_id.is_none());
    }

    #[test]
    fn parse_draft_falls_back_on_garbage() {
        for body in [&b"not json"[..], b"null", b"", b"[1,2]"] {
            assert_eq!(parse_draft(body).expect("fallback"), MachineDraft::default());
        }
    }

    #[test]
    fn parse_draft_rejects_mistyped_field() {
        let err = parse_draft(br#"{"name":"Station C","max_capacity":150.0}"#)
            .expect_err("float capacity");
        assert!(matches!(err, HttpError::BadRequest(_)));
    }
}
