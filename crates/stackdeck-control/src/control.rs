use axum::extract::{Path, State};
use reqwest::Method;
use stackdeck_core::{Action, ControlResult};

use crate::portainer::PortainerClient;
use crate::state::AppState;

/// Drives one stack toward the requested state.
///
/// Resolves the stack fresh from the remote service, short-circuits when it
/// is already in the requested state, and otherwise forwards the action call.
/// Every outcome is reported as text; failures never escape this boundary.
pub async fn control_stack(client: &PortainerClient, action: Action, stack: &str) -> ControlResult {
    let descriptor = match client.resolve_stack(stack).await {
        Ok(descriptor) => descriptor,
        Err(err) => {
            tracing::error!(stack, %action, %err, "stack lookup failed");
            return ControlResult::error(err.to_string());
        }
    };

    if descriptor.status == action.target_status() {
        return ControlResult::warning(format!("WARN: Stack {stack} is already {action}"));
    }

    let path = format!(
        "/api/stacks/{}/{action}?endpointId={}",
        descriptor.id, descriptor.endpoint_id
    );
    match client.invoke_action(Method::POST, &path).await {
        Ok(()) => {
            tracing::info!(stack, %action, "stack action accepted");
            ControlResult::ok(format!("OK: {stack} {action}"))
        }
        Err(err) => {
            tracing::error!(stack, %action, %err, "stack action failed");
            ControlResult::error(format!("ERROR: {err}"))
        }
    }
}

/// `POST /{action}/{stack}`. Always answers 200 with a plain-text body; the
/// leading token of the body distinguishes outcomes.
pub async fn handle(
    State(state): State<AppState>,
    Path((action, stack)): Path<(String, String)>,
) -> String {
    // Reject unknown keywords before any remote call is issued.
    let action = match action.parse::<Action>() {
        Ok(action) => action,
        Err(err) => {
            tracing::error!(stack = %stack, %err, "rejected control request");
            return err.to_string();
        }
    };

    control_stack(&state.portainer, action, &stack).await.message
}
