pub mod auth;
pub mod config;
pub mod control;
pub mod portainer;
pub mod state;
pub mod web;

use axum::{
    Json, Router, middleware,
    routing::{get, post},
};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
struct HealthzResponse {
    status: &'static str,
    version: &'static str,
}

async fn healthz() -> Json<HealthzResponse> {
    Json(HealthzResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Assembles the full HTTP surface. The auth layer wraps every route,
/// including `/healthz`; it is a no-op when no credentials are configured.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(web::index))
        .route("/healthz", get(healthz))
        .route("/:action/:stack", post(control::handle))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_operator,
        ))
        .with_state(state)
}
