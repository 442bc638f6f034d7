use axum::response::{IntoResponse, Response};
use axum::extract::State;
use serde::Serialize;

use crate::state::AppState;
use crate::utils::response::success;

pub mod events;
pub mod recommendations;

pub use events::{get_event, list_events, quote_event};
pub use recommendations::{recommendations, trending_events};

#[derive(Serialize)]
struct HealthPayload {
    status: &'static str,
    service: &'static str,
    events: usize,
}

pub async fn health_check(State(state): State<AppState>) -> Response {
    let payload = HealthPayload {
        status: "ok",
        service: "tufan-api",
        events: state.catalog.len(),
    };

    success(payload, "Health check successful").into_response()
}
