use axum::body::Body;
use axum::http::Request;
use axum::{routing::get, Router};
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::config::{create_cors_layer, create_security_headers_layer, UuidRequestId, REQUEST_ID_HEADER};
use crate::handlers::{
    get_event, health_check, list_events, quote_event, recommendations, trending_events,
};
use crate::state::AppState;

pub fn create_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/events", get(list_events))
        .route("/events/trending", get(trending_events))
        .route("/events/:id", get(get_event))
        .route("/events/:id/quote", get(quote_event))
        .route("/recommendations", get(recommendations))
        .with_state(state)
        .layer(create_security_headers_layer())
        .layer(create_cors_layer())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
            let request_id = request
                .headers()
                .get(REQUEST_ID_HEADER)
                .and_then(|value| value.to_str().ok())
                .unwrap_or("-");

            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                request_id,
            )
        }))
        .layer(SetRequestIdLayer::x_request_id(UuidRequestId))
}
