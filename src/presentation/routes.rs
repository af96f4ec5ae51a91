// Router wiring
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    convert, export_rates, get_chart, get_dashboard, health_check, initial_conversion,
    list_currencies, query_rates, select_currency, swap_currencies, toggle_direction,
};
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(health_check))
        .route("/api/currencies", get(list_currencies))
        .route("/api/dashboard", get(get_dashboard))
        .route("/api/rates/:code", get(query_rates))
        .route("/api/rates/:code/export", get(export_rates))
        .route("/api/charts/:code", get(get_chart))
        .route("/api/converter/initial", get(initial_conversion))
        .route("/api/converter/convert", post(convert))
        .route("/api/converter/toggle", post(toggle_direction))
        .route("/api/converter/swap", post(swap_currencies))
        .route("/api/converter/select", post(select_currency))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
