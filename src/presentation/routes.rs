// Router construction
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    carview, carview_json, health_check, ingest, root_redirect,
};
use axum::{
    routing::{get, put},
    Router,
};
use std::sync::Arc;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root_redirect).put(ingest))
        .route("/data", put(ingest))
        .route("/data/", put(ingest))
        .route("/carview", get(carview))
        .route("/carview.json", get(carview_json))
        .route("/healthz", get(health_check))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
