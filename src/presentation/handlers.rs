// HTTP request handlers
use crate::domain::chart::ChartSeries;
use crate::domain::record::RawRecord;
use crate::infrastructure::http_response::html_response;
use crate::infrastructure::template::render_linechart;
use crate::presentation::app_state::AppState;
use crate::presentation::errors::ApiError;
use axum::{
    body::Body,
    extract::{rejection::JsonRejection, State},
    http::{header, Response, StatusCode},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

pub async fn root_redirect() -> impl IntoResponse {
    (StatusCode::FOUND, [(header::LOCATION, "/carview")])
}

/// Accept one pushed telemetry record
pub async fn ingest(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<RawRecord>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    // A rejected payload never reaches the store
    let Json(raw) = payload?;
    state.ingest_service.ingest(raw);
    Ok(StatusCode::NO_CONTENT)
}

/// Line chart page of everything received so far
pub async fn carview(State(state): State<Arc<AppState>>) -> Result<Response<Body>, ApiError> {
    let chart = state.chart_service.chart();
    let page = render_linechart(&chart)?;
    html_response(page).map_err(ApiError::Response)
}

/// Chart series as JSON
pub async fn carview_json(State(state): State<Arc<AppState>>) -> Json<ChartSeries> {
    Json(state.chart_service.chart())
}
