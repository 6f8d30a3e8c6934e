// Errors surfaced at the HTTP boundary
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("malformed telemetry payload: {0}")]
    MalformedPayload(#[from] JsonRejection),

    #[error("failed to render chart: {0}")]
    Render(#[from] serde_json::Error),

    #[error("failed to build response ({0})")]
    Response(StatusCode),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MalformedPayload(rejection) => rejection.status(),
            ApiError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Response(status) => *status,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{}", self);
        } else {
            tracing::warn!("{}", self);
        }
        (status, self.to_string()).into_response()
    }
}
