// HTTP response utilities for rendered pages
use axum::{
    body::Body,
    http::{header, HeaderValue, Response, StatusCode},
};

/// Build an HTML response with an explicit content length
pub fn html_response(page: String) -> Result<Response<Body>, StatusCode> {
    let length = HeaderValue::from(page.len());

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "text/html; charset=utf-8")
        .header(header::CONTENT_LENGTH, length)
        .body(Body::from(page))
        .map_err(|e| {
            tracing::error!("Response build error: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })
}
