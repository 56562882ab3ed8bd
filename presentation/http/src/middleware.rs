//! Middleware for the HTTP server

use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{debug, info, info_span, warn, Instrument};
use uuid::Uuid;

pub const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// Request logging middleware
///
/// Tags each request with a fresh id, echoed back in `x-request-id`. Only the
/// path is logged, never the query string.
pub async fn request_logging(request: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4().to_string();
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let start_time = Instant::now();

    let span = info_span!("request", id = %request_id, %method, %path);

    let mut response = async {
        debug!("Incoming request");
        next.run(request).await
    }
    .instrument(span.clone())
    .await;

    let duration = start_time.elapsed();
    let status = response.status();

    span.in_scope(|| {
        if status.is_success() {
            info!("{} {} - {} ({:?})", method, path, status, duration);
        } else {
            warn!("{} {} - {} ({:?})", method, path, status, duration);
        }
    });

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    response
}
