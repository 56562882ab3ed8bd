//! Health check handlers

use crate::ApiResponse;
use axum::response::Json;
use serde::Serialize;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
    pub timestamp: String,
}

/// Liveness endpoint; does not call upstream providers
pub async fn health_check() -> Json<ApiResponse<HealthStatus>> {
    let health = HealthStatus {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    };
    Json(ApiResponse::success(health))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_check_reports_healthy() {
        let Json(response) = health_check().await;
        assert!(response.success);

        let health = response.data.unwrap();
        assert_eq!(health.status, "healthy");
        assert_eq!(health.version, env!("CARGO_PKG_VERSION"));
    }
}
