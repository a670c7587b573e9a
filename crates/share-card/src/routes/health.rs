//! Liveness probe for load balancers and the CDN origin check.

use axum::Json;
use serde::Serialize;

/// Body of `GET /health`.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    status: &'static str,
    service: &'static str,
    version: &'static str,
}

impl HealthResponse {
    /// The service is stateless, so being able to answer means it is healthy.
    fn ok() -> Self {
        Self {
            status: "ok",
            service: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
