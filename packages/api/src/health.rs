// ABOUTME: Liveness probe
// ABOUTME: Reports service name, crate version, and the current unix time

use std::time::{SystemTime, UNIX_EPOCH};

use axum::Json;
use serde::{Deserialize, Serialize};

pub const SERVICE_NAME: &str = "archstudio";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub service: String,
    pub version: String,
    pub timestamp: u64,
}

pub async fn health_check() -> Json<HealthStatus> {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default();

    Json(HealthStatus {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp,
    })
}
