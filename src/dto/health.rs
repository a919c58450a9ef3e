use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body of `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthDto {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub message: String,
    pub version: String,
}

impl HealthDto {
    pub fn healthy() -> Self {
        Self {
            status: "Healthy".to_string(),
            timestamp: Utc::now(),
            message: "Customer Lead API is running successfully!".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
