use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
    pub timestamp: DateTime<Utc>,
    pub data_source: String,
    pub request_id: String,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T, data_source: impl Into<String>) -> Self {
        Self {
            success: true,
            data,
            timestamp: Utc::now(),
            data_source: data_source.into(),
            request_id: Uuid::new_v4().to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
    pub network_rpc: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_block: Option<u64>,
    pub uptime_seconds: u64,
    pub timestamp: DateTime<Utc>,
}
