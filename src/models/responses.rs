use serde::{Deserialize, Serialize};
use crate::models::domain::{GenderResult, Title};

/// Response for the genderise endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenderiseResponse {
    pub results: Vec<GenderResult>,
}

/// Response for the title endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TitleResponse {
    #[serde(rename = "firstName")]
    pub first_name: String,
    pub title: Title,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
