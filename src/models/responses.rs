use serde::{Deserialize, Serialize};

use crate::models::domain::Provider;

/// Response for the rank providers endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankProvidersResponse {
    pub category: String,
    pub providers: Vec<Provider>,
    #[serde(rename = "totalResults")]
    pub total_results: usize,
}

/// Known category keys
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoriesResponse {
    pub categories: Vec<String>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    #[serde(rename = "catalogProviders")]
    pub catalog_providers: usize,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
