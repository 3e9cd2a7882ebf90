//! DTO for the health endpoint.

use serde::Serialize;

/// Health check result.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub database: &'static str,
}
