//! API response types.

use serde::Serialize;

use crate::dispatch::Dispatch;

/// One plant's output in the response array.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanEntryResponse {
    /// Plant identifier.
    pub name: String,
    /// Assigned output (MW, one decimal).
    pub p: f64,
}

impl From<&Dispatch> for PlanEntryResponse {
    fn from(d: &Dispatch) -> Self {
        Self {
            name: d.name.clone(),
            p: d.p,
        }
    }
}

/// Liveness probe body.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Error response body for 4xx errors.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error kind (`InvalidUnit`, `Infeasible`, `ValidationError`, `MalformedPayload`).
    pub error: String,
    /// Human-readable description.
    pub detail: String,
}
