//! Request handlers for the API endpoints.

use axum::Json;
use axum::extract::rejection::JsonRejection;

use super::error::ApiError;
use super::types::{HealthResponse, PlanEntryResponse};
use crate::dispatch::production_plan;
use crate::request::ProductionPlanRequest;

/// Computes the production plan for the posted payload.
///
/// `POST /productionplan` → 200 + `Vec<PlanEntryResponse>` JSON, in merit order
/// `POST /productionplan` with an infeasible load → 400 + `ErrorResponse`
pub async fn post_production_plan(
    payload: Result<Json<ProductionPlanRequest>, JsonRejection>,
) -> Result<Json<Vec<PlanEntryResponse>>, ApiError> {
    let Json(request) = payload?;

    let errors = request.validate();
    if !errors.is_empty() {
        return Err(ApiError::Validation(errors));
    }

    let plan = production_plan(&request)?;
    Ok(Json(plan.dispatches.iter().map(PlanEntryResponse::from).collect()))
}

/// `GET /health` → 200 + `HealthResponse` JSON
pub async fn get_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
