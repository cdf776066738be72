//! Merit-order dispatch: cost evaluation followed by greedy allocation.

/// Per-plant marginal cost and deliverable capacity.
pub mod cost;
pub mod merit_order;
pub mod summary;
pub mod types;

use tracing::{info, info_span};

use crate::error::PlanError;
use crate::request::ProductionPlanRequest;

pub use cost::{evaluate_fleet, evaluate_plant};
pub use merit_order::allocate;
pub use summary::PlanSummary;
pub use types::{Dispatch, LOAD_TOLERANCE_MW, ProductionPlan, RankedPlant};

/// Computes the production plan for one request.
///
/// Prices every plant, then allocates the load in merit order. Either a
/// complete plan matching the load within [`LOAD_TOLERANCE_MW`] is returned
/// or the first error encountered.
///
/// # Examples
///
/// ```
/// use production_plan::dispatch::production_plan;
/// use production_plan::plants::{Fuels, PowerPlant};
/// use production_plan::request::ProductionPlanRequest;
///
/// let request = ProductionPlanRequest::new(
///     480.0,
///     Fuels::new(20.0, 50.0, 0.0, 60.0),
///     vec![
///         PowerPlant::new("wind", "windturbine", 1.0, 0.0, 200.0),
///         PowerPlant::new("gas", "gasfired", 0.5, 20.0, 400.0),
///     ],
/// );
/// let plan = production_plan(&request).unwrap();
/// assert_eq!(plan.output_of("wind"), Some(120.0));
/// assert_eq!(plan.output_of("gas"), Some(360.0));
/// ```
///
/// # Errors
///
/// `PlanError::InvalidUnit` if a plant cannot be priced, `PlanError::Infeasible`
/// if the greedy pass cannot match the load.
pub fn production_plan(request: &ProductionPlanRequest) -> Result<ProductionPlan, PlanError> {
    let span = info_span!(
        "production_plan",
        load = request.load,
        plants = request.powerplants.len()
    );
    let _guard = span.enter();

    let ranked = evaluate_fleet(&request.powerplants, &request.fuels)?;
    let plan = allocate(request.load, ranked)?;
    info!(total = plan.total_mw(), "production plan computed");
    Ok(plan)
}
