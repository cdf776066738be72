//! Merit-order allocator: a single greedy pass over plants ranked by cost.

use tracing::{debug, warn};

use super::types::{Dispatch, LOAD_TOLERANCE_MW, ProductionPlan, RankedPlant, round_to_tenth};
use crate::error::PlanError;

/// Assigns output to plants cheapest-first until the load is covered.
///
/// Plants are sorted by marginal cost with a stable sort, so equal-cost
/// plants keep their declaration order. Each plant then receives
/// `min(effective_pmax, remaining)` raised to its `pmin`, unless that
/// availability is already below `pmin`, in which case it stays off and the
/// remaining load is untouched. A skipped plant is never revisited.
///
/// # Arguments
///
/// * `load` - Requested load (MW)
/// * `ranked` - Plants annotated by the cost evaluator
///
/// # Errors
///
/// Returns `PlanError::Infeasible` when the load is negative or not finite,
/// or when the rounded outputs miss the load by more than [`LOAD_TOLERANCE_MW`].
/// Returns `PlanError::InvalidUnit` for a plant with a non-finite capacity
/// or cost.
pub fn allocate(load: f64, mut ranked: Vec<RankedPlant>) -> Result<ProductionPlan, PlanError> {
    if !load.is_finite() || load < 0.0 {
        warn!(load, "load must be a finite number >= 0");
        return Err(PlanError::Infeasible { load, total: 0.0 });
    }

    if let Some(bad) = ranked.iter().find(|p| {
        !(p.pmin.is_finite() && p.effective_pmax.is_finite() && p.cost_per_mwh.is_finite())
    }) {
        return Err(PlanError::invalid_unit(&bad.name, "capacity and cost must be finite"));
    }

    ranked.sort_by(|a, b| a.cost_per_mwh.total_cmp(&b.cost_per_mwh));

    let mut remaining = load;
    let mut dispatches = Vec::with_capacity(ranked.len());

    for plant in ranked {
        let p = if remaining <= 0.0 {
            0.0
        } else {
            let available = plant.effective_pmax.min(remaining);
            if available < plant.pmin {
                debug!(
                    plant = %plant.name,
                    available,
                    pmin = plant.pmin,
                    "remaining load below pmin, plant stays off"
                );
                0.0
            } else {
                let p = round_to_tenth(plant.pmin.max(available));
                remaining -= p;
                p
            }
        };

        dispatches.push(Dispatch {
            name: plant.name,
            kind: plant.kind,
            cost_per_mwh: plant.cost_per_mwh,
            p,
        });
    }

    let plan = ProductionPlan { load, dispatches };
    let total = plan.total_mw();
    // Written so that a NaN total fails the check.
    if !((total - load).abs() <= LOAD_TOLERANCE_MW) {
        warn!(load, total, "no allocation matches the requested load");
        return Err(PlanError::Infeasible { load, total });
    }

    Ok(plan)
}
