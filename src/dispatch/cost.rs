//! Cost evaluator: prices each plant and caps its output for the current market.

use std::collections::HashSet;

use tracing::debug;

use super::types::RankedPlant;
use crate::error::PlanError;
use crate::plants::{Fuels, PlantKind, PowerPlant};

/// Derives the marginal cost and deliverable capacity of one plant.
///
/// - Wind: free, capacity scaled by wind availability.
/// - Gas / turbojet: fuel price divided by efficiency, full capacity.
///
/// The CO2 price is carried in [`Fuels`] but does not enter the cost.
///
/// # Errors
///
/// Returns `PlanError::InvalidUnit` for an unsupported type, inconsistent
/// bounds, a non-positive efficiency on a thermal plant, a wind availability
/// outside 0–100 on a wind plant, or a non-finite cost.
pub fn evaluate_plant(plant: &PowerPlant, fuels: &Fuels) -> Result<RankedPlant, PlanError> {
    let kind = plant
        .kind()
        .map_err(|e| PlanError::invalid_unit(&plant.name, e.to_string()))?;

    if !plant.pmin.is_finite() || !plant.pmax.is_finite() {
        return Err(PlanError::invalid_unit(&plant.name, "pmin and pmax must be finite"));
    }
    if plant.pmin < 0.0 || plant.pmax < 0.0 {
        return Err(PlanError::invalid_unit(&plant.name, "pmin and pmax must be >= 0"));
    }
    if plant.pmin > plant.pmax {
        return Err(PlanError::invalid_unit(
            &plant.name,
            format!("pmin ({}) must be <= pmax ({})", plant.pmin, plant.pmax),
        ));
    }
    if kind.is_thermal() && !(plant.efficiency.is_finite() && plant.efficiency > 0.0) {
        return Err(PlanError::invalid_unit(
            &plant.name,
            format!("efficiency must be > 0, got {}", plant.efficiency),
        ));
    }

    if kind == PlantKind::WindTurbine && !(0.0..=100.0).contains(&fuels.wind) {
        return Err(PlanError::invalid_unit(
            &plant.name,
            format!("wind availability must be in [0, 100], got {}", fuels.wind),
        ));
    }

    let (cost_per_mwh, effective_pmax) = match kind {
        PlantKind::WindTurbine => (0.0, plant.pmax * fuels.wind_fraction()),
        PlantKind::GasFired => (fuels.gas / plant.efficiency, plant.pmax),
        PlantKind::Turbojet => (fuels.kerosine / plant.efficiency, plant.pmax),
    };

    if !cost_per_mwh.is_finite() {
        return Err(PlanError::invalid_unit(
            &plant.name,
            format!("fuel price yields a non-finite cost ({cost_per_mwh})"),
        ));
    }

    Ok(RankedPlant {
        name: plant.name.clone(),
        kind,
        pmin: plant.pmin,
        effective_pmax,
        cost_per_mwh,
    })
}

/// Evaluates a whole fleet in declaration order.
///
/// Stops at the first invalid plant. Names must be unique within the fleet.
///
/// # Errors
///
/// Returns `PlanError::InvalidUnit` for the first plant that fails
/// [`evaluate_plant`] or repeats an earlier name.
pub fn evaluate_fleet(plants: &[PowerPlant], fuels: &Fuels) -> Result<Vec<RankedPlant>, PlanError> {
    let mut seen = HashSet::with_capacity(plants.len());
    let mut ranked = Vec::with_capacity(plants.len());

    for plant in plants {
        if !seen.insert(plant.name.as_str()) {
            return Err(PlanError::invalid_unit(&plant.name, "duplicate plant name"));
        }
        let priced = evaluate_plant(plant, fuels)?;
        debug!(
            plant = %priced.name,
            kind = %priced.kind,
            cost_per_mwh = priced.cost_per_mwh,
            effective_pmax = priced.effective_pmax,
            "priced plant"
        );
        ranked.push(priced);
    }

    Ok(ranked)
}
