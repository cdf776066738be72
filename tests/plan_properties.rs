//! Property tests for merit-order plan invariants.

use std::collections::HashSet;

use proptest::prelude::*;

use production_plan::plants::{Fuels, PowerPlant};
use production_plan::request::ProductionPlanRequest;
use production_plan::{PlanError, production_plan};

/// Largest deviation from a plant's bounds introduced by one-decimal rounding.
const ROUNDING_SLACK: f64 = 0.05 + 1e-9;

fn plant_strategy() -> impl Strategy<Value = (usize, f64, f64, f64)> {
    (0usize..3, 0.1f64..1.0, 0.0f64..100.0, 0.0f64..400.0)
}

fn request_strategy() -> impl Strategy<Value = ProductionPlanRequest> {
    (
        0.0f64..1500.0,
        (1.0f64..100.0, 1.0f64..100.0, 0.0f64..100.0),
        prop::collection::vec(plant_strategy(), 1..8),
    )
        .prop_map(|(load, (gas, kerosine, wind), specs)| {
            let plants = specs
                .into_iter()
                .enumerate()
                .map(|(i, (kind, efficiency, pmin, span))| {
                    let plant_type = ["gasfired", "turbojet", "windturbine"][kind];
                    let pmin = if kind == 2 { 0.0 } else { pmin };
                    PowerPlant::new(format!("unit{i}"), plant_type, efficiency, pmin, pmin + span)
                })
                .collect();
            ProductionPlanRequest::new(load, Fuels::new(gas, kerosine, 20.0, wind), plants)
        })
}

fn effective_pmax(plant: &PowerPlant, fuels: &Fuels) -> f64 {
    if plant.plant_type == "windturbine" {
        plant.pmax * fuels.wind / 100.0
    } else {
        plant.pmax
    }
}

proptest! {
    #[test]
    fn plan_respects_invariants(req in request_strategy()) {
        match production_plan(&req) {
            Ok(plan) => {
                prop_assert_eq!(plan.dispatches.len(), req.powerplants.len());
                let distinct: HashSet<&str> =
                    plan.dispatches.iter().map(|d| d.name.as_str()).collect();
                prop_assert_eq!(distinct.len(), req.powerplants.len());

                let total: f64 = plan.dispatches.iter().map(|d| d.p).sum();
                prop_assert!((total - req.load).abs() <= 0.1);

                for pair in plan.dispatches.windows(2) {
                    prop_assert!(pair[0].cost_per_mwh <= pair[1].cost_per_mwh);
                }

                let mut last_index_at_cost: Option<(f64, usize)> = None;
                for d in &plan.dispatches {
                    let index = req
                        .powerplants
                        .iter()
                        .position(|p| p.name == d.name)
                        .expect("every dispatch names an input plant");
                    if let Some((cost, prev)) = last_index_at_cost {
                        if cost == d.cost_per_mwh {
                            prop_assert!(prev < index, "ties must keep input order");
                        }
                    }
                    last_index_at_cost = Some((d.cost_per_mwh, index));

                    let plant = &req.powerplants[index];
                    prop_assert!(d.p >= 0.0);
                    if d.p != 0.0 {
                        prop_assert!(d.p >= plant.pmin - ROUNDING_SLACK);
                        prop_assert!(d.p <= effective_pmax(plant, &req.fuels) + ROUNDING_SLACK);
                    }
                }
            }
            Err(PlanError::Infeasible { load, total }) => {
                prop_assert_eq!(load, req.load);
                prop_assert!((total - load).abs() > 0.1);
            }
            Err(other) => prop_assert!(false, "valid fleet rejected: {}", other),
        }
    }

    #[test]
    fn wind_always_precedes_thermal(req in request_strategy()) {
        if let Ok(plan) = production_plan(&req) {
            let first_thermal = plan
                .dispatches
                .iter()
                .position(|d| d.kind.is_thermal())
                .unwrap_or(plan.dispatches.len());
            prop_assert!(plan.dispatches[first_thermal..].iter().all(|d| d.kind.is_thermal()));
        }
    }

    #[test]
    fn non_positive_efficiency_is_always_invalid(efficiency in -1.0f64..=0.0, load in 0.0f64..500.0) {
        let req = ProductionPlanRequest::new(
            load,
            Fuels::new(20.0, 50.0, 20.0, 50.0),
            vec![PowerPlant::new("gas", "gasfired", efficiency, 0.0, 100.0)],
        );
        let is_invalid_unit = matches!(production_plan(&req), Err(PlanError::InvalidUnit { .. }));
        prop_assert!(is_invalid_unit);
    }
}
