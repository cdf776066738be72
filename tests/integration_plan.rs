//! End-to-end tests of cost evaluation and merit-order allocation.

mod common;

use production_plan::dispatch::{LOAD_TOLERANCE_MW, PlanSummary};
use production_plan::plants::PowerPlant;
use production_plan::{PlanError, ProductionPlan, production_plan};

use common::{gas, preset, request, turbojet, wind};

fn names(plan: &ProductionPlan) -> Vec<&str> {
    plan.dispatches.iter().map(|d| d.name.as_str()).collect()
}

#[test]
fn gas_absorbs_remainder_after_wind() {
    let req = request(
        480.0,
        60.0,
        vec![gas("gas", 0.5, 20.0, 400.0), wind("wind", 200.0)],
    );
    let plan = production_plan(&req).expect("load should be met");

    assert_eq!(names(&plan), ["wind", "gas"]);
    assert_eq!(plan.output_of("wind"), Some(120.0));
    assert_eq!(plan.output_of("gas"), Some(360.0));
    assert_eq!(plan.dispatches[1].cost_per_mwh, 40.0);
}

#[test]
fn zero_load_assigns_zero_everywhere() {
    let req = request(
        0.0,
        60.0,
        vec![
            gas("gas", 0.5, 20.0, 400.0),
            wind("wind", 200.0),
            turbojet("tj", 0.3, 16.0),
        ],
    );
    let plan = production_plan(&req).expect("zero load is feasible");

    assert_eq!(plan.dispatches.len(), 3);
    assert!(plan.dispatches.iter().all(|d| d.p == 0.0));
}

#[test]
fn single_plant_with_pmin_above_load_is_infeasible() {
    let req = request(30.0, 0.0, vec![gas("unit", 0.5, 50.0, 100.0)]);
    let err = production_plan(&req).unwrap_err();
    assert_eq!(
        err,
        PlanError::Infeasible {
            load: 30.0,
            total: 0.0
        }
    );
}

#[test]
fn wind_sorts_before_thermal_and_ties_keep_input_order() {
    let req = request(
        100.0,
        50.0,
        vec![
            gas("gas_a", 0.5, 0.0, 100.0),
            wind("wind_a", 20.0),
            gas("gas_b", 0.5, 0.0, 100.0),
            wind("wind_b", 20.0),
        ],
    );
    let plan = production_plan(&req).expect("load should be met");

    assert_eq!(names(&plan), ["wind_a", "wind_b", "gas_a", "gas_b"]);
    assert_eq!(plan.output_of("wind_a"), Some(10.0));
    assert_eq!(plan.output_of("wind_b"), Some(10.0));
    assert_eq!(plan.output_of("gas_a"), Some(80.0));
    assert_eq!(plan.output_of("gas_b"), Some(0.0));
}

#[test]
fn zero_efficiency_is_invalid_before_allocation() {
    let req = request(10.0, 0.0, vec![gas("broken", 0.0, 0.0, 100.0)]);
    let err = production_plan(&req).unwrap_err();
    assert!(matches!(err, PlanError::InvalidUnit { ref name, .. } if name == "broken"));
}

#[test]
fn unsupported_type_is_invalid() {
    let mut plants = vec![gas("gas", 0.5, 0.0, 100.0)];
    plants.push(PowerPlant::new("reactor", "nuclear", 0.33, 100.0, 1000.0));
    let err = production_plan(&request(50.0, 0.0, plants)).unwrap_err();
    assert_eq!(err.kind(), "InvalidUnit");
}

#[test]
fn duplicate_names_are_invalid() {
    let req = request(
        50.0,
        0.0,
        vec![gas("dup", 0.5, 0.0, 100.0), gas("dup", 0.4, 0.0, 100.0)],
    );
    assert!(matches!(
        production_plan(&req),
        Err(PlanError::InvalidUnit { .. })
    ));
}

#[test]
fn payload1_uses_wind_then_cheapest_gas() {
    let plan = production_plan(&preset("payload1")).expect("payload1 is feasible");

    assert_eq!(
        names(&plan),
        [
            "windpark1",
            "windpark2",
            "gasfiredbig1",
            "gasfiredbig2",
            "gasfiredsomewhatsmaller",
            "tj1"
        ]
    );
    assert_eq!(plan.output_of("windpark1"), Some(90.0));
    assert_eq!(plan.output_of("windpark2"), Some(21.6));
    assert_eq!(plan.output_of("gasfiredbig1"), Some(368.4));
    assert_eq!(plan.output_of("gasfiredbig2"), Some(0.0));
    assert_eq!(plan.output_of("gasfiredsomewhatsmaller"), Some(0.0));
    assert_eq!(plan.output_of("tj1"), Some(0.0));
    assert!((plan.total_mw() - 480.0).abs() <= LOAD_TOLERANCE_MW);
}

#[test]
fn payload2_is_infeasible_in_a_single_greedy_pass() {
    // Without wind, 20 MW remain after gasfiredbig1; both cheaper gas units
    // have a higher pmin and the turbojet tops out at 16 MW.
    let err = production_plan(&preset("payload2")).unwrap_err();
    match err {
        PlanError::Infeasible { load, total } => {
            assert_eq!(load, 480.0);
            assert!((total - 476.0).abs() < 1e-9);
        }
        other => panic!("expected Infeasible, got {other}"),
    }
}

#[test]
fn payload3_runs_both_big_gas_units() {
    let plan = production_plan(&preset("payload3")).expect("payload3 is feasible");

    assert_eq!(plan.output_of("windpark1"), Some(90.0));
    assert_eq!(plan.output_of("windpark2"), Some(21.6));
    assert_eq!(plan.output_of("gasfiredbig1"), Some(460.0));
    assert_eq!(plan.output_of("gasfiredbig2"), Some(338.4));
    assert_eq!(plan.output_of("gasfiredsomewhatsmaller"), Some(0.0));
    assert_eq!(plan.output_of("tj1"), Some(0.0));

    let summary = PlanSummary::from_plan(&plan);
    assert_eq!(summary.running_units, 4);
    assert_eq!(
        summary.marginal_unit.as_ref().map(|(name, _)| name.as_str()),
        Some("gasfiredbig2")
    );
    assert!(summary.mismatch_mw.abs() <= LOAD_TOLERANCE_MW);
}

#[test]
fn nan_load_is_rejected() {
    let req = request(f64::NAN, 0.0, vec![gas("gas", 0.5, 0.0, 100.0)]);
    assert!(matches!(
        production_plan(&req),
        Err(PlanError::Infeasible { .. })
    ));
}

#[test]
fn nan_wind_does_not_hand_the_load_to_wind() {
    let req = request(
        480.0,
        f64::NAN,
        vec![wind("wind", 10.0), gas("gas", 0.5, 0.0, 500.0)],
    );
    let err = production_plan(&req).unwrap_err();
    assert!(matches!(err, PlanError::InvalidUnit { ref name, .. } if name == "wind"));
}
