//! Shared test fixtures for integration tests.

#![allow(dead_code)]

use production_plan::plants::{Fuels, PowerPlant};
use production_plan::request::ProductionPlanRequest;

/// Gas at 20 €/MWh, kerosine at 50 €/MWh, CO2 at 20 €/ton, with the given wind.
pub fn fuels_with_wind(wind_pct: f64) -> Fuels {
    Fuels::new(20.0, 50.0, 20.0, wind_pct)
}

pub fn wind(name: &str, pmax: f64) -> PowerPlant {
    PowerPlant::new(name, "windturbine", 1.0, 0.0, pmax)
}

pub fn gas(name: &str, efficiency: f64, pmin: f64, pmax: f64) -> PowerPlant {
    PowerPlant::new(name, "gasfired", efficiency, pmin, pmax)
}

pub fn turbojet(name: &str, efficiency: f64, pmax: f64) -> PowerPlant {
    PowerPlant::new(name, "turbojet", efficiency, 0.0, pmax)
}

/// Request with the given load, fleet, and wind availability.
pub fn request(load: f64, wind_pct: f64, plants: Vec<PowerPlant>) -> ProductionPlanRequest {
    ProductionPlanRequest::new(load, fuels_with_wind(wind_pct), plants)
}

/// Load a built-in sample payload, panicking on an unknown name.
pub fn preset(name: &str) -> ProductionPlanRequest {
    ProductionPlanRequest::from_preset(name)
        .unwrap_or_else(|e| panic!("preset \"{name}\" should load: {e}"))
}
