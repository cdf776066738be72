//! Production-plan request payload, adapter-level validation, and built-in samples.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::plants::{Fuels, PowerPlant};

/// One production-plan request: the load to serve and the fleet to serve it with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionPlanRequest {
    /// Load to be produced (MWh over the period, non-negative).
    pub load: f64,
    /// Fuel prices and wind availability.
    pub fuels: Fuels,
    /// Fleet in declaration order.
    pub powerplants: Vec<PowerPlant>,
}

/// Payload shape violation detected before the core runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Dotted field path (e.g., `"fuels.wind(%)"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Failure to obtain a request payload.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("cannot read payload \"{}\": {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid payload JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown preset \"{name}\", available: {}", ProductionPlanRequest::PRESETS.join(", "))]
    UnknownPreset { name: String },
}

impl ProductionPlanRequest {
    pub fn new(load: f64, fuels: Fuels, powerplants: Vec<PowerPlant>) -> Self {
        Self {
            load,
            fuels,
            powerplants,
        }
    }

    /// Parses a request from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns `RequestError::Json` if the payload is malformed.
    pub fn from_json_str(s: &str) -> Result<Self, RequestError> {
        Ok(serde_json::from_str(s)?)
    }

    /// Parses a request from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns a `RequestError` if the file cannot be read or is malformed.
    pub fn from_json_file(path: &Path) -> Result<Self, RequestError> {
        let content = fs::read_to_string(path).map_err(|source| RequestError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&content)
    }

    /// Checks the numeric shape of the payload and returns every violation.
    ///
    /// Per-plant configuration (efficiency, bounds, type) is left to the cost
    /// evaluator, which reports it as `PlanError::InvalidUnit`.
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();

        if !self.load.is_finite() || self.load < 0.0 {
            errors.push(FieldError {
                field: "load".into(),
                message: "must be a finite number >= 0".into(),
            });
        }

        let f = &self.fuels;
        for (field, value) in [
            ("fuels.gas(euro/MWh)", f.gas),
            ("fuels.kerosine(euro/MWh)", f.kerosine),
            ("fuels.co2(euro/ton)", f.co2),
        ] {
            if !value.is_finite() {
                errors.push(FieldError {
                    field: field.into(),
                    message: "must be a finite number".into(),
                });
            }
        }
        if !(0.0..=100.0).contains(&f.wind) {
            errors.push(FieldError {
                field: "fuels.wind(%)".into(),
                message: "must be in [0, 100]".into(),
            });
        }

        errors
    }

    /// Available sample payload names.
    pub const PRESETS: &[&str] = &["payload1", "payload2", "payload3"];

    /// Loads a built-in sample payload.
    ///
    /// All samples share one six-plant fleet:
    /// - `payload1`: 480 MW, 60% wind
    /// - `payload2`: 480 MW, no wind
    /// - `payload3`: 910 MW, 60% wind
    ///
    /// # Errors
    ///
    /// Returns `RequestError::UnknownPreset` if the name is not listed in [`Self::PRESETS`].
    pub fn from_preset(name: &str) -> Result<Self, RequestError> {
        match name {
            "payload1" => Ok(Self::new(480.0, Fuels::new(13.4, 50.8, 20.0, 60.0), sample_fleet())),
            "payload2" => Ok(Self::new(480.0, Fuels::new(13.4, 50.8, 20.0, 0.0), sample_fleet())),
            "payload3" => Ok(Self::new(910.0, Fuels::new(13.4, 50.8, 20.0, 60.0), sample_fleet())),
            _ => Err(RequestError::UnknownPreset {
                name: name.to_string(),
            }),
        }
    }
}

fn sample_fleet() -> Vec<PowerPlant> {
    vec![
        PowerPlant::new("gasfiredbig1", "gasfired", 0.53, 100.0, 460.0),
        PowerPlant::new("gasfiredbig2", "gasfired", 0.53, 100.0, 460.0),
        PowerPlant::new("gasfiredsomewhatsmaller", "gasfired", 0.37, 40.0, 210.0),
        PowerPlant::new("tj1", "turbojet", 0.3, 0.0, 16.0),
        PowerPlant::new("windpark1", "windturbine", 1.0, 0.0, 150.0),
        PowerPlant::new("windpark2", "windturbine", 1.0, 0.0, 36.0),
    ]
}
