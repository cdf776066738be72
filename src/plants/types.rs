//! Power plant declarations and the closed set of plant technologies.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Generation technology, which decides how a plant is priced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlantKind {
    /// Burns gas at the declared efficiency.
    GasFired,
    /// Burns kerosine at the declared efficiency.
    Turbojet,
    /// Free fuel; output capped by wind availability.
    WindTurbine,
}

impl PlantKind {
    /// Canonical wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GasFired => "gasfired",
            Self::Turbojet => "turbojet",
            Self::WindTurbine => "windturbine",
        }
    }

    /// Whether the plant burns fuel and therefore needs a positive efficiency.
    pub fn is_thermal(&self) -> bool {
        !matches!(self, Self::WindTurbine)
    }
}

impl fmt::Display for PlantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Declared plant type outside the supported set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported power plant type \"{0}\"")]
pub struct UnsupportedPlantType(pub String);

impl FromStr for PlantKind {
    type Err = UnsupportedPlantType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gasfired" => Ok(Self::GasFired),
            "turbojet" | "kerosinefired" => Ok(Self::Turbojet),
            "windturbine" => Ok(Self::WindTurbine),
            other => Err(UnsupportedPlantType(other.to_string())),
        }
    }
}

/// One generating unit as declared in a request.
///
/// `plant_type` stays a raw string so that an unknown technology reaches the
/// cost evaluator and is reported per plant instead of failing the whole
/// payload at parse time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerPlant {
    /// Identifier, unique within a request.
    pub name: String,
    /// Declared technology (`gasfired`, `turbojet`, `windturbine`).
    #[serde(rename = "type")]
    pub plant_type: String,
    /// Fuel-to-electricity efficiency (fraction).
    pub efficiency: f64,
    /// Minimum stable output when running (MW).
    pub pmin: f64,
    /// Installed capacity (MW).
    pub pmax: f64,
}

impl PowerPlant {
    /// Creates a plant declaration.
    ///
    /// # Arguments
    ///
    /// * `name` - Unique identifier
    /// * `plant_type` - Wire name of the technology
    /// * `efficiency` - Fuel efficiency (fraction, > 0 for thermal plants)
    /// * `pmin` - Minimum output when running (MW)
    /// * `pmax` - Installed capacity (MW)
    pub fn new(
        name: impl Into<String>,
        plant_type: impl Into<String>,
        efficiency: f64,
        pmin: f64,
        pmax: f64,
    ) -> Self {
        Self {
            name: name.into(),
            plant_type: plant_type.into(),
            efficiency,
            pmin,
            pmax,
        }
    }

    /// Parses the declared technology.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedPlantType` for any type outside [`PlantKind`].
    pub fn kind(&self) -> Result<PlantKind, UnsupportedPlantType> {
        self.plant_type.parse()
    }
}
