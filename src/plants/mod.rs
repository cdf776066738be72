//! Generation fleet description: power plants and the fuel market they run on.

/// Fuel prices and wind availability for one request.
pub mod fuels;
pub mod types;

pub use fuels::Fuels;
pub use types::{PlantKind, PowerPlant, UnsupportedPlantType};
