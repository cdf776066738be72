//! Merit-order production planning for a fleet of power plants.

#[cfg(feature = "api")]
pub mod api;
/// Service configuration loaded from TOML.
pub mod config;
pub mod dispatch;
pub mod error;
pub mod io;
pub mod plants;
pub mod request;
/// Tracing subscriber and shutdown signal.
pub mod telemetry;

pub use dispatch::{PlanSummary, ProductionPlan, production_plan};
pub use error::PlanError;
pub use request::ProductionPlanRequest;
