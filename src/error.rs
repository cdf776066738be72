//! Error types raised by the production-plan core.

use thiserror::Error;

/// Terminal failure of a production-plan computation.
///
/// No partial plan accompanies either variant: a request either yields a
/// complete plan or one of these errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanError {
    /// A unit's declared configuration cannot be priced or dispatched.
    #[error("invalid power plant \"{name}\": {reason}")]
    InvalidUnit { name: String, reason: String },

    /// The greedy pass finished without matching the requested load.
    #[error(
        "unable to match the requested load of {load:.1} MW with the given power plants \
         (allocated {total:.1} MW)"
    )]
    Infeasible { load: f64, total: f64 },
}

impl PlanError {
    pub(crate) fn invalid_unit(name: &str, reason: impl Into<String>) -> Self {
        Self::InvalidUnit {
            name: name.to_string(),
            reason: reason.into(),
        }
    }

    /// Short machine-readable kind, used in API error bodies.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidUnit { .. } => "InvalidUnit",
            Self::Infeasible { .. } => "Infeasible",
        }
    }
}
