//! Core dispatch types: priced plants, per-plant dispatch, and the resulting plan.

use std::fmt;

use crate::plants::PlantKind;

/// Maximum accepted gap between the allocated total and the requested load (MW).
pub const LOAD_TOLERANCE_MW: f64 = 0.1;

/// A plant annotated by the cost evaluator, ready for merit-order ranking.
///
/// Built once per request and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedPlant {
    /// Plant identifier.
    pub name: String,
    /// Parsed technology.
    pub kind: PlantKind,
    /// Minimum output when running (MW).
    pub pmin: f64,
    /// Deliverable capacity after availability scaling (MW).
    pub effective_pmax: f64,
    /// Marginal cost of one MWh (€/MWh).
    pub cost_per_mwh: f64,
}

/// Output assigned to one plant.
#[derive(Debug, Clone, PartialEq)]
pub struct Dispatch {
    /// Plant identifier.
    pub name: String,
    /// Plant technology.
    pub kind: PlantKind,
    /// Marginal cost used for ranking (€/MWh).
    pub cost_per_mwh: f64,
    /// Assigned output (MW), rounded to one decimal.
    pub p: f64,
}

impl Dispatch {
    /// Whether the plant was given any output.
    pub fn is_running(&self) -> bool {
        self.p > 0.0
    }
}

impl fmt::Display for Dispatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<24} {:<12} {:>9.3} €/MWh {:>8.1} MW",
            self.name, self.kind, self.cost_per_mwh, self.p
        )
    }
}

/// Complete, load-matching production plan in merit order.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductionPlan {
    /// Requested load (MW).
    pub load: f64,
    /// One entry per input plant, cheapest first.
    pub dispatches: Vec<Dispatch>,
}

impl ProductionPlan {
    /// Sum of assigned outputs (MW).
    pub fn total_mw(&self) -> f64 {
        self.dispatches.iter().map(|d| d.p).sum()
    }

    /// Looks up the output assigned to a plant by name.
    pub fn output_of(&self, name: &str) -> Option<f64> {
        self.dispatches.iter().find(|d| d.name == name).map(|d| d.p)
    }
}

impl fmt::Display for ProductionPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Production Plan ({:.1} MW) ---", self.load)?;
        for d in &self.dispatches {
            writeln!(f, "{d}")?;
        }
        Ok(())
    }
}

/// Rounds to one decimal place, half away from zero.
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
