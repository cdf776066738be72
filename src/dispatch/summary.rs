//! Post-hoc summary of a production plan.

use std::fmt;

use super::types::ProductionPlan;

/// Aggregate figures derived from a complete plan.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanSummary {
    /// Requested load (MW).
    pub load_mw: f64,
    /// Sum of assigned outputs (MW).
    pub total_mw: f64,
    /// `total_mw - load_mw`, within the load tolerance for any returned plan.
    pub mismatch_mw: f64,
    /// Number of plants with non-zero output.
    pub running_units: usize,
    /// Generation cost of the plan (€/h, sum of `p * cost_per_mwh`).
    pub hourly_cost: f64,
    /// Most expensive running plant and its marginal cost, if any plant runs.
    pub marginal_unit: Option<(String, f64)>,
}

impl PlanSummary {
    /// Computes the summary from a plan.
    pub fn from_plan(plan: &ProductionPlan) -> Self {
        let total_mw = plan.total_mw();
        let running: Vec<_> = plan.dispatches.iter().filter(|d| d.is_running()).collect();
        let hourly_cost = running.iter().map(|d| d.p * d.cost_per_mwh).sum::<f64>();
        // Dispatches are in merit order, so the last running one sets the price.
        let marginal_unit = running
            .last()
            .map(|d| (d.name.clone(), d.cost_per_mwh));

        Self {
            load_mw: plan.load,
            total_mw,
            mismatch_mw: total_mw - plan.load,
            running_units: running.len(),
            hourly_cost,
            marginal_unit,
        }
    }
}

impl fmt::Display for PlanSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Plan Summary ---")?;
        writeln!(f, "Requested load:    {:.1} MW", self.load_mw)?;
        writeln!(f, "Allocated output:  {:.1} MW", self.total_mw)?;
        writeln!(f, "Mismatch:          {:+.2} MW", self.mismatch_mw)?;
        writeln!(f, "Running units:     {}", self.running_units)?;
        writeln!(f, "Generation cost:   {:.2} €/h", self.hourly_cost)?;
        match &self.marginal_unit {
            Some((name, cost)) => write!(f, "Marginal unit:     {name} ({cost:.3} €/MWh)"),
            None => write!(f, "Marginal unit:     none"),
        }
    }
}
