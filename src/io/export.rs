//! CSV export for production plans.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::dispatch::ProductionPlan;

/// Column header for CSV plan export.
const HEADER: &str = "name,type,cost_per_mwh,p_mw";

/// Exports a production plan to a CSV file at the given path.
///
/// Writes a header row followed by one row per plant, in merit order.
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_csv(plan: &ProductionPlan, path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let buf = io::BufWriter::new(file);
    write_csv(plan, buf)
}

/// Writes a production plan as CSV to any writer.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_csv(plan: &ProductionPlan, writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    wtr.write_record(HEADER.split(','))?;

    for d in &plan.dispatches {
        wtr.write_record(&[
            d.name.clone(),
            d.kind.to_string(),
            format!("{:.3}", d.cost_per_mwh),
            format!("{:.1}", d.p),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
