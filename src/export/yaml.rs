//! YAML export of a computed budget

use std::io::Write;

use crate::error::{BudgetError, BudgetResult};
use crate::export::json::BudgetReport;
use crate::presenter::ResultsRegion;

/// Write a report as YAML with a short header comment
pub fn export_report_yaml<W: Write>(region: &ResultsRegion, writer: &mut W) -> BudgetResult<()> {
    let report = BudgetReport::from_region(region);

    writeln!(writer, "# Budget Brain breakdown")
        .and_then(|_| writeln!(writer, "# Generated: {}", report.generated_at))
        .map_err(|e| BudgetError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &report).map_err(|e| BudgetError::Export(e.to_string()))?;

    Ok(())
}
