//! CSV export of a computed budget
//!
//! One row per category with the unrounded amount next to the formatted one.

use std::io::Write;

use crate::error::{BudgetError, BudgetResult};
use crate::presenter::ResultsRegion;

/// Write the category breakdown as CSV
pub fn export_categories_csv<W: Write>(region: &ResultsRegion, writer: W) -> BudgetResult<()> {
    let mut out = ::csv::Writer::from_writer(writer);
    let to_export = |e: ::csv::Error| BudgetError::Export(e.to_string());

    out.write_record(["Category", "Ratio", "Amount", "Formatted"])
        .map_err(to_export)?;

    for row in region.category_rows() {
        out.write_record([
            row.label.to_string(),
            format!("{:.2}", row.category.ratio()),
            row.amount.to_string(),
            row.formatted,
        ])
        .map_err(to_export)?;
    }

    out.flush().map_err(|e| BudgetError::Export(e.to_string()))?;
    Ok(())
}
