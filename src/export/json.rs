//! JSON export of a computed budget
//!
//! Writes the input, the derived summary, and every category with its ratio
//! and amount, tagged with a schema version.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{BudgetError, BudgetResult};
use crate::models::{
    format_currency, BudgetAllocation, BudgetSummary, Category, Currency, FinancialInput,
};
use crate::presenter::ResultsRegion;

/// Current report schema version
pub const REPORT_SCHEMA_VERSION: &str = "1.0.0";

/// One category line of a report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryLine {
    pub category: Category,
    pub label: String,
    pub ratio: f64,
    pub amount: f64,
    /// Amount as shown on screen
    pub formatted: String,
}

/// Machine-readable snapshot of a computed budget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetReport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    pub generated_at: DateTime<Utc>,

    /// Application version that produced the report
    pub app_version: String,

    pub currency: Currency,
    pub input: FinancialInput,
    pub summary: BudgetSummary,
    pub allocation: BudgetAllocation,
    pub categories: Vec<CategoryLine>,
}

impl BudgetReport {
    pub fn from_region(region: &ResultsRegion) -> Self {
        let categories = region
            .allocation
            .entries()
            .into_iter()
            .map(|(category, amount)| CategoryLine {
                category,
                label: category.label().to_string(),
                ratio: category.ratio(),
                amount,
                formatted: format_currency(amount, region.currency),
            })
            .collect();

        Self {
            schema_version: REPORT_SCHEMA_VERSION.to_string(),
            generated_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            currency: region.currency,
            input: region.input,
            summary: region.summary(),
            allocation: region.allocation,
            categories,
        }
    }
}

/// Write a report as JSON
pub fn export_report_json<W: Write>(
    region: &ResultsRegion,
    writer: &mut W,
    pretty: bool,
) -> BudgetResult<()> {
    let report = BudgetReport::from_region(region);

    if pretty {
        serde_json::to_writer_pretty(&mut *writer, &report)
    } else {
        serde_json::to_writer(&mut *writer, &report)
    }
    .map_err(|e| BudgetError::Export(e.to_string()))?;

    writeln!(writer).map_err(|e| BudgetError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presenter::BudgetView;

    fn region() -> ResultsRegion {
        let mut view = BudgetView::with_input(FinancialInput::new(5000.0, 800.0, 5.5));
        view.compute();
        view.results_region(Currency::Usd).unwrap()
    }

    #[test]
    fn test_report_contents() {
        let report = BudgetReport::from_region(&region());

        assert_eq!(report.schema_version, REPORT_SCHEMA_VERSION);
        assert_eq!(report.summary.available_income, 2950.0);
        assert_eq!(report.categories.len(), 7);
        assert_eq!(report.categories[0].amount, 885.0);
        assert_eq!(report.categories[0].formatted, "$885");
        assert_eq!(report.categories[6].label, "Remaining");
    }

    #[test]
    fn test_json_output_parses_back() {
        let mut output = Vec::new();
        export_report_json(&region(), &mut output, true).unwrap();

        let parsed: BudgetReport = serde_json::from_slice(&output).unwrap();
        assert_eq!(parsed.allocation.savings, 590.0);
        assert_eq!(parsed.input.interest_rate, 5.5);
        assert_eq!(parsed.currency, Currency::Usd);
    }
}
