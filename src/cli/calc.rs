//! Calc CLI command
//!
//! Runs the allocator once on the figures given on the command line and
//! prints the breakdown in the requested format.

use clap::{Args, ValueEnum};
use std::io::{self, Write};

use crate::config::settings::Settings;
use crate::display::format_budget;
use crate::error::BudgetResult;
use crate::export::{export_categories_csv, export_report_json, export_report_yaml};
use crate::models::{Currency, FinancialInput};
use crate::presenter::{BudgetView, ResultsRegion};

/// Printed instead of a breakdown when the salary cannot produce one
pub const NOT_READY_NOTICE: &str =
    "Nothing to calculate: salary must be greater than zero.";

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Summary and category table
    #[default]
    Table,
    /// Full report as JSON
    Json,
    /// Full report as YAML
    Yaml,
    /// One row per category
    Csv,
}

/// Monthly figures shared by every command that computes a budget
#[derive(Args, Debug, Clone)]
pub struct BudgetArgs {
    /// Monthly gross salary
    #[arg(short, long, allow_negative_numbers = true)]
    pub salary: f64,

    /// Monthly loan payment
    #[arg(short, long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub loan: f64,

    /// Loan interest rate in percent (recorded, not used)
    #[arg(short, long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub rate: f64,

    /// Currency to format amounts in (INR, USD, GBP, EUR)
    #[arg(short, long)]
    pub currency: Option<Currency>,
}

impl BudgetArgs {
    pub fn input(&self) -> FinancialInput {
        FinancialInput::new(self.salary, self.loan, self.rate)
    }

    /// Currency from the command line, falling back to the configured one
    pub fn currency_or(&self, settings: &Settings) -> Currency {
        self.currency.unwrap_or(settings.currency)
    }

    /// Compute the budget; `None` when the salary is not positive
    pub fn results_region(&self, settings: &Settings) -> Option<ResultsRegion> {
        let mut view = BudgetView::with_input(self.input());
        view.compute();
        view.results_region(self.currency_or(settings))
    }
}

/// Arguments of the calc command
#[derive(Args, Debug, Clone)]
pub struct CalcArgs {
    #[command(flatten)]
    pub budget: BudgetArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

/// Handle the calc command, writing to stdout
pub fn handle_calc_command(settings: &Settings, args: CalcArgs) -> BudgetResult<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_calc(&mut out, settings, &args)
}

/// Write the breakdown for `args` to `out`
pub fn write_calc<W: Write>(out: &mut W, settings: &Settings, args: &CalcArgs) -> BudgetResult<()> {
    let Some(region) = args.budget.results_region(settings) else {
        writeln!(out, "{}", NOT_READY_NOTICE)?;
        return Ok(());
    };

    match args.format {
        OutputFormat::Table => write!(out, "{}", format_budget(&region))?,
        OutputFormat::Json => export_report_json(&region, out, true)?,
        OutputFormat::Yaml => export_report_yaml(&region, out)?,
        OutputFormat::Csv => export_categories_csv(&region, &mut *out)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::BudgetReport;

    fn args(salary: f64, loan: f64, format: OutputFormat) -> CalcArgs {
        CalcArgs {
            budget: BudgetArgs {
                salary,
                loan,
                rate: 5.5,
                currency: Some(Currency::Usd),
            },
            format,
        }
    }

    fn run(args: &CalcArgs) -> String {
        let mut out = Vec::new();
        write_calc(&mut out, &Settings::default(), args).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_table_output() {
        let text = run(&args(5000.0, 800.0, OutputFormat::Table));
        assert!(text.contains("Budget Breakdown (USD)"));
        assert!(text.contains("$2,950"));
        assert!(text.contains("$885"));
    }

    #[test]
    fn test_json_output() {
        let text = run(&args(5000.0, 800.0, OutputFormat::Json));
        let report: BudgetReport = serde_json::from_str(&text).unwrap();
        assert_eq!(report.allocation.food, 442.5);
    }

    #[test]
    fn test_not_ready_notice() {
        for salary in [0.0, -100.0] {
            let text = run(&args(salary, 800.0, OutputFormat::Json));
            assert_eq!(text.trim_end(), NOT_READY_NOTICE);
        }
    }

    #[test]
    fn test_currency_falls_back_to_settings() {
        let mut budget = args(5000.0, 0.0, OutputFormat::Table).budget;
        budget.currency = None;
        let settings = Settings {
            currency: Currency::Gbp,
            ..Settings::default()
        };
        assert_eq!(budget.currency_or(&settings), Currency::Gbp);
    }
}
