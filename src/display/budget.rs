//! Budget display formatting
//!
//! Formats a computed budget for terminal output: a summary block followed by
//! a table of the seven categories.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use crate::presenter::ResultsRegion;

/// Width of the share bar column
const BAR_WIDTH: usize = 20;

#[derive(Tabled)]
struct CategoryTableRow {
    #[tabled(rename = "Category")]
    label: &'static str,
    #[tabled(rename = "Ratio")]
    ratio: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Share")]
    share: String,
}

/// Format the summary cards as aligned label/value lines
pub fn format_summary(region: &ResultsRegion) -> String {
    let cards = region.summary_cards();
    let label_width = cards.iter().map(|c| c.label.len()).max().unwrap_or(0);

    let mut output = String::new();
    for card in cards {
        output.push_str(&format!(
            "{:<label_width$}  {:>14}\n",
            card.label,
            card.formatted,
            label_width = label_width,
        ));
    }
    output
}

/// Format the category breakdown as a table
pub fn format_category_table(region: &ResultsRegion) -> String {
    let rows = region.category_rows();
    let max_amount = rows.iter().map(|r| r.amount).fold(0.0_f64, f64::max);

    let table_rows: Vec<CategoryTableRow> = rows
        .into_iter()
        .map(|row| CategoryTableRow {
            label: row.label,
            ratio: format!("{:.0}%", row.category.ratio() * 100.0),
            amount: row.formatted,
            share: format_bar(row.amount, max_amount, BAR_WIDTH),
        })
        .collect();

    Table::new(table_rows)
        .with(Style::rounded())
        .modify(Columns::new(1..3), Alignment::right())
        .to_string()
}

/// Summary block and category table together
pub fn format_budget(region: &ResultsRegion) -> String {
    let mut output = String::new();
    output.push_str(&format!("Budget Breakdown ({})\n", region.currency));
    output.push_str(&separator(40));
    output.push('\n');
    output.push_str(&format_summary(region));
    output.push('\n');
    output.push_str(&format_category_table(region));
    output.push('\n');
    output
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}
