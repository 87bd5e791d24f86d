//! Budget view state
//!
//! `BudgetView` is the single state container behind the interface. It owns
//! the current input record and the current allocation, and nothing else.

use tracing::{debug, info};

use crate::error::BudgetResult;
use crate::models::{
    format_currency, parse_amount, BudgetAllocation, BudgetSummary, Category, Currency,
    FinancialInput, InputField, RgbColor,
};
use crate::services::allocate;

use super::chart::{pie_slices, PieSlice};

/// Static advice shown under the category list
pub const TIPS: [&str; 4] = [
    "Save at least 20% of your available income",
    "Keep housing under 30% of your net income",
    "Maintain an emergency fund of 3-6 months",
    "Invest in low-cost, diversified options",
];

/// Visual tone of a summary card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardTone {
    Income,
    Debt,
    Available,
}

/// One of the three summary cards
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryCard {
    pub label: &'static str,
    pub amount: f64,
    pub formatted: String,
    pub tone: CardTone,
}

/// One row of the category list
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryRow {
    pub category: Category,
    pub label: &'static str,
    pub amount: f64,
    pub formatted: String,
    pub color: RgbColor,
}

/// Everything needed to draw the results panel
///
/// Only obtainable from a view that holds an allocation, so rendering and
/// exporting a results region always has something to show.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResultsRegion {
    pub input: FinancialInput,
    pub allocation: BudgetAllocation,
    pub currency: Currency,
}

impl ResultsRegion {
    pub fn summary(&self) -> BudgetSummary {
        BudgetSummary::from_input(&self.input)
    }

    /// Net income, loan payment, available income
    pub fn summary_cards(&self) -> Vec<SummaryCard> {
        let summary = self.summary();
        [
            ("Net Monthly Income", summary.net_income, CardTone::Income),
            ("Loan Payment", summary.loan_payment, CardTone::Debt),
            ("Available Income", summary.available_income, CardTone::Available),
        ]
        .into_iter()
        .map(|(label, amount, tone)| SummaryCard {
            label,
            amount,
            formatted: format_currency(amount, self.currency),
            tone,
        })
        .collect()
    }

    /// All seven categories in table order
    pub fn category_rows(&self) -> Vec<CategoryRow> {
        self.allocation
            .entries()
            .into_iter()
            .map(|(category, amount)| CategoryRow {
                category,
                label: category.label(),
                amount,
                formatted: format_currency(amount, self.currency),
                color: category.color(),
            })
            .collect()
    }

    pub fn pie_slices(&self) -> Vec<PieSlice> {
        pie_slices(&self.allocation, self.currency)
    }

    pub fn tips(&self) -> &'static [&'static str] {
        &TIPS
    }
}

/// State container for the calculator
#[derive(Debug, Clone, Default)]
pub struct BudgetView {
    input: FinancialInput,
    allocation: Option<BudgetAllocation>,
}

impl BudgetView {
    /// Create a view with a zeroed input and no allocation
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a view pre-filled with input (nothing is computed yet)
    pub fn with_input(input: FinancialInput) -> Self {
        Self {
            input,
            allocation: None,
        }
    }

    pub fn input(&self) -> &FinancialInput {
        &self.input
    }

    pub fn allocation(&self) -> Option<&BudgetAllocation> {
        self.allocation.as_ref()
    }

    pub fn has_allocation(&self) -> bool {
        self.allocation.is_some()
    }

    /// Replace one input field
    pub fn set_field(&mut self, field: InputField, value: f64) {
        self.input.set(field, value);
    }

    /// Replace one input field from raw form text
    ///
    /// Text that does not parse leaves the field unchanged.
    pub fn set_field_text(&mut self, field: InputField, text: &str) -> BudgetResult<()> {
        let value = parse_amount(text)?;
        self.set_field(field, value);
        Ok(())
    }

    /// Whether the calculate action should be enabled
    pub fn can_compute(&self) -> bool {
        self.input.salary > 0.0
    }

    /// Run the allocator on the current input
    ///
    /// On success the stored allocation is replaced wholesale and `true` is
    /// returned. When the allocator declines the previous allocation (or its
    /// absence) is kept and `false` is returned.
    pub fn compute(&mut self) -> bool {
        match allocate(&self.input) {
            Some(allocation) => {
                info!(salary = self.input.salary, "budget recomputed");
                self.allocation = Some(allocation);
                true
            }
            None => {
                debug!("compute ignored, salary not positive");
                false
            }
        }
    }

    /// Display figures derived from the current input
    pub fn summary(&self) -> BudgetSummary {
        BudgetSummary::from_input(&self.input)
    }

    /// The renderable results region, present only once an allocation exists
    pub fn results_region(&self, currency: Currency) -> Option<ResultsRegion> {
        self.allocation.map(|allocation| ResultsRegion {
            input: self.input,
            allocation,
            currency,
        })
    }
}
