//! Budget allocation and summary records

use serde::{Deserialize, Serialize};

use super::category::Category;
use super::input::FinancialInput;

/// Flat tax assumption applied to salary
pub const TAX_RATE: f64 = 0.25;

/// Share of salary kept after tax
pub const NET_INCOME_RATIO: f64 = 1.0 - TAX_RATE;

/// A seven-bucket breakdown of available income
///
/// The fields sum to `salary * 0.75 - loan_payment`. Values are negative when
/// the loan payment exceeds net income.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BudgetAllocation {
    pub housing: f64,
    pub food: f64,
    pub transportation: f64,
    pub savings: f64,
    pub investment: f64,
    pub entertainment: f64,
    pub remaining: f64,
}

impl BudgetAllocation {
    /// Sum of all seven buckets
    pub fn total(&self) -> f64 {
        Category::all().map(|c| c.amount(self)).sum()
    }

    /// `(category, amount)` pairs in table order
    pub fn entries(&self) -> Vec<(Category, f64)> {
        Category::all().map(|c| (c, c.amount(self))).collect()
    }
}

/// Display-only figures derived from the input
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetSummary {
    pub net_income: f64,
    pub loan_payment: f64,
    pub available_income: f64,
}

impl BudgetSummary {
    pub fn from_input(input: &FinancialInput) -> Self {
        let net_income = input.salary * NET_INCOME_RATIO;
        Self {
            net_income,
            loan_payment: input.loan_payment,
            available_income: net_income - input.loan_payment,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_from_input() {
        let summary = BudgetSummary::from_input(&FinancialInput::new(5000.0, 800.0, 5.5));
        assert_eq!(summary.net_income, 3750.0);
        assert_eq!(summary.loan_payment, 800.0);
        assert_eq!(summary.available_income, 2950.0);
    }

    #[test]
    fn test_summary_allows_negative_available_income() {
        let summary = BudgetSummary::from_input(&FinancialInput::new(1000.0, 2000.0, 0.0));
        assert_eq!(summary.available_income, -1250.0);
    }

    #[test]
    fn test_entries_in_table_order() {
        let allocation = BudgetAllocation {
            housing: 10.0,
            remaining: 1.0,
            ..Default::default()
        };
        let entries = allocation.entries();
        assert_eq!(entries.len(), 7);
        assert_eq!(entries[0], (Category::Housing, 10.0));
        assert_eq!(entries[6], (Category::Remaining, 1.0));
        assert_eq!(allocation.total(), 11.0);
    }
}
