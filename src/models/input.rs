//! Financial input record
//!
//! Holds the three numbers the user types into the form. The record starts
//! zeroed and is mutated one field at a time.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{BudgetError, BudgetResult};

/// The user's monthly figures
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialInput {
    /// Monthly gross income; zero means "not yet entered"
    pub salary: f64,
    /// Monthly debt service; may exceed net income
    pub loan_payment: f64,
    /// Percentage accepted from the form but not used by any calculation
    pub interest_rate: f64,
}

impl FinancialInput {
    /// Create an input record from explicit values
    pub fn new(salary: f64, loan_payment: f64, interest_rate: f64) -> Self {
        Self {
            salary,
            loan_payment,
            interest_rate,
        }
    }

    /// Read one field
    pub fn get(&self, field: InputField) -> f64 {
        match field {
            InputField::Salary => self.salary,
            InputField::LoanPayment => self.loan_payment,
            InputField::InterestRate => self.interest_rate,
        }
    }

    /// Replace one field, leaving the others untouched
    pub fn set(&mut self, field: InputField, value: f64) {
        match field {
            InputField::Salary => self.salary = value,
            InputField::LoanPayment => self.loan_payment = value,
            InputField::InterestRate => self.interest_rate = value,
        }
    }
}

/// Fields of the input form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputField {
    Salary,
    LoanPayment,
    InterestRate,
}

impl InputField {
    /// All fields in form order
    pub const ALL: [InputField; 3] = [
        InputField::Salary,
        InputField::LoanPayment,
        InputField::InterestRate,
    ];

    /// Label shown next to the field
    pub fn label(&self) -> &'static str {
        match self {
            Self::Salary => "Monthly Salary",
            Self::LoanPayment => "Monthly Loan Payment",
            Self::InterestRate => "Interest Rate (%)",
        }
    }

    /// Placeholder shown while the field is empty
    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Salary => "50000",
            Self::LoanPayment => "8000",
            Self::InterestRate => "5.5",
        }
    }

    /// Next field (wraps around)
    pub fn next(&self) -> Self {
        match self {
            Self::Salary => Self::LoanPayment,
            Self::LoanPayment => Self::InterestRate,
            Self::InterestRate => Self::Salary,
        }
    }

    /// Previous field (wraps around)
    pub fn prev(&self) -> Self {
        match self {
            Self::Salary => Self::InterestRate,
            Self::LoanPayment => Self::Salary,
            Self::InterestRate => Self::LoanPayment,
        }
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Parse the raw text of a numeric form field
///
/// An empty field reads as zero, the same as a field the user never touched.
pub fn parse_amount(text: &str) -> BudgetResult<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }

    let value: f64 = trimmed
        .parse()
        .map_err(|_| BudgetError::Validation(format!("'{}' is not a number", trimmed)))?;

    if !value.is_finite() {
        return Err(BudgetError::Validation(format!(
            "'{}' is not a finite number",
            trimmed
        )));
    }

    Ok(value)
}
