//! Core data models for Budget Brain
//!
//! This module contains the records the calculator works with: the user's
//! financial input, the derived allocation, the fixed category table, and
//! currency formatting.

pub mod allocation;
pub mod category;
pub mod currency;
pub mod input;

pub use allocation::{BudgetAllocation, BudgetSummary, NET_INCOME_RATIO, TAX_RATE};
pub use category::{Category, CategorySpec, RgbColor, CATEGORIES, PALETTE};
pub use currency::{format_currency, Currency, Grouping};
pub use input::{parse_amount, FinancialInput, InputField};
