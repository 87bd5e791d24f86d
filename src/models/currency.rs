//! Currency formatting
//!
//! Amounts are stored as plain `f64` and only turned into text at display
//! time. Formatting rounds to whole currency units (half away from zero) and
//! applies the digit grouping of the currency's home locale.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::BudgetError;

/// Digit grouping convention
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grouping {
    /// 1,234,567
    Western,
    /// 12,34,567 (lakh/crore)
    Indian,
}

/// Supported display currencies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Indian rupee, en-IN grouping
    #[default]
    Inr,
    /// US dollar, en-US grouping
    Usd,
    /// Pound sterling, en-GB grouping
    Gbp,
    /// Euro, symbol-first with western grouping
    Eur,
}

impl Currency {
    pub const ALL: [Currency; 4] = [Currency::Inr, Currency::Usd, Currency::Gbp, Currency::Eur];

    /// ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            Self::Inr => "INR",
            Self::Usd => "USD",
            Self::Gbp => "GBP",
            Self::Eur => "EUR",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Inr => "₹",
            Self::Usd => "$",
            Self::Gbp => "£",
            Self::Eur => "€",
        }
    }

    /// Locale tag whose conventions this currency is formatted with
    pub fn locale(&self) -> &'static str {
        match self {
            Self::Inr => "en-IN",
            Self::Usd => "en-US",
            Self::Gbp => "en-GB",
            Self::Eur => "en-IE",
        }
    }

    pub fn grouping(&self) -> Grouping {
        match self {
            Self::Inr => Grouping::Indian,
            _ => Grouping::Western,
        }
    }

    /// Format an amount as whole currency units
    pub fn format(&self, amount: f64) -> String {
        format_currency(amount, *self)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Currency {
    type Err = BudgetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_uppercase();
        Currency::ALL
            .into_iter()
            .find(|c| c.code() == code)
            .ok_or_else(|| {
                BudgetError::Validation(format!(
                    "Unknown currency '{}' (expected one of INR, USD, GBP, EUR)",
                    s.trim()
                ))
            })
    }
}

/// Format an amount with zero fractional digits
///
/// # Examples
/// ```
/// use budget_brain::models::{format_currency, Currency};
/// assert_eq!(format_currency(1234567.0, Currency::Inr), "₹12,34,567");
/// assert_eq!(format_currency(-375.0, Currency::Usd), "-$375");
/// ```
pub fn format_currency(amount: f64, currency: Currency) -> String {
    if !amount.is_finite() {
        return format!("{}n/a", currency.symbol());
    }

    let rounded = amount.round();
    let digits = format!("{:.0}", rounded.abs());
    let grouped = group_digits(&digits, currency.grouping());

    // Rounds-to-zero amounts print without a sign
    if rounded < 0.0 {
        format!("-{}{}", currency.symbol(), grouped)
    } else {
        format!("{}{}", currency.symbol(), grouped)
    }
}

/// Insert thousands separators into a string of ASCII digits
fn group_digits(digits: &str, grouping: Grouping) -> String {
    let len = digits.len();
    if len <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(len - 3);
    let head_group = match grouping {
        Grouping::Western => 3,
        Grouping::Indian => 2,
    };

    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(head_group);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usd_grouping() {
        assert_eq!(format_currency(0.0, Currency::Usd), "$0");
        assert_eq!(format_currency(999.0, Currency::Usd), "$999");
        assert_eq!(format_currency(1000.0, Currency::Usd), "$1,000");
        assert_eq!(format_currency(1234567.0, Currency::Usd), "$1,234,567");
    }

    #[test]
    fn test_inr_grouping() {
        assert_eq!(format_currency(2950.0, Currency::Inr), "₹2,950");
        assert_eq!(format_currency(50000.0, Currency::Inr), "₹50,000");
        assert_eq!(format_currency(1234567.0, Currency::Inr), "₹12,34,567");
        assert_eq!(format_currency(123456789.0, Currency::Inr), "₹12,34,56,789");
    }

    #[test]
    fn test_rounds_half_away_from_zero() {
        assert_eq!(format_currency(442.5, Currency::Usd), "$443");
        assert_eq!(format_currency(147.4, Currency::Usd), "$147");
        assert_eq!(format_currency(-442.5, Currency::Usd), "-$443");
    }

    #[test]
    fn test_negative_amounts() {
        assert_eq!(format_currency(-375.0, Currency::Usd), "-$375");
        assert_eq!(format_currency(-1250.0, Currency::Inr), "-₹1,250");
        assert_eq!(format_currency(-0.4, Currency::Usd), "$0");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(format_currency(f64::NAN, Currency::Gbp), "£n/a");
    }

    #[test]
    fn test_parse_currency() {
        assert_eq!("usd".parse::<Currency>().unwrap(), Currency::Usd);
        assert_eq!(" INR ".parse::<Currency>().unwrap(), Currency::Inr);
        assert!("XYZ".parse::<Currency>().is_err());
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Currency::Gbp).unwrap();
        assert_eq!(json, "\"GBP\"");
        let back: Currency = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Currency::Gbp);
    }
}
