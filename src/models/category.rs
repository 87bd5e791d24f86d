//! Budget categories
//!
//! The seven buckets of a spending plan, held in one fixed ordered table.
//! Every view that lists categories (chart, list, exports) walks this table,
//! so ordering and colors never drift between them.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::allocation::BudgetAllocation;

/// An sRGB color from the fixed category palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RgbColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Format as `#RRGGBB`
    pub fn hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// The seven budget buckets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Housing,
    Food,
    Transportation,
    Savings,
    Investment,
    Entertainment,
    Remaining,
}

/// One row of the category table
#[derive(Debug, Clone, Copy)]
pub struct CategorySpec {
    pub category: Category,
    /// Human-readable name used by the chart and the list
    pub label: &'static str,
    /// Share of available income
    pub ratio: f64,
    /// Palette color, assigned by position
    pub color: RgbColor,
    /// Reads this category's amount from an allocation
    pub accessor: fn(&BudgetAllocation) -> f64,
}

fn housing(a: &BudgetAllocation) -> f64 {
    a.housing
}

fn food(a: &BudgetAllocation) -> f64 {
    a.food
}

fn transportation(a: &BudgetAllocation) -> f64 {
    a.transportation
}

fn savings(a: &BudgetAllocation) -> f64 {
    a.savings
}

fn investment(a: &BudgetAllocation) -> f64 {
    a.investment
}

fn entertainment(a: &BudgetAllocation) -> f64 {
    a.entertainment
}

fn remaining(a: &BudgetAllocation) -> f64 {
    a.remaining
}

/// Palette cycled by category position
pub const PALETTE: [RgbColor; 7] = [
    RgbColor::new(0x3B, 0x82, 0xF6),
    RgbColor::new(0x22, 0xC5, 0x5E),
    RgbColor::new(0xEA, 0xB3, 0x08),
    RgbColor::new(0xA8, 0x55, 0xF7),
    RgbColor::new(0x63, 0x66, 0xF1),
    RgbColor::new(0xEC, 0x48, 0x99),
    RgbColor::new(0x6B, 0x72, 0x80),
];

/// The fixed category table. Ratios sum to exactly 1.00.
pub const CATEGORIES: [CategorySpec; 7] = [
    CategorySpec {
        category: Category::Housing,
        label: "Housing & Rent",
        ratio: 0.30,
        color: PALETTE[0],
        accessor: housing,
    },
    CategorySpec {
        category: Category::Food,
        label: "Food & Groceries",
        ratio: 0.15,
        color: PALETTE[1],
        accessor: food,
    },
    CategorySpec {
        category: Category::Transportation,
        label: "Transportation",
        ratio: 0.15,
        color: PALETTE[2],
        accessor: transportation,
    },
    CategorySpec {
        category: Category::Savings,
        label: "Savings",
        ratio: 0.20,
        color: PALETTE[3],
        accessor: savings,
    },
    CategorySpec {
        category: Category::Investment,
        label: "Investment",
        ratio: 0.10,
        color: PALETTE[4],
        accessor: investment,
    },
    CategorySpec {
        category: Category::Entertainment,
        label: "Entertainment",
        ratio: 0.05,
        color: PALETTE[5],
        accessor: entertainment,
    },
    CategorySpec {
        category: Category::Remaining,
        label: "Remaining",
        ratio: 0.05,
        color: PALETTE[6],
        accessor: remaining,
    },
];

impl Category {
    /// Position of this category in the fixed table
    pub fn index(&self) -> usize {
        match self {
            Self::Housing => 0,
            Self::Food => 1,
            Self::Transportation => 2,
            Self::Savings => 3,
            Self::Investment => 4,
            Self::Entertainment => 5,
            Self::Remaining => 6,
        }
    }

    /// The table row for this category
    pub fn spec(&self) -> &'static CategorySpec {
        &CATEGORIES[self.index()]
    }

    pub fn label(&self) -> &'static str {
        self.spec().label
    }

    pub fn ratio(&self) -> f64 {
        self.spec().ratio
    }

    pub fn color(&self) -> RgbColor {
        self.spec().color
    }

    /// Read this category's amount from an allocation
    pub fn amount(&self, allocation: &BudgetAllocation) -> f64 {
        (self.spec().accessor)(allocation)
    }

    /// All categories in table order
    pub fn all() -> impl Iterator<Item = Category> {
        CATEGORIES.iter().map(|spec| spec.category)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratios_sum_to_one() {
        let total: f64 = CATEGORIES.iter().map(|spec| spec.ratio).sum();
        assert!((total - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_table_order_matches_index() {
        for (position, spec) in CATEGORIES.iter().enumerate() {
            assert_eq!(spec.category.index(), position);
            assert_eq!(spec.color, PALETTE[position % PALETTE.len()]);
        }
    }

    #[test]
    fn test_accessors_read_matching_field() {
        let allocation = BudgetAllocation {
            housing: 1.0,
            food: 2.0,
            transportation: 3.0,
            savings: 4.0,
            investment: 5.0,
            entertainment: 6.0,
            remaining: 7.0,
        };
        let amounts: Vec<f64> = Category::all().map(|c| c.amount(&allocation)).collect();
        assert_eq!(amounts, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]);
    }

    #[test]
    fn test_hex() {
        assert_eq!(Category::Housing.color().hex(), "#3B82F6");
        assert_eq!(Category::Remaining.color().hex(), "#6B7280");
    }

    #[test]
    fn test_remaining_is_listed() {
        assert_eq!(Category::all().count(), 7);
        assert_eq!(Category::Remaining.label(), "Remaining");
    }
}
