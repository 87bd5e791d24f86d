//! Pie chart geometry
//!
//! Turns an allocation into proportional wedges. Angles are in degrees,
//! measured counter-clockwise from the positive x axis, starting at 0.
//! Coordinates are y-up, matching the terminal canvas.

use crate::models::{format_currency, BudgetAllocation, Category, Currency, RgbColor};

/// Full turn in degrees
pub const FULL_TURN: f64 = 360.0;

/// Which side of its anchor point a label extends to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelAnchor {
    /// Text starts at the anchor and runs right
    Start,
    /// Text ends at the anchor
    End,
}

/// Where a wedge label goes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelPlacement {
    pub x: f64,
    pub y: f64,
    pub anchor: LabelAnchor,
}

/// One wedge of the pie
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub category: Category,
    pub value: f64,
    /// Share of the whole pie, 0.0..=1.0
    pub fraction: f64,
    pub start_angle: f64,
    pub sweep: f64,
    pub color: RgbColor,
    /// `"<category name>: <formatted amount>"`
    pub label: String,
}

impl PieSlice {
    pub fn end_angle(&self) -> f64 {
        self.start_angle + self.sweep
    }

    pub fn mid_angle(&self) -> f64 {
        self.start_angle + self.sweep / 2.0
    }

    /// Whether `angle` (degrees, any range) falls inside this wedge
    pub fn contains_angle(&self, angle: f64) -> bool {
        let a = angle.rem_euclid(FULL_TURN);
        a >= self.start_angle && a < self.end_angle()
    }

    /// Place the label outside the pie, on the ray through the wedge middle
    pub fn label_placement(
        &self,
        cx: f64,
        cy: f64,
        outer_radius: f64,
        offset: f64,
    ) -> LabelPlacement {
        let radius = outer_radius + offset;
        let theta = self.mid_angle().to_radians();
        let x = cx + radius * theta.cos();
        let y = cy + radius * theta.sin();

        LabelPlacement {
            x,
            y,
            anchor: if x > cx {
                LabelAnchor::Start
            } else {
                LabelAnchor::End
            },
        }
    }
}

/// Build the wedges for an allocation
///
/// All seven categories are included, in table order. Because every bucket
/// shares the sign of available income the fractions are always
/// non-negative; a zero (or non-finite) total yields no wedges.
pub fn pie_slices(allocation: &BudgetAllocation, currency: Currency) -> Vec<PieSlice> {
    let total = allocation.total();
    if total == 0.0 || !total.is_finite() {
        return Vec::new();
    }

    let mut start_angle = 0.0;
    let mut slices = Vec::with_capacity(7);
    for (category, value) in allocation.entries() {
        let fraction = value / total;
        let sweep = fraction * FULL_TURN;
        slices.push(PieSlice {
            category,
            value,
            fraction,
            start_angle,
            sweep,
            color: category.color(),
            label: format!("{}: {}", category.label(), format_currency(value, currency)),
        });
        start_angle += sweep;
    }

    // Absorb floating drift so the last wedge closes the circle
    if let Some(last) = slices.last_mut() {
        last.sweep = FULL_TURN - last.start_angle;
    }

    slices
}

/// Find the wedge covering `angle`
pub fn slice_at(slices: &[PieSlice], angle: f64) -> Option<&PieSlice> {
    slices
        .iter()
        .find(|slice| slice.contains_angle(angle))
        .or_else(|| slices.iter().rev().find(|slice| slice.sweep > 0.0))
}
