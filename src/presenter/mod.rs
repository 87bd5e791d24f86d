//! Presentation layer
//!
//! Owns the calculator state and turns it into display models (cards,
//! category rows, pie wedges) that both the terminal UI and the PDF export
//! draw from.

pub mod chart;
pub mod view;

pub use chart::{pie_slices, slice_at, LabelAnchor, LabelPlacement, PieSlice};
pub use view::{BudgetView, CardTone, CategoryRow, ResultsRegion, SummaryCard, TIPS};
