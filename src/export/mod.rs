//! Export module for Budget Brain
//!
//! Provides two kinds of output for a computed budget:
//! - PDF: a raster snapshot of the results panel on an A4 page
//! - Reports: JSON, YAML, and CSV renderings of the same numbers

pub mod capture;
pub mod csv;
pub mod json;
pub mod pdf;
pub mod slot;
pub mod yaml;

pub use capture::{generated_subtitle, BufferCapture, RegionCapture, Snapshot, CAPTURE_SCALE};
pub use csv::export_categories_csv;
pub use json::{export_report_json, BudgetReport, CategoryLine, REPORT_SCHEMA_VERSION};
pub use pdf::{fit_to_width, save_document, PageComposer, PageFormat, Placement, EXPORT_FILE_NAME};
pub use slot::{export_region, ExportSlot, ExportStart};
pub use yaml::export_report_yaml;
