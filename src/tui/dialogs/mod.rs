//! Dialog overlays
//!
//! Modal content drawn over the main screen.

pub mod help;
