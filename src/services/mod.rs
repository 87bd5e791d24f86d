//! Service layer for Budget Brain
//!
//! The service layer holds the calculation logic that sits between the raw
//! input records and the presentation layer.

pub mod allocator;

pub use allocator::allocate;
