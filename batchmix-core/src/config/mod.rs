//! Controller configuration
//!
//! Thresholds and intervals are fixed at build time. They are grouped into
//! plain structs so callers inject them at construction.

pub mod types;

pub use types::*;
