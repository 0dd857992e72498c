//! Batch controller
//!
//! Owns the batch state, both timers and the rotation correction counter.
//! It is the single writer of all of them and is stepped once per control
//! cycle.

pub mod batch;
pub mod report;

pub use batch::BatchController;
pub use report::{BatchSnapshot, CycleReport, Telemetry};
