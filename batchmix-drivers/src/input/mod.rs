//! Operator switch inputs

pub mod switches;

pub use switches::ActiveLowSwitches;
