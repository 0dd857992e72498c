//! Batch state machine
//!
//! The batch state is explicit, finite and deterministic. The relay output
//! and the display content are functions of the current state.

pub mod inputs;
pub mod machine;

pub use inputs::{SwitchPosition, SwitchReadings};
pub use machine::BatchState;
