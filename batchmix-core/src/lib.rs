//! Board-agnostic core logic for the batchmix mixer controller
//!
//! This crate contains all control logic that does not depend on
//! specific hardware implementations:
//!
//! - Batch state machine (Stopped / Running / Mixing / Manual)
//! - Batch and mix elapsed-time counters
//! - The `BatchController` aggregate evaluated once per control cycle
//! - Fixed controller constants
//! - Collaborator traits for switch inputs and the motor relay

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod controller;
pub mod state;
pub mod timing;
pub mod traits;

pub use config::{BatchConfig, DisplayTiming};
pub use controller::{BatchController, BatchSnapshot, CycleReport, Telemetry};
pub use state::{BatchState, SwitchPosition, SwitchReadings};
pub use timing::{BatchTime, MixTime};
