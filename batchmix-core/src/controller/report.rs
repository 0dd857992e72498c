//! Values published by the controller after each cycle

use crate::state::BatchState;
use crate::timing::{BatchTime, MixTime};
use crate::traits::RelayCommand;

/// Outcome of one control cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CycleReport {
    /// State before the cycle
    pub previous: BatchState,
    /// State after the cycle
    pub state: BatchState,
    /// Relay command to apply
    pub relay: RelayCommand,
}

impl CycleReport {
    /// Check if the cycle changed state
    pub fn transitioned(&self) -> bool {
        self.previous != self.state
    }

    /// Check if the cycle started a mix
    pub fn mix_started(&self) -> bool {
        self.previous == BatchState::Running && self.state == BatchState::Mixing
    }

    /// Check if the cycle ended a mix and returned to rest
    pub fn mix_finished(&self) -> bool {
        self.previous == BatchState::Mixing && self.state == BatchState::Running
    }
}

/// Read-only copy of the controller state for the display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BatchSnapshot {
    pub state: BatchState,
    pub batch_time: BatchTime,
    pub mix_time: MixTime,
    pub revolutions: u8,
    pub relay: RelayCommand,
    /// Rest time between mixes (hours)
    pub mix_interval_hours: u8,
}

/// Debug telemetry record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Telemetry {
    pub state: BatchState,
    pub revolutions: u8,
    pub correction_threshold: u8,
    pub mix_minutes: u8,
    pub mix_seconds: u8,
}
