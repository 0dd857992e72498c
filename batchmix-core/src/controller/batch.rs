//! Batch controller implementation
//!
//! One call to [`BatchController::step`] is one control cycle:
//!
//! 1. the switch readings select the next state,
//! 2. Stopped and Manual clear the timers and the revolution counter,
//! 3. Running and Mixing advance both timers by one second and apply the
//!    mixing-window policy.
//!
//! A mix starts when the mix timer reaches the mix interval while Running.
//! It ends at the configured minute mark, one second later on every
//! corrected cycle so the tumbler does not drift out of position.

use crate::config::BatchConfig;
use crate::state::{BatchState, SwitchReadings};
use crate::timing::{BatchTime, MixTime};
use crate::traits::RelayCommand;

use super::report::{BatchSnapshot, CycleReport, Telemetry};

/// Batch controller aggregate
#[derive(Debug, Clone)]
pub struct BatchController {
    config: BatchConfig,
    state: BatchState,
    /// Time since the batch entered Running
    batch_time: BatchTime,
    /// Time since the current rest or mix phase began
    mix_time: MixTime,
    /// Plain mixes completed since the last corrected mix
    revolutions: u8,
}

impl Default for BatchController {
    fn default() -> Self {
        Self::new(BatchConfig::DEFAULT)
    }
}

impl BatchController {
    /// Create a stopped controller with cleared timers
    pub fn new(config: BatchConfig) -> Self {
        Self {
            config,
            state: BatchState::Stopped,
            batch_time: BatchTime::ZERO,
            mix_time: MixTime::ZERO,
            revolutions: 0,
        }
    }

    /// Get current state
    pub fn state(&self) -> BatchState {
        self.state
    }

    pub fn batch_time(&self) -> BatchTime {
        self.batch_time
    }

    pub fn mix_time(&self) -> MixTime {
        self.mix_time
    }

    pub fn revolutions(&self) -> u8 {
        self.revolutions
    }

    /// Relay command for the current state
    pub fn relay_command(&self) -> RelayCommand {
        RelayCommand::from_energized(self.state.relay_energized())
    }

    /// Apply the switch transition table only
    pub fn apply_inputs(&mut self, readings: SwitchReadings) -> BatchState {
        self.state = self.state.on_inputs(readings);
        self.state
    }

    /// Run one control cycle
    pub fn step(&mut self, readings: SwitchReadings) -> CycleReport {
        let previous = self.state;

        if self.apply_inputs(readings).is_batch_active() {
            self.advance();
        } else {
            self.clear();
        }

        CycleReport {
            previous,
            state: self.state,
            relay: self.relay_command(),
        }
    }

    /// Copy of everything the display needs
    pub fn snapshot(&self) -> BatchSnapshot {
        BatchSnapshot {
            state: self.state,
            batch_time: self.batch_time,
            mix_time: self.mix_time,
            revolutions: self.revolutions,
            relay: self.relay_command(),
            mix_interval_hours: self.config.mix_interval_hours,
        }
    }

    /// Debug telemetry record
    pub fn telemetry(&self) -> Telemetry {
        Telemetry {
            state: self.state,
            revolutions: self.revolutions,
            correction_threshold: self.config.correction_threshold,
            mix_minutes: self.mix_time.minutes(),
            mix_seconds: self.mix_time.seconds(),
        }
    }

    /// Clear all batch history
    fn clear(&mut self) {
        self.batch_time.reset();
        self.mix_time.reset();
        self.revolutions = 0;
    }

    /// Advance both timers and apply the mixing-window policy
    fn advance(&mut self) {
        self.batch_time.tick();
        self.mix_time.tick();

        if self.state == BatchState::Running
            && self.mix_time.hours() == self.config.mix_interval_hours
        {
            self.state = BatchState::Mixing;
            self.mix_time.reset();
        }

        if self.state == BatchState::Mixing {
            self.check_mix_end();
        }
    }

    /// End the mix at the plain or corrected exit second
    ///
    /// Exit seconds are matched exactly; the mix timer advances one second
    /// per cycle so every mark is observed.
    fn check_mix_end(&mut self) {
        if self.mix_time.minutes() != self.config.mix_duration_minutes {
            return;
        }

        let seconds = self.mix_time.seconds();
        let threshold = self.config.correction_threshold;

        if self.revolutions < threshold {
            if seconds == self.config.mix_exit_seconds {
                self.end_mix();
                self.revolutions += 1;
            }
        } else if self.revolutions == threshold && seconds == self.config.corrected_exit_seconds() {
            self.end_mix();
            self.revolutions = 0;
        }
    }

    fn end_mix(&mut self) {
        self.state = BatchState::Running;
        self.mix_time.reset();
    }
}
