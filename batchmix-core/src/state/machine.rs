//! State machine definition
//!
//! The relay output and the status screen are a function of the current
//! state. Switch readings select the next state; timer-driven transitions
//! between Running and Mixing are handled by the controller.

use core::fmt;

use super::inputs::{SwitchPosition, SwitchReadings};

/// Batch states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BatchState {
    /// No batch; motor off, timers cleared
    #[default]
    Stopped,
    /// Batch in progress, resting between mixes (motor off)
    Running,
    /// Batch in progress, motor mixing
    Mixing,
    /// Operator override; motor on, batch timing bypassed
    Manual,
}

impl BatchState {
    /// Check if the motor relay is energized in this state
    pub fn relay_energized(&self) -> bool {
        matches!(self, BatchState::Mixing | BatchState::Manual)
    }

    /// Check if a batch is in progress (timers accumulate)
    pub fn is_batch_active(&self) -> bool {
        matches!(self, BatchState::Running | BatchState::Mixing)
    }

    /// Check if the display may rotate through its information screens
    pub fn allows_screen_cycling(&self) -> bool {
        matches!(self, BatchState::Running)
    }

    /// Name shown on the status line
    pub fn label(&self) -> &'static str {
        match self {
            BatchState::Stopped => "Stopped",
            BatchState::Running => "Running",
            BatchState::Mixing => "Mixing",
            BatchState::Manual => "Manual",
        }
    }

    /// Apply one cycle's switch readings and return the next state
    ///
    /// A batch in progress ignores the manual switch, and a repeated run
    /// selection does not restart it.
    pub fn on_inputs(self, readings: SwitchReadings) -> Self {
        use BatchState::*;
        use SwitchPosition::*;

        match (readings.control, readings.manual) {
            // Contradictory reading: fail safe
            (Engaged, Engaged) => Stopped,
            (Engaged, Disengaged) => match self {
                Running | Mixing => self,
                Stopped | Manual => Running,
            },
            (Disengaged, Engaged) => match self {
                Running | Mixing => self,
                Stopped | Manual => Manual,
            },
            (Disengaged, Disengaged) => Stopped,
        }
    }
}

impl fmt::Display for BatchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_STATES: [BatchState; 4] = [
        BatchState::Stopped,
        BatchState::Running,
        BatchState::Mixing,
        BatchState::Manual,
    ];

    #[test]
    fn test_default_is_stopped() {
        assert_eq!(BatchState::default(), BatchState::Stopped);
    }

    #[test]
    fn test_both_engaged_stops_from_any_state() {
        for state in ALL_STATES {
            let next = state.on_inputs(SwitchReadings::both_engaged());
            assert_eq!(next, BatchState::Stopped);
        }
    }

    #[test]
    fn test_released_stops_from_any_state() {
        for state in ALL_STATES {
            let next = state.on_inputs(SwitchReadings::released());
            assert_eq!(next, BatchState::Stopped);
        }
    }

    #[test]
    fn test_run_selection() {
        let run = SwitchReadings::run_batch();
        assert_eq!(BatchState::Stopped.on_inputs(run), BatchState::Running);
        assert_eq!(BatchState::Manual.on_inputs(run), BatchState::Running);
        // Already in a batch: unchanged
        assert_eq!(BatchState::Running.on_inputs(run), BatchState::Running);
        assert_eq!(BatchState::Mixing.on_inputs(run), BatchState::Mixing);
    }

    #[test]
    fn test_manual_selection() {
        let manual = SwitchReadings::manual_override();
        assert_eq!(BatchState::Stopped.on_inputs(manual), BatchState::Manual);
        assert_eq!(BatchState::Manual.on_inputs(manual), BatchState::Manual);
        // Manual switch is ignored during a batch
        assert_eq!(BatchState::Running.on_inputs(manual), BatchState::Running);
        assert_eq!(BatchState::Mixing.on_inputs(manual), BatchState::Mixing);
    }

    #[test]
    fn test_relay_energized() {
        assert!(BatchState::Mixing.relay_energized());
        assert!(BatchState::Manual.relay_energized());
        assert!(!BatchState::Running.relay_energized());
        assert!(!BatchState::Stopped.relay_energized());
    }

    #[test]
    fn test_batch_active_states() {
        assert!(BatchState::Running.is_batch_active());
        assert!(BatchState::Mixing.is_batch_active());
        assert!(!BatchState::Stopped.is_batch_active());
        assert!(!BatchState::Manual.is_batch_active());
    }

    #[test]
    fn test_screen_cycling_only_while_running() {
        assert!(BatchState::Running.allows_screen_cycling());
        assert!(!BatchState::Stopped.allows_screen_cycling());
        assert!(!BatchState::Mixing.allows_screen_cycling());
        assert!(!BatchState::Manual.allows_screen_cycling());
    }

    #[test]
    fn test_labels() {
        assert_eq!(BatchState::Stopped.label(), "Stopped");
        assert_eq!(BatchState::Running.label(), "Running");
        assert_eq!(BatchState::Mixing.label(), "Mixing");
        assert_eq!(BatchState::Manual.label(), "Manual");
    }
}
