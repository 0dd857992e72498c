//! Motor relay output trait

/// Relay command produced by the controller every cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RelayCommand {
    /// Relay released, motor stopped
    #[default]
    Off,
    /// Relay energized, motor running
    On,
}

impl RelayCommand {
    pub fn from_energized(energized: bool) -> Self {
        if energized {
            RelayCommand::On
        } else {
            RelayCommand::Off
        }
    }

    pub fn is_on(&self) -> bool {
        matches!(self, RelayCommand::On)
    }
}

/// Errors that can occur when driving the relay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RelayError {
    /// The relay pin could not be written
    WriteFailed,
}

/// Trait for the motor relay output
///
/// Implementations must start de-energized.
pub trait RelayOutput {
    /// Drive the relay to the commanded position
    fn apply(&mut self, command: RelayCommand) -> Result<(), RelayError>;

    /// Check if the relay is currently energized
    fn is_energized(&self) -> bool;

    /// Release the relay
    fn de_energize(&mut self) -> Result<(), RelayError> {
        self.apply(RelayCommand::Off)
    }
}
