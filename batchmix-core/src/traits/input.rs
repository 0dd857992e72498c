//! Operator switch input trait

use crate::state::SwitchReadings;

/// Errors that can occur while sampling the switches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputError {
    /// A switch pin could not be read
    ReadFailed,
}

/// Trait for sampling the two operator switches
///
/// Implementations return the instantaneous logical position of each
/// switch. Debouncing, if any, belongs to the implementation.
pub trait SwitchSampler {
    /// Read both switches
    fn sample(&mut self) -> Result<SwitchReadings, InputError>;
}
