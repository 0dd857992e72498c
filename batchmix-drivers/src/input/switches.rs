//! Active-low operator switches
//!
//! Both switches close to ground against a pull-up, so a LOW pin means the
//! switch is engaged. No debouncing is applied; the control cycle samples
//! once per second.

use embedded_hal::digital::InputPin;

use batchmix_core::state::{SwitchPosition, SwitchReadings};
use batchmix_core::traits::{InputError, SwitchSampler};

/// Control and manual switches on two input pins
pub struct ActiveLowSwitches<C, M> {
    control: C,
    manual: M,
}

impl<C: InputPin, M: InputPin> ActiveLowSwitches<C, M> {
    /// Create the sampler; pins must already be configured with pull-ups
    pub fn new(control: C, manual: M) -> Self {
        Self { control, manual }
    }
}

impl<C: InputPin, M: InputPin> SwitchSampler for ActiveLowSwitches<C, M> {
    fn sample(&mut self) -> Result<SwitchReadings, InputError> {
        let control_low = self.control.is_low().map_err(|_| InputError::ReadFailed)?;
        let manual_low = self.manual.is_low().map_err(|_| InputError::ReadFailed)?;

        Ok(SwitchReadings::new(
            SwitchPosition::from_active_low(control_low),
            SwitchPosition::from_active_low(manual_low),
        ))
    }
}
