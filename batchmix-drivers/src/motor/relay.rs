//! Motor relay driver
//!
//! This driver provides:
//! - On/off control of the mixer motor via a single relay
//! - Active-high or active-low relay boards
//! - A count of relay switch operations
//!
//! # Usage
//!
//! The controller's relay command is applied once per control cycle. The
//! pin is rewritten every time, so a failed write is retried on the next
//! cycle.
//!
//! ```ignore
//! let mut relay = RelayDriver::new(pin, RelayConfig::default())?;
//! let report = controller.step(readings);
//! relay.apply(report.relay)?;
//! ```

use embedded_hal::digital::OutputPin;

use batchmix_core::traits::{RelayCommand, RelayError, RelayOutput};

/// Relay driver configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RelayConfig {
    /// Relay is active-high (true) or active-low (false)
    pub active_high: bool,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self { active_high: true }
    }
}

/// Motor relay on an output pin
pub struct RelayDriver<P> {
    pin: P,
    config: RelayConfig,
    /// Whether the relay is currently energized
    energized: bool,
    /// Number of on/off changes since construction
    switch_count: u32,
}

impl<P: OutputPin> RelayDriver<P> {
    /// Create the driver and force the relay off
    pub fn new(pin: P, config: RelayConfig) -> Result<Self, RelayError> {
        let mut relay = Self {
            pin,
            config,
            energized: false,
            switch_count: 0,
        };
        relay.write(false)?;
        Ok(relay)
    }

    /// Number of on/off changes
    pub fn switch_count(&self) -> u32 {
        self.switch_count
    }

    fn write(&mut self, energized: bool) -> Result<(), RelayError> {
        let result = if energized == self.config.active_high {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };
        result.map_err(|_| RelayError::WriteFailed)
    }
}

impl<P: OutputPin> RelayOutput for RelayDriver<P> {
    fn apply(&mut self, command: RelayCommand) -> Result<(), RelayError> {
        let on = command.is_on();
        self.write(on)?;

        if on != self.energized {
            self.energized = on;
            self.switch_count = self.switch_count.wrapping_add(1);
        }
        Ok(())
    }

    fn is_energized(&self) -> bool {
        self.energized
    }
}
