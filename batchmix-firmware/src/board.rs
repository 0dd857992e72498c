//! Board pin map
//!
//! Wiring for a Raspberry Pi Pico carrier with a 5 V relay module, two
//! panel switches to ground and an HD44780 16x2 LCD in 4-bit mode.
//!
//! | Signal          | GPIO |
//! |-----------------|------|
//! | Motor relay     | 8    |
//! | Control switch  | 9    |
//! | Manual switch   | 7    |
//! | LCD RS          | 12   |
//! | LCD EN          | 11   |
//! | LCD D4..D7      | 5, 4, 3, 2 |

use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::Peripherals;
use embassy_time::Delay;

use batchmix_core::traits::RelayError;
use batchmix_drivers::display::Hd44780;
use batchmix_drivers::input::ActiveLowSwitches;
use batchmix_drivers::motor::{RelayConfig, RelayDriver};

pub type Switches = ActiveLowSwitches<Input<'static>, Input<'static>>;
pub type Relay = RelayDriver<Output<'static>>;
pub type Lcd = Hd44780<Output<'static>, Delay>;

/// Relay polarity of the fitted relay module
pub const RELAY_CONFIG: RelayConfig = RelayConfig { active_high: true };

/// Board peripherals, configured
pub struct Board {
    pub switches: Switches,
    pub relay: Relay,
    pub lcd: Lcd,
}

impl Board {
    /// Configure all pins; the relay starts released
    pub fn new(p: Peripherals) -> Result<Self, RelayError> {
        let relay = RelayDriver::new(Output::new(p.PIN_8, Level::Low), RELAY_CONFIG)?;

        let switches = ActiveLowSwitches::new(
            Input::new(p.PIN_9, Pull::Up),
            Input::new(p.PIN_7, Pull::Up),
        );

        let lcd = Hd44780::new(
            Output::new(p.PIN_12, Level::Low),
            Output::new(p.PIN_11, Level::Low),
            [
                Output::new(p.PIN_5, Level::Low),
                Output::new(p.PIN_4, Level::Low),
                Output::new(p.PIN_3, Level::Low),
                Output::new(p.PIN_2, Level::Low),
            ],
            Delay,
        );

        Ok(Self {
            switches,
            relay,
            lcd,
        })
    }
}
