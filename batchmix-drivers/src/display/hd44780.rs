//! HD44780 character LCD driver (4-bit parallel mode)
//!
//! Drives a 16x2 HD44780-compatible module over six output pins: RS, EN and
//! data lines D4-D7. The R/W line is assumed tied to ground, so the busy
//! flag is never read and fixed delays cover command execution times.
//!
//! Timings follow the HD44780 datasheet at 270 kHz with margin.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use batchmix_display::{DisplayBackend, DisplayError};

/// Display columns
pub const LCD_COLS: u8 = 16;

/// Display rows
pub const LCD_ROWS: u8 = 2;

/// DDRAM address of the first column of each row
const ROW_OFFSETS: [u8; 2] = [0x00, 0x40];

// Instructions
const CMD_CLEAR: u8 = 0x01;
const CMD_ENTRY_MODE: u8 = 0x04;
const CMD_DISPLAY_CONTROL: u8 = 0x08;
const CMD_FUNCTION_SET: u8 = 0x20;
const CMD_SET_DDRAM: u8 = 0x80;

// Flags
const ENTRY_INCREMENT: u8 = 0x02;
const DISPLAY_ON: u8 = 0x04;
const FUNCTION_TWO_LINES: u8 = 0x08;

/// Execution time for ordinary instructions and data writes (us)
const EXEC_US: u32 = 100;
/// Execution time for clear/home (us)
const CLEAR_US: u32 = 2_000;

/// HD44780 display on six output pins of the same type
pub struct Hd44780<P, D> {
    rs: P,
    en: P,
    /// D4, D5, D6, D7
    data: [P; 4],
    delay: D,
    initialized: bool,
}

impl<P: OutputPin, D: DelayNs> Hd44780<P, D> {
    /// Create the driver. Call [`Hd44780::init`] before drawing.
    pub fn new(rs: P, en: P, data: [P; 4], delay: D) -> Self {
        Self {
            rs,
            en,
            data,
            delay,
            initialized: false,
        }
    }

    /// Run the 4-bit initialization sequence
    ///
    /// Configures two lines with a 5x8 font, display on with no cursor,
    /// left-to-right entry, and clears the display.
    pub fn init(&mut self) -> Result<(), DisplayError> {
        // Power-on settle time
        self.delay.delay_ms(50);
        set(&mut self.rs, false)?;
        set(&mut self.en, false)?;

        // Reset into 8-bit mode three times, then switch to 4-bit
        self.write_nibble(0x03)?;
        self.delay.delay_us(4_500);
        self.write_nibble(0x03)?;
        self.delay.delay_us(4_500);
        self.write_nibble(0x03)?;
        self.delay.delay_us(150);
        self.write_nibble(0x02)?;

        self.command(CMD_FUNCTION_SET | FUNCTION_TWO_LINES)?;
        self.command(CMD_DISPLAY_CONTROL | DISPLAY_ON)?;
        self.command(CMD_CLEAR)?;
        self.delay.delay_us(CLEAR_US);
        self.command(CMD_ENTRY_MODE | ENTRY_INCREMENT)?;

        self.initialized = true;
        Ok(())
    }

    /// Move the cursor to a column and row
    pub fn set_cursor(&mut self, col: u8, row: u8) -> Result<(), DisplayError> {
        if col >= LCD_COLS || row >= LCD_ROWS {
            return Err(DisplayError::InvalidCoordinates);
        }
        self.command(CMD_SET_DDRAM | (ROW_OFFSETS[row as usize] + col))
    }

    fn command(&mut self, value: u8) -> Result<(), DisplayError> {
        self.send(value, false)
    }

    fn write_char(&mut self, c: char) -> Result<(), DisplayError> {
        let byte = if c.is_ascii() && !c.is_ascii_control() {
            c as u8
        } else {
            b'?'
        };
        self.send(byte, true)
    }

    fn send(&mut self, value: u8, is_data: bool) -> Result<(), DisplayError> {
        set(&mut self.rs, is_data)?;
        self.write_nibble(value >> 4)?;
        self.write_nibble(value & 0x0F)?;
        self.delay.delay_us(EXEC_US);
        Ok(())
    }

    fn write_nibble(&mut self, nibble: u8) -> Result<(), DisplayError> {
        for (bit, pin) in self.data.iter_mut().enumerate() {
            set(pin, nibble & (1 << bit) != 0)?;
        }
        self.pulse_enable()
    }

    /// Latch the data lines on the falling edge of EN
    fn pulse_enable(&mut self) -> Result<(), DisplayError> {
        set(&mut self.en, true)?;
        self.delay.delay_us(1);
        set(&mut self.en, false)?;
        self.delay.delay_us(1);
        Ok(())
    }
}

impl<P: OutputPin, D: DelayNs> DisplayBackend for Hd44780<P, D> {
    fn clear(&mut self) -> Result<(), DisplayError> {
        if !self.initialized {
            return Err(DisplayError::NotInitialized);
        }
        self.command(CMD_CLEAR)?;
        self.delay.delay_us(CLEAR_US);
        Ok(())
    }

    fn draw_text(&mut self, row: u8, col: u8, text: &str) -> Result<(), DisplayError> {
        if !self.initialized {
            return Err(DisplayError::NotInitialized);
        }
        self.set_cursor(col, row)?;

        let room = (LCD_COLS - col) as usize;
        for c in text.chars().take(room) {
            self.write_char(c)?;
        }
        Ok(())
    }

    fn dimensions(&self) -> (u8, u8) {
        (LCD_COLS, LCD_ROWS)
    }

    fn is_ready(&self) -> bool {
        self.initialized
    }
}

fn set<P: OutputPin>(pin: &mut P, high: bool) -> Result<(), DisplayError> {
    let result = if high { pin.set_high() } else { pin.set_low() };
    result.map_err(|_| DisplayError::Communication)
}
