//! Mix cycle counter
//!
//! Counts the time since the current rest or mixing phase began. There is
//! no day field: passing 24 hours clears the whole counter.

use core::fmt;

/// Elapsed time within the current rest/mix phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MixTime {
    hours: u8,
    minutes: u8,
    seconds: u8,
}

impl MixTime {
    /// Zero elapsed time
    pub const ZERO: Self = Self {
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    /// Build a mix time, rejecting out-of-range fields
    pub fn new(hours: u8, minutes: u8, seconds: u8) -> Option<Self> {
        if hours >= 24 || minutes >= 60 || seconds >= 60 {
            return None;
        }
        Some(Self {
            hours,
            minutes,
            seconds,
        })
    }

    pub fn hours(&self) -> u8 {
        self.hours
    }

    pub fn minutes(&self) -> u8 {
        self.minutes
    }

    pub fn seconds(&self) -> u8 {
        self.seconds
    }

    /// Total elapsed seconds
    pub fn as_secs(&self) -> u32 {
        self.hours as u32 * 3600 + self.minutes as u32 * 60 + self.seconds as u32
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Reset to zero
    pub fn reset(&mut self) {
        *self = Self::ZERO;
    }

    /// Advance by one second
    pub fn tick(&mut self) {
        self.seconds += 1;
        if self.seconds < 60 {
            return;
        }
        self.seconds = 0;

        self.minutes += 1;
        if self.minutes < 60 {
            return;
        }
        self.minutes = 0;

        self.hours += 1;
        if self.hours >= 24 {
            // Caps instead of cascading
            self.reset();
        }
    }
}

/// Formats as `HH:MM:SS`
impl fmt::Display for MixTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}
