//! Batch runtime counter
//!
//! Counts the wall time since the batch entered Running. Rollovers cascade
//! seconds -> minutes -> hours -> days -> months, with 31 days (0..=30)
//! per month.

use core::fmt;

/// Highest day value before the month rolls over
pub const MAX_DAY: u8 = 30;

/// Accumulated batch runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BatchTime {
    months: u32,
    days: u8,
    hours: u8,
    minutes: u8,
    seconds: u8,
}

impl BatchTime {
    /// Zero runtime
    pub const ZERO: Self = Self {
        months: 0,
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    /// Build a runtime value, rejecting out-of-range fields
    pub fn new(months: u32, days: u8, hours: u8, minutes: u8, seconds: u8) -> Option<Self> {
        if days > MAX_DAY || hours >= 24 || minutes >= 60 || seconds >= 60 {
            return None;
        }
        Some(Self {
            months,
            days,
            hours,
            minutes,
            seconds,
        })
    }

    /// Whole months of runtime
    ///
    /// Unbounded, but the formatted runtime only fits a 16-column row up to
    /// 9999 months; beyond that a status line loses its trailing seconds.
    pub fn months(&self) -> u32 {
        self.months
    }

    pub fn days(&self) -> u8 {
        self.days
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

    /// Check if no time has accumulated
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
        if self.hours < 24 {
            return;
        }
        self.hours = 0;

        self.days += 1;
        if self.days <= MAX_DAY {
            return;
        }
        self.days = 0;
        self.months = self.months.saturating_add(1);
    }
}

/// Formats as `MM:DD:HH:MM:SS`
impl fmt::Display for BatchTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}:{:02}:{:02}",
            self.months, self.days, self.hours, self.minutes, self.seconds
        )
    }
}
