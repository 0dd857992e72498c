//! Configuration type definitions

/// Nominal control cycle period (ms). One cycle advances both timers by one second.
pub const CONTROL_PERIOD_MS: u32 = 1000;

/// Rest time in Running before a mix starts (hours)
pub const MIX_INTERVAL_HOURS: u8 = 1;

/// Minute mark of the mix timer at which a mix may end
pub const MIX_DURATION_MINUTES: u8 = 2;

/// Number of plain mixes before a corrected mix
pub const CORRECTION_THRESHOLD: u8 = 1;

/// Second mark at which a plain mix ends
pub const MIX_EXIT_SECONDS: u8 = 6;

/// Full display redraw interval (ms)
pub const DISPLAY_REFRESH_MS: u32 = 3000;

/// Running screen rotation interval (ms)
pub const SCREEN_CYCLE_MS: u32 = 10_000;

/// Batch timing thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BatchConfig {
    /// Hours of rest in Running before the motor mixes
    pub mix_interval_hours: u8,
    /// Minute mark of the mix timer at which the mix may end
    pub mix_duration_minutes: u8,
    /// Plain mixes completed before the corrected (one second longer) mix
    pub correction_threshold: u8,
    /// Second mark at which a plain mix ends
    pub mix_exit_seconds: u8,
}

impl BatchConfig {
    /// The machine's fixed thresholds
    pub const DEFAULT: Self = Self {
        mix_interval_hours: MIX_INTERVAL_HOURS,
        mix_duration_minutes: MIX_DURATION_MINUTES,
        correction_threshold: CORRECTION_THRESHOLD,
        mix_exit_seconds: MIX_EXIT_SECONDS,
    };

    /// Second mark at which a corrected mix ends
    ///
    /// Only reachable by the mix timer while `mix_exit_seconds` is below 59.
    pub const fn corrected_exit_seconds(&self) -> u8 {
        self.mix_exit_seconds.saturating_add(1)
    }
}

// The corrected exit must still be a second the mix timer shows
const _: () = assert!(BatchConfig::DEFAULT.corrected_exit_seconds() < 60);

impl Default for BatchConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Display refresh and screen rotation intervals
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayTiming {
    /// Periodic full redraw interval (ms)
    pub refresh_interval_ms: u32,
    /// Interval between Running screens (ms)
    pub screen_cycle_ms: u32,
}

impl DisplayTiming {
    pub const DEFAULT: Self = Self {
        refresh_interval_ms: DISPLAY_REFRESH_MS,
        screen_cycle_ms: SCREEN_CYCLE_MS,
    };
}

impl Default for DisplayTiming {
    fn default() -> Self {
        Self::DEFAULT
    }
}
