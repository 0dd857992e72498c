//! Operator switch readings that drive state transitions

/// Logical position of an operator switch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SwitchPosition {
    /// Switch closed (pin pulled LOW)
    Engaged,
    /// Switch open (pin held HIGH by the pull-up)
    Disengaged,
}

impl SwitchPosition {
    /// Decode an active-low pin level
    pub fn from_active_low(pin_is_low: bool) -> Self {
        if pin_is_low {
            SwitchPosition::Engaged
        } else {
            SwitchPosition::Disengaged
        }
    }
}

/// Both operator switches, sampled once per control cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SwitchReadings {
    /// Batch control switch
    pub control: SwitchPosition,
    /// Manual motor override switch
    pub manual: SwitchPosition,
}

impl SwitchReadings {
    /// Readings substituted when the switches cannot be read. Resolves to Stopped.
    pub const FAIL_SAFE: Self = Self::new(SwitchPosition::Disengaged, SwitchPosition::Disengaged);

    pub const fn new(control: SwitchPosition, manual: SwitchPosition) -> Self {
        Self { control, manual }
    }

    /// Control switch engaged, manual switch open: run the batch
    pub const fn run_batch() -> Self {
        Self::new(SwitchPosition::Engaged, SwitchPosition::Disengaged)
    }

    /// Manual switch engaged, control switch open: run the motor by hand
    pub const fn manual_override() -> Self {
        Self::new(SwitchPosition::Disengaged, SwitchPosition::Engaged)
    }

    /// Both switches engaged; not a valid operator selection
    pub const fn both_engaged() -> Self {
        Self::new(SwitchPosition::Engaged, SwitchPosition::Engaged)
    }

    /// Both switches open
    pub const fn released() -> Self {
        Self::FAIL_SAFE
    }
}
