//! Engine tuning knobs.

use crate::mode::Sensitivity;

/// Pause after every motion report; sets the polling cadence.
pub const DEFAULT_TICK_PERIOD_US: u32 = 20_000;

/// Time between the press and release reports of a click.
pub const DEFAULT_CLICK_HOLD_US: u32 = 20_000;

/// Indicator value written when scroll mode is on.
pub const INDICATOR_ALL_ON: u32 = 0xFFFF_FFFF;

/// Runtime configuration for [`MouseEngine`](crate::engine::MouseEngine).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EngineConfig {
    pub tick_period_us: u32,
    pub click_hold_us: u32,
    pub initial_sensitivity: Sensitivity,
    /// Value written to the indicator in scroll mode; move mode writes 0.
    pub indicator_on: u32,
}

impl EngineConfig {
    pub const fn new() -> Self {
        Self {
            tick_period_us: DEFAULT_TICK_PERIOD_US,
            click_hold_us: DEFAULT_CLICK_HOLD_US,
            initial_sensitivity: Sensitivity::DEFAULT,
            indicator_on: INDICATOR_ALL_ON,
        }
    }

    #[must_use]
    pub const fn with_initial_sensitivity(self, sensitivity: Sensitivity) -> Self {
        Self {
            initial_sensitivity: sensitivity,
            ..self
        }
    }

    #[must_use]
    pub const fn with_tick_period_us(self, tick_period_us: u32) -> Self {
        Self {
            tick_period_us,
            ..self
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}
