//! Chassis-button driven mode state.
//!
//! One call per tick. Exactly one branch fires, checked in this order:
//!
//! | mask            | condition          | effect                                  |
//! |-----------------|--------------------|-----------------------------------------|
//! | `BTN0`          |                    | roll the dice: prank on odd, reset on even |
//! | `BTN1`          | sensitivity < max  | sensitivity + 1                         |
//! | `BTN2`          | sensitivity > min  | sensitivity - 1                         |
//! | `BTN3`          |                    | latch the mode button                   |
//! | anything else   | latch set          | clear latch, toggle scroll mode         |

use crate::rng::RngState;
use crate::types::ChassisButtons;

/// Error type for configuration values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Sensitivity outside `Sensitivity::MIN..=Sensitivity::MAX`.
    SensitivityOutOfRange,
}

/// Divisor applied to joystick deflection. Larger is slower.
///
/// Always within [`Sensitivity::MIN`]`..=`[`Sensitivity::MAX`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Sensitivity(u8);

impl Sensitivity {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 50;

    /// Value restored by an even dice roll.
    pub const DEFAULT: Self = Self(3);

    /// # Errors
    ///
    /// Returns [`ConfigError::SensitivityOutOfRange`] outside `MIN..=MAX`.
    pub const fn new(value: u8) -> Result<Self, ConfigError> {
        if value >= Self::MIN && value <= Self::MAX {
            Ok(Self(value))
        } else {
            Err(ConfigError::SensitivityOutOfRange)
        }
    }

    #[inline]
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Step up by one. Returns `false` when already at the maximum.
    pub fn increment(&mut self) -> bool {
        if self.0 < Self::MAX {
            self.0 += 1;
            true
        } else {
            false
        }
    }

    /// Step down by one. Returns `false` when already at the minimum.
    pub fn decrement(&mut self) -> bool {
        if self.0 > Self::MIN {
            self.0 -= 1;
            true
        } else {
            false
        }
    }
}

impl Default for Sensitivity {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u8> for Sensitivity {
    type Error = ConfigError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Mutable controller state, changed only by [`on_chassis_buttons`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ControllerState {
    pub sensitivity: Sensitivity,
    pub scroll_mode: bool,
    /// Mode button seen pressed, waiting for release.
    pub chassis_button3_latched: bool,
}

impl ControllerState {
    #[must_use]
    pub const fn new(sensitivity: Sensitivity) -> Self {
        Self {
            sensitivity,
            scroll_mode: false,
            chassis_button3_latched: false,
        }
    }
}

/// Outcome of one chassis-button evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    None,
    /// The dice came up odd; play the prank script.
    TriggerPrank,
    SensitivityChanged,
    /// `scroll_mode` flipped; the indicator should follow it.
    ModeToggled,
}

/// Apply one chassis-button mask to the controller state.
pub fn on_chassis_buttons(
    mask: ChassisButtons,
    state: &mut ControllerState,
    rng: &mut RngState,
) -> Action {
    if mask == ChassisButtons::BTN0 {
        rng.mix();
        rng.seed_from_mix();
        if rng.next_uniform() % 2 == 1 {
            Action::TriggerPrank
        } else {
            state.sensitivity = Sensitivity::DEFAULT;
            Action::SensitivityChanged
        }
    } else if mask == ChassisButtons::BTN1 && state.sensitivity.increment() {
        Action::SensitivityChanged
    } else if mask == ChassisButtons::BTN2 && state.sensitivity.decrement() {
        Action::SensitivityChanged
    } else if mask == ChassisButtons::BTN3 {
        state.chassis_button3_latched = true;
        Action::None
    } else if state.chassis_button3_latched {
        state.chassis_button3_latched = false;
        state.scroll_mode = !state.scroll_mode;
        Action::ModeToggled
    } else {
        Action::None
    }
}
