//! Raw input types produced by the peripheral drivers.

/// Raw axis value of a centered joystick.
pub const AXIS_CENTER: u8 = 128;

/// State of the two joystick buttons.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct JoystickButtons {
    /// Stick press; clicks the left mouse button.
    pub button1: bool,
    /// Trigger; clicks the right mouse button.
    pub button2: bool,
}

/// One joystick reading.
///
/// Axes are unsigned 8-bit raw values centered at [`AXIS_CENTER`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct JoystickSample {
    pub x: u8,
    pub y: u8,
    pub button1: bool,
    pub button2: bool,
}

impl JoystickSample {
    /// Stick at rest, nothing pressed.
    pub const CENTERED: Self = Self {
        x: AXIS_CENTER,
        y: AXIS_CENTER,
        button1: false,
        button2: false,
    };

    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        Self {
            x,
            y,
            button1: false,
            button2: false,
        }
    }

    #[inline]
    #[must_use]
    pub const fn buttons(&self) -> JoystickButtons {
        JoystickButtons {
            button1: self.button1,
            button2: self.button2,
        }
    }
}

impl Default for JoystickSample {
    fn default() -> Self {
        Self::CENTERED
    }
}

/// Four chassis push-buttons as a bit mask (bit0..bit3).
///
/// The engine only reacts to masks with exactly one bit set, except for
/// the mode button which acts on release.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChassisButtons(u8);

impl ChassisButtons {
    /// Re-rolls the dice: resets sensitivity or fires the prank.
    pub const BTN0: Self = Self(1 << 0);
    /// Raises the sensitivity divisor (slower pointer).
    pub const BTN1: Self = Self(1 << 1);
    /// Lowers the sensitivity divisor (faster pointer).
    pub const BTN2: Self = Self(1 << 2);
    /// Toggles move/scroll mode on release.
    pub const BTN3: Self = Self(1 << 3);

    pub const NONE: Self = Self(0);

    const MASK: u8 = 0x0F;

    /// Build from a GPIO read, keeping only the four button bits.
    #[inline]
    #[must_use]
    pub const fn from_bits_truncate(bits: u32) -> Self {
        Self((bits & Self::MASK as u32) as u8)
    }

    #[inline]
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl core::ops::BitOr for ChassisButtons {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chassis_mask_truncates_upper_bits() {
        assert_eq!(ChassisButtons::from_bits_truncate(0xFFFF_FFF1), ChassisButtons(0x01));
        assert_eq!(ChassisButtons::from_bits_truncate(0x10), ChassisButtons::NONE);
    }

    #[test]
    fn test_sample_buttons_projection() {
        let sample = JoystickSample {
            button2: true,
            ..JoystickSample::CENTERED
        };
        assert_eq!(
            sample.buttons(),
            JoystickButtons {
                button1: false,
                button2: true
            }
        );
    }
}
