//! Core report types: MouseButtons, MouseReport.

use core::ops::{BitAnd, BitOr, BitOrAssign, Not};

/// Mouse button state as a two-bit field.
///
/// Only [`MouseButtons::LEFT`] and [`MouseButtons::RIGHT`] exist; the
/// remaining bits of the wire byte are always zero.
///
/// # Example
///
/// ```
/// use mouse_proto::MouseButtons;
///
/// let buttons = MouseButtons::LEFT | MouseButtons::RIGHT;
/// assert!(buttons.contains(MouseButtons::LEFT));
/// assert_eq!(buttons.raw(), 0b11);
/// ```
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MouseButtons(u8);

impl MouseButtons {
    pub const LEFT: Self = Self(1 << 0);
    pub const RIGHT: Self = Self(1 << 1);

    /// No buttons pressed.
    pub const NONE: Self = Self(0);

    /// Every valid button bit.
    pub const ALL: Self = Self(Self::LEFT.0 | Self::RIGHT.0);

    /// Build from a raw byte, dropping bits that are not a known button.
    #[inline]
    #[must_use]
    pub const fn from_bits_truncate(bits: u8) -> Self {
        Self(bits & Self::ALL.0)
    }

    /// Build from a raw byte, rejecting unknown bits.
    #[inline]
    #[must_use]
    pub const fn from_bits(bits: u8) -> Option<Self> {
        if bits & !Self::ALL.0 == 0 {
            Some(Self(bits))
        } else {
            None
        }
    }

    /// Check if the given button(s) are pressed.
    #[inline]
    #[must_use]
    pub const fn contains(self, button: MouseButtons) -> bool {
        (self.0 & button.0) == button.0
    }

    /// Get the raw wire byte.
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

impl BitOr for MouseButtons {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for MouseButtons {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for MouseButtons {
    type Output = Self;

    #[inline]
    fn bitand(self, rhs: Self) -> Self::Output {
        Self(self.0 & rhs.0)
    }
}

impl Not for MouseButtons {
    type Output = Self;

    #[inline]
    fn not(self) -> Self::Output {
        Self(!self.0 & Self::ALL.0)
    }
}

/// One relative pointing-device report.
///
/// Built fresh for every tick or script step and handed straight to the
/// transport; nothing holds on to it.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MouseReport {
    pub buttons: MouseButtons,
    /// Horizontal movement, positive to the right.
    pub dx: i8,
    /// Vertical movement, positive downwards.
    pub dy: i8,
    /// Scroll wheel, positive away from the user.
    pub wheel: i8,
}

impl MouseReport {
    /// No buttons, no motion.
    pub const IDLE: Self = Self::new(MouseButtons::NONE, 0, 0, 0);

    #[must_use]
    pub const fn new(buttons: MouseButtons, dx: i8, dy: i8, wheel: i8) -> Self {
        Self {
            buttons,
            dx,
            dy,
            wheel,
        }
    }

    /// Pure motion report.
    #[must_use]
    pub const fn movement(dx: i8, dy: i8) -> Self {
        Self::new(MouseButtons::NONE, dx, dy, 0)
    }

    /// Pure scroll report.
    #[must_use]
    pub const fn scroll(wheel: i8) -> Self {
        Self::new(MouseButtons::NONE, 0, 0, wheel)
    }

    /// Buttons held, no motion.
    #[must_use]
    pub const fn press(buttons: MouseButtons) -> Self {
        Self::new(buttons, 0, 0, 0)
    }

    #[must_use]
    pub const fn is_idle(&self) -> bool {
        self.buttons.is_empty() && self.dx == 0 && self.dy == 0 && self.wheel == 0
    }
}
