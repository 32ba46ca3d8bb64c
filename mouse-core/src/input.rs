//! Input collaborator traits and error types.

use core::future::Future;

use crate::types::{ChassisButtons, JoystickButtons, JoystickSample};

/// Error type for joystick reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputError {
    /// Bus transfer failed.
    Io,
    /// Device did not answer.
    Disconnected,
}

/// Async trait for the joystick peripheral.
///
/// Polled once per tick. Implementations must be `#![no_std]` compatible
/// with no heap allocation.
pub trait JoystickSource {
    /// Read both axes together with the button levels.
    fn sample(&mut self) -> impl Future<Output = Result<JoystickSample, InputError>>;

    /// Read only the button levels.
    fn raw_buttons(&mut self) -> impl Future<Output = Result<JoystickButtons, InputError>>;
}

/// The four chassis push-buttons.
pub trait ChassisButtonSource {
    /// Current button levels as a mask.
    fn read_mask(&mut self) -> ChassisButtons;
}
