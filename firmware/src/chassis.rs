//! On-board push buttons and the mode indicator.

use embedded_hal::digital::{InputPin, OutputPin, PinState};
use mouse_core::{ChassisButtonSource, ChassisButtons, IndicatorSink};

/// Number of chassis buttons wired to the board.
pub const CHASSIS_BUTTON_COUNT: usize = 4;

/// Four pulled-down inputs; bit `i` of the mask is `buttons[i]`.
///
/// A pin that fails to read counts as released.
pub struct ChassisButtonsGpio<P: InputPin> {
    buttons: [P; CHASSIS_BUTTON_COUNT],
}

impl<P: InputPin> ChassisButtonsGpio<P> {
    #[must_use]
    pub fn new(buttons: [P; CHASSIS_BUTTON_COUNT]) -> Self {
        Self { buttons }
    }
}

impl<P: InputPin> ChassisButtonSource for ChassisButtonsGpio<P> {
    fn read_mask(&mut self) -> ChassisButtons {
        let mask = self
            .buttons
            .iter_mut()
            .enumerate()
            .filter_map(|(i, pin)| pin.is_high().unwrap_or(false).then_some(i))
            .fold(0u32, |mask, i| mask | (1 << i));
        ChassisButtons::from_bits_truncate(mask)
    }
}

/// Single LED standing in for the indicator bank: lit for any non-zero mask.
pub struct LedIndicator<P: OutputPin> {
    led: P,
}

impl<P: OutputPin> LedIndicator<P> {
    #[must_use]
    pub fn new(led: P) -> Self {
        Self { led }
    }
}

impl<P: OutputPin> IndicatorSink for LedIndicator<P> {
    fn write(&mut self, mask: u32) {
        let _ = self.led.set_state(PinState::from(mask != 0));
    }
}
