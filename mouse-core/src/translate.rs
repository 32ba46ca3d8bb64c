//! Joystick-to-report translation.
//!
//! Both functions are pure: the same inputs always yield the same report.

use mouse_proto::{MouseButtons, MouseReport};

use crate::edge::Edge;
use crate::mode::Sensitivity;
use crate::types::{JoystickSample, AXIS_CENTER};

/// Which joystick button an edge belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum JoystickButton {
    /// Stick press, mapped to the left mouse button.
    Button1,
    /// Trigger, mapped to the right mouse button.
    Button2,
}

impl JoystickButton {
    #[must_use]
    pub const fn mouse_button(self) -> MouseButtons {
        match self {
            JoystickButton::Button1 => MouseButtons::LEFT,
            JoystickButton::Button2 => MouseButtons::RIGHT,
        }
    }
}

/// Scale one raw axis by the sensitivity divisor, truncating toward zero.
#[inline]
fn scale_axis(raw: u8, sensitivity: Sensitivity) -> i8 {
    let deflection = i16::from(raw) - i16::from(AXIS_CENTER);
    // deflection is in -128..=127 and the divisor is at least 1
    (deflection / i16::from(sensitivity.get())) as i8
}

/// Convert a joystick sample into a movement or scroll report.
///
/// In move mode both axes become `dx`/`dy`; in scroll mode only the Y
/// axis is used, as the wheel delta.
#[must_use]
pub fn translate(sample: JoystickSample, sensitivity: Sensitivity, scroll_mode: bool) -> MouseReport {
    if scroll_mode {
        MouseReport::scroll(scale_axis(sample.y, sensitivity))
    } else {
        MouseReport::movement(
            scale_axis(sample.x, sensitivity),
            scale_axis(sample.y, sensitivity),
        )
    }
}

/// Turn a button release into a click: a press report followed by a
/// release report. Other edges produce nothing.
#[must_use]
pub fn translate_button_edge(
    edge: Edge,
    which: JoystickButton,
) -> Option<(MouseReport, MouseReport)> {
    match edge {
        Edge::Released => Some((MouseReport::press(which.mouse_button()), MouseReport::IDLE)),
        Edge::Pressed | Edge::None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sens(value: u8) -> Sensitivity {
        Sensitivity::new(value).unwrap()
    }

    #[test]
    fn centered_stick_does_not_move() {
        for value in [Sensitivity::MIN, 3, 17, Sensitivity::MAX] {
            let report = translate(JoystickSample::CENTERED, sens(value), false);
            assert_eq!(report.dx, 0);
            assert_eq!(report.dy, 0);
        }
    }

    #[test]
    fn full_deflection_at_unit_sensitivity() {
        let report = translate(JoystickSample::new(255, 0), sens(1), false);
        assert_eq!(report.dx, 127);
        assert_eq!(report.dy, -128);
        assert_eq!(report.wheel, 0);
        assert!(report.buttons.is_empty());

        let report = translate(JoystickSample::new(0, 255), sens(1), false);
        assert_eq!(report.dx, -128);
        assert_eq!(report.dy, 127);
    }

    #[test]
    fn division_truncates_toward_zero() {
        // 200 - 128 = 72, 72 / 5 = 14; 50 - 128 = -78, -78 / 5 = -15
        let report = translate(JoystickSample::new(200, 50), sens(5), false);
        assert_eq!(report.dx, 14);
        assert_eq!(report.dy, -15);

        // -1 / 3 truncates to 0, not -1
        let report = translate(JoystickSample::new(127, 127), sens(3), false);
        assert_eq!((report.dx, report.dy), (0, 0));
    }

    #[test]
    fn scroll_mode_uses_y_axis_only() {
        let report = translate(JoystickSample::new(255, 8), sens(3), true);
        assert_eq!(report.dx, 0);
        assert_eq!(report.dy, 0);
        assert_eq!(report.wheel, -40);
    }

    #[test]
    fn translate_is_pure() {
        let sample = JoystickSample::new(31, 222);
        let first = translate(sample, sens(4), false);
        for _ in 0..5 {
            assert_eq!(translate(sample, sens(4), false), first);
        }
    }

    #[test]
    fn release_edge_emits_click_pair() {
        let (press, release) =
            translate_button_edge(Edge::Released, JoystickButton::Button1).unwrap();
        assert_eq!(press, MouseReport::press(MouseButtons::LEFT));
        assert_eq!(release, MouseReport::IDLE);

        let (press, _) = translate_button_edge(Edge::Released, JoystickButton::Button2).unwrap();
        assert_eq!(press.buttons, MouseButtons::RIGHT);
    }

    #[test]
    fn press_and_none_edges_emit_nothing() {
        assert_eq!(translate_button_edge(Edge::Pressed, JoystickButton::Button1), None);
        assert_eq!(translate_button_edge(Edge::None, JoystickButton::Button2), None);
    }
}
