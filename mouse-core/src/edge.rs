//! Press/release edge detection for boolean inputs.
//!
//! The detector is non-blocking: it compares the current level against the
//! level seen on the previous tick and never waits for the signal to
//! change. Call it at most once per tick per signal.

/// Transition observed between two consecutive ticks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Edge {
    None,
    /// `false -> true`
    Pressed,
    /// `true -> false`
    Released,
}

/// Last observed level of one monitored signal.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EdgeState {
    pub previous: bool,
}

impl EdgeState {
    #[must_use]
    pub const fn new() -> Self {
        Self { previous: false }
    }

    /// Compare `current` to the stored level and remember it.
    pub fn detect(&mut self, current: bool) -> Edge {
        let edge = match (self.previous, current) {
            (true, false) => Edge::Released,
            (false, true) => Edge::Pressed,
            _ => Edge::None,
        };
        self.previous = current;
        edge
    }
}

/// Free-function form of [`EdgeState::detect`].
pub fn detect(current: bool, state: &mut EdgeState) -> Edge {
    state.detect(current)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_hold_release_sequence() {
        let mut state = EdgeState::new();
        let edges: [Edge; 4] =
            core::array::from_fn(|i| detect([false, true, true, false][i], &mut state));
        assert_eq!(
            edges,
            [Edge::None, Edge::Pressed, Edge::None, Edge::Released]
        );
    }

    #[test]
    fn state_tracks_last_level() {
        let mut state = EdgeState::new();
        state.detect(true);
        assert!(state.previous);
        assert_eq!(state.detect(true), Edge::None);
        state.detect(false);
        assert!(!state.previous);
    }

    #[test]
    fn independent_signals_do_not_interfere() {
        let mut stick = EdgeState::new();
        let mut trigger = EdgeState::new();
        assert_eq!(stick.detect(true), Edge::Pressed);
        assert_eq!(trigger.detect(false), Edge::None);
        assert_eq!(stick.detect(false), Edge::Released);
        assert_eq!(trigger.detect(true), Edge::Pressed);
    }
}
