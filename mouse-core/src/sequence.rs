//! Scripted report playback.
//!
//! A script is an immutable list of reports, each followed by a fixed
//! pause. Playback always starts at the first step and runs to the end;
//! there is no way to cancel it, and while it plays the caller services no
//! other input.
//!
//! The only script shipped is the prank: a burst of diagonal nudges that
//! throws the pointer to a corner, a drag back, a click, and then slow
//! deliberate clicking.

use embedded_hal_async::delay::DelayNs;
use mouse_proto::{MouseButtons, MouseReport};

use crate::output::ReportSink;

/// Pause between the fast steps of the prank.
pub const SHORT_PAUSE_US: u32 = 20_000;
/// Pause between the slow clicks at the end of the prank.
pub const LONG_PAUSE_US: u32 = 800_000;

/// How many times the opening nudge repeats.
pub const NUDGE_REPEATS: usize = 25;
/// How many slow press/release pairs close the prank.
pub const SLOW_CLICK_REPEATS: usize = 3;

/// Opening nudge. The vertical delta is the bit pattern `0b1000_0000`
/// read as a signed byte, i.e. -128 (full speed up).
pub const NUDGE: MouseReport = MouseReport::movement(0b100_0000, 0b1000_0000_u8 as i8);

/// Total number of steps in [`PRANK_STEPS`].
pub const PRANK_STEP_COUNT: usize = NUDGE_REPEATS + 2 + 2 + 1 + 2 * SLOW_CLICK_REPEATS;

/// One scripted report and the pause that follows it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScriptStep {
    pub report: MouseReport,
    pub delay_us: u32,
}

impl ScriptStep {
    pub const fn new(report: MouseReport, delay_us: u32) -> Self {
        Self { report, delay_us }
    }
}

const fn build_prank_steps() -> [ScriptStep; PRANK_STEP_COUNT] {
    let left = MouseReport::press(MouseButtons::LEFT);
    let mut steps = [ScriptStep::new(MouseReport::IDLE, 0); PRANK_STEP_COUNT];
    let mut i = 0;

    while i < NUDGE_REPEATS {
        steps[i] = ScriptStep::new(NUDGE, SHORT_PAUSE_US);
        i += 1;
    }

    // drag away to the left
    steps[i] = ScriptStep::new(MouseReport::movement(-128, 0), SHORT_PAUSE_US);
    steps[i + 1] = ScriptStep::new(MouseReport::movement(-71, 0), SHORT_PAUSE_US);
    // quick click
    steps[i + 2] = ScriptStep::new(left, SHORT_PAUSE_US);
    steps[i + 3] = ScriptStep::new(MouseReport::IDLE, SHORT_PAUSE_US);
    steps[i + 4] = ScriptStep::new(MouseReport::movement(0, 80), LONG_PAUSE_US);
    i += 5;

    let mut pair = 0;
    while pair < SLOW_CLICK_REPEATS {
        steps[i] = ScriptStep::new(left, LONG_PAUSE_US);
        steps[i + 1] = ScriptStep::new(MouseReport::IDLE, LONG_PAUSE_US);
        i += 2;
        pair += 1;
    }

    steps
}

/// Every step of the prank, in playback order.
pub const PRANK_STEPS: [ScriptStep; PRANK_STEP_COUNT] = build_prank_steps();

/// The prank as a playable script.
pub const PRANK_SCRIPT: SequencerScript = SequencerScript::new(&PRANK_STEPS);

/// Immutable script shared by every playback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SequencerScript {
    steps: &'static [ScriptStep],
}

impl SequencerScript {
    pub const fn new(steps: &'static [ScriptStep]) -> Self {
        Self { steps }
    }

    pub const fn steps(&self) -> &'static [ScriptStep] {
        self.steps
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Sum of every pause in the script.
    pub fn total_delay_us(&self) -> u64 {
        self.steps.iter().map(|step| u64::from(step.delay_us)).sum()
    }
}

/// Result of one playback.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SequenceSummary {
    pub sent: usize,
    /// Reports the sink refused; playback kept going.
    pub dropped: usize,
    pub elapsed_us: u64,
}

/// Plays a [`SequencerScript`] into a [`ReportSink`].
pub struct ReportSequencer {
    script: SequencerScript,
    cursor: usize,
}

impl ReportSequencer {
    pub const fn new(script: SequencerScript) -> Self {
        Self { script, cursor: 0 }
    }

    /// Index of the next step to play.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_finished(&self) -> bool {
        self.cursor >= self.script.step_count()
    }

    /// Play the whole script, pacing each step with `delay`.
    ///
    /// Always starts from the first step. Transport errors are counted and
    /// skipped; the pause still happens so the timing is unchanged.
    pub async fn run<S, D>(&mut self, sink: &mut S, delay: &mut D) -> SequenceSummary
    where
        S: ReportSink,
        D: DelayNs,
    {
        let mut summary = SequenceSummary::default();
        self.cursor = 0;

        while let Some(step) = self.script.steps().get(self.cursor) {
            match sink.send(&step.report).await {
                Ok(()) => summary.sent += 1,
                Err(e) => {
                    warn!("script step {} dropped: {:?}", self.cursor, e);
                    summary.dropped += 1;
                }
            }
            delay.delay_us(step.delay_us).await;
            summary.elapsed_us += u64::from(step.delay_us);
            self.cursor += 1;
        }

        summary
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::output::TransportError;
    use crate::test_util::{block_on, MockDelay, MockSink};
    use std::vec::Vec;

    #[test]
    fn prank_schedule_sums_to_contract() {
        let expected: u64 = 25 * 20_000 + 2 * 20_000 + 2 * 20_000 + 800_000 + 3 * (800_000 + 800_000);
        assert_eq!(PRANK_SCRIPT.total_delay_us(), expected);
        assert_eq!(PRANK_SCRIPT.step_count(), 36);
    }

    #[test]
    fn prank_literal_steps() {
        let steps = PRANK_SCRIPT.steps();
        for step in &steps[..NUDGE_REPEATS] {
            assert_eq!(step.report, MouseReport::new(MouseButtons::NONE, 64, -128, 0));
            assert_eq!(step.delay_us, SHORT_PAUSE_US);
        }

        let tail: Vec<(u8, i8, i8, i8, u32)> = steps[NUDGE_REPEATS..]
            .iter()
            .map(|s| {
                let r = s.report;
                (r.buttons.raw(), r.dx, r.dy, r.wheel, s.delay_us)
            })
            .collect();
        assert_eq!(
            tail,
            [
                (0, -128, 0, 0, 20_000),
                (0, -71, 0, 0, 20_000),
                (1, 0, 0, 0, 20_000),
                (0, 0, 0, 0, 20_000),
                (0, 0, 80, 0, 800_000),
                (1, 0, 0, 0, 800_000),
                (0, 0, 0, 0, 800_000),
                (1, 0, 0, 0, 800_000),
                (0, 0, 0, 0, 800_000),
                (1, 0, 0, 0, 800_000),
                (0, 0, 0, 0, 800_000),
            ]
        );
    }

    #[test]
    fn run_plays_every_step_with_its_pause() {
        let mut sink = MockSink::new();
        let mut delay = MockDelay::new();
        let mut sequencer = ReportSequencer::new(PRANK_SCRIPT);

        let summary = block_on(sequencer.run(&mut sink, &mut delay));

        assert!(sequencer.is_finished());
        assert_eq!(summary.sent, PRANK_STEP_COUNT);
        assert_eq!(summary.dropped, 0);
        assert_eq!(summary.elapsed_us, PRANK_SCRIPT.total_delay_us());
        assert_eq!(delay.total_us(), PRANK_SCRIPT.total_delay_us());
        assert_eq!(delay.pauses_us.len(), PRANK_STEP_COUNT);

        let expected: Vec<MouseReport> = PRANK_STEPS.iter().map(|s| s.report).collect();
        assert_eq!(sink.sent, expected);
    }

    #[test]
    fn run_restarts_from_first_step() {
        let mut sink = MockSink::new();
        let mut delay = MockDelay::new();
        let mut sequencer = ReportSequencer::new(PRANK_SCRIPT);

        block_on(sequencer.run(&mut sink, &mut delay));
        let summary = block_on(sequencer.run(&mut sink, &mut delay));

        assert_eq!(summary.sent, PRANK_STEP_COUNT);
        assert_eq!(sink.sent.len(), 2 * PRANK_STEP_COUNT);
    }

    #[test]
    fn transport_errors_do_not_stop_playback() {
        let mut sink = MockSink::failing(TransportError::Busy);
        let mut delay = MockDelay::new();
        let mut sequencer = ReportSequencer::new(PRANK_SCRIPT);

        let summary = block_on(sequencer.run(&mut sink, &mut delay));

        assert_eq!(summary.sent, 0);
        assert_eq!(summary.dropped, PRANK_STEP_COUNT);
        assert_eq!(delay.total_us(), PRANK_SCRIPT.total_delay_us());
    }
}
