//! Mocks and a tiny executor shared by the unit tests.

extern crate std;

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll, RawWaker, RawWakerVTable, Waker};
use std::collections::VecDeque;
use std::vec::Vec;

use embedded_hal_async::delay::DelayNs;
use mouse_proto::MouseReport;

use crate::input::{ChassisButtonSource, InputError, JoystickSource};
use crate::output::{IndicatorSink, ReportSink, TransportError};
use crate::types::{ChassisButtons, JoystickButtons, JoystickSample};

/// Run a future to completion (simple blocking executor).
///
/// Every mock resolves immediately, so a pending poll is a test bug.
pub fn block_on<F: Future>(mut f: F) -> F::Output {
    fn noop_raw_waker() -> RawWaker {
        fn noop(_: *const ()) {}
        fn clone(_: *const ()) -> RawWaker {
            noop_raw_waker()
        }
        static VTABLE: RawWakerVTable = RawWakerVTable::new(clone, noop, noop, noop);
        RawWaker::new(core::ptr::null(), &VTABLE)
    }

    let waker = unsafe { Waker::from_raw(noop_raw_waker()) };
    let mut cx = Context::from_waker(&waker);

    // SAFETY: We don't move f after pinning
    let mut f = unsafe { Pin::new_unchecked(&mut f) };

    match f.as_mut().poll(&mut cx) {
        Poll::Ready(result) => result,
        Poll::Pending => panic!("Mock future returned Pending unexpectedly"),
    }
}

/// Records every requested pause instead of sleeping.
#[derive(Default)]
pub struct MockDelay {
    pub pauses_us: Vec<u32>,
}

impl MockDelay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_us(&self) -> u64 {
        self.pauses_us.iter().map(|&us| u64::from(us)).sum()
    }
}

impl DelayNs for MockDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.pauses_us.push(ns / 1_000);
    }

    async fn delay_us(&mut self, us: u32) {
        self.pauses_us.push(us);
    }

    async fn delay_ms(&mut self, ms: u32) {
        self.pauses_us.push(ms * 1_000);
    }
}

/// Captures sent reports, optionally failing every send.
#[derive(Default)]
pub struct MockSink {
    pub sent: Vec<MouseReport>,
    pub attempts: usize,
    fail_with: Option<TransportError>,
}

impl MockSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(error: TransportError) -> Self {
        Self {
            fail_with: Some(error),
            ..Self::default()
        }
    }
}

impl ReportSink for MockSink {
    async fn send(&mut self, report: &MouseReport) -> Result<(), TransportError> {
        self.attempts += 1;
        match self.fail_with {
            Some(error) => Err(error),
            None => {
                self.sent.push(*report);
                Ok(())
            }
        }
    }
}

/// Replays scripted joystick readings, then reports a disconnect.
#[derive(Default)]
pub struct MockJoystick {
    samples: VecDeque<Result<JoystickSample, InputError>>,
    buttons: VecDeque<JoystickButtons>,
}

impl MockJoystick {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue one tick: the axis sample, and the button levels seen by the
    /// edge detector.
    pub fn push(&mut self, sample: JoystickSample) -> &mut Self {
        self.samples.push_back(Ok(sample));
        self.buttons.push_back(sample.buttons());
        self
    }

    pub fn push_error(&mut self, error: InputError) -> &mut Self {
        self.samples.push_back(Err(error));
        self
    }
}

impl JoystickSource for MockJoystick {
    async fn sample(&mut self) -> Result<JoystickSample, InputError> {
        self.samples
            .pop_front()
            .unwrap_or(Err(InputError::Disconnected))
    }

    async fn raw_buttons(&mut self) -> Result<JoystickButtons, InputError> {
        self.buttons.pop_front().ok_or(InputError::Disconnected)
    }
}

/// Replays chassis masks; idle once exhausted.
#[derive(Default)]
pub struct MockChassis {
    masks: VecDeque<ChassisButtons>,
}

impl MockChassis {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, mask: ChassisButtons) -> &mut Self {
        self.masks.push_back(mask);
        self
    }
}

impl ChassisButtonSource for MockChassis {
    fn read_mask(&mut self) -> ChassisButtons {
        self.masks.pop_front().unwrap_or(ChassisButtons::NONE)
    }
}

/// Remembers every indicator write.
#[derive(Default)]
pub struct MockIndicator {
    pub writes: Vec<u32>,
}

impl MockIndicator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IndicatorSink for MockIndicator {
    fn write(&mut self, mask: u32) {
        self.writes.push(mask);
    }
}
