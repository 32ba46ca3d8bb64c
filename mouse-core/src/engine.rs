//! MouseEngine: one control-loop tick from raw inputs to sent reports.

use embedded_hal_async::delay::DelayNs;
use mouse_proto::MouseReport;

use crate::config::EngineConfig;
use crate::edge::{detect, EdgeState};
use crate::input::{ChassisButtonSource, InputError, JoystickSource};
use crate::mode::{on_chassis_buttons, Action, ControllerState};
use crate::output::{IndicatorSink, ReportSink};
use crate::rng::RngState;
use crate::sequence::{ReportSequencer, SequenceSummary, PRANK_SCRIPT};
use crate::translate::{translate, translate_button_edge, JoystickButton};

/// Drives the translation engine against a set of peripherals.
///
/// Each [`tick`](Self::tick) runs, in order: axis translation, joystick
/// button clicks, chassis buttons. The engine owns all mutable state
/// (controller, generator, edge detectors); nothing is global.
///
/// # Error Handling
///
/// Transport errors are logged and counted, never propagated. A failed
/// joystick read sends an idle report so no click is left held, then
/// ends the tick early.
pub struct MouseEngine<J, C, L, O, D> {
    joystick: J,
    chassis: C,
    indicator: L,
    output: O,
    delay: D,
    config: EngineConfig,
    controller: ControllerState,
    rng: RngState,
    button1: EdgeState,
    button2: EdgeState,
    dropped: u32,
}

/// What a completed tick did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickOutcome {
    pub action: Action,
    /// Present when the prank played during this tick.
    pub prank: Option<SequenceSummary>,
}

/// Error type for engine ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EngineError {
    /// Error from the joystick.
    Input(InputError),
}

impl From<InputError> for EngineError {
    fn from(err: InputError) -> Self {
        EngineError::Input(err)
    }
}

impl<J, C, L, O, D> MouseEngine<J, C, L, O, D>
where
    J: JoystickSource,
    C: ChassisButtonSource,
    L: IndicatorSink,
    O: ReportSink,
    D: DelayNs,
{
    pub fn new(
        joystick: J,
        chassis: C,
        indicator: L,
        output: O,
        delay: D,
        config: EngineConfig,
    ) -> Self {
        Self {
            joystick,
            chassis,
            indicator,
            output,
            delay,
            config,
            controller: ControllerState::new(config.initial_sensitivity),
            rng: RngState::new(),
            button1: EdgeState::new(),
            button2: EdgeState::new(),
            dropped: 0,
        }
    }

    /// Run the control loop forever.
    pub async fn run(&mut self) -> ! {
        loop {
            let _ = self.tick().await;
        }
    }

    /// Run one iteration of the control loop.
    pub async fn tick(&mut self) -> Result<TickOutcome, EngineError> {
        let sample = match self.joystick.sample().await {
            Ok(sample) => sample,
            Err(e) => {
                warn!("joystick read failed: {:?}", e);
                self.send(&MouseReport::IDLE).await;
                return Err(EngineError::Input(e));
            }
        };

        let report = translate(
            sample,
            self.controller.sensitivity,
            self.controller.scroll_mode,
        );
        self.send(&report).await;
        self.delay.delay_us(self.config.tick_period_us).await;

        let buttons = self.joystick.raw_buttons().await?;
        self.click_on_release(buttons.button1, JoystickButton::Button1)
            .await;
        self.click_on_release(buttons.button2, JoystickButton::Button2)
            .await;

        let mask = self.chassis.read_mask();
        let action = on_chassis_buttons(mask, &mut self.controller, &mut self.rng);
        let mut prank = None;

        match action {
            Action::TriggerPrank => {
                info!("prank started");
                let summary = ReportSequencer::new(PRANK_SCRIPT)
                    .run(&mut self.output, &mut self.delay)
                    .await;
                self.dropped = self.dropped.saturating_add(summary.dropped as u32);
                info!("prank finished, {} reports sent", summary.sent);
                prank = Some(summary);
            }
            Action::SensitivityChanged => {
                debug!("sensitivity now {}", self.controller.sensitivity.get());
            }
            Action::ModeToggled => {
                let scroll = self.controller.scroll_mode;
                self.indicator
                    .write(if scroll { self.config.indicator_on } else { 0 });
                info!("scroll mode {}", scroll);
            }
            Action::None => {}
        }

        Ok(TickOutcome { action, prank })
    }

    /// Emit a click when `which` is released.
    async fn click_on_release(&mut self, level: bool, which: JoystickButton) {
        let state = match which {
            JoystickButton::Button1 => &mut self.button1,
            JoystickButton::Button2 => &mut self.button2,
        };
        let edge = detect(level, state);

        if let Some((press, release)) = translate_button_edge(edge, which) {
            self.send(&press).await;
            self.delay.delay_us(self.config.click_hold_us).await;
            self.send(&release).await;
        }
    }

    async fn send(&mut self, report: &MouseReport) {
        if let Err(e) = self.output.send(report).await {
            warn!("report dropped: {:?}", e);
            self.dropped = self.dropped.saturating_add(1);
        }
    }

    /// Current mode state.
    pub fn controller(&self) -> &ControllerState {
        &self.controller
    }

    /// Reports the transport refused since start-up.
    pub fn dropped_reports(&self) -> u32 {
        self.dropped
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Get a reference to the report sink.
    pub fn output(&self) -> &O {
        &self.output
    }

    /// Get a mutable reference to the report sink.
    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }

    pub fn indicator(&self) -> &L {
        &self.indicator
    }

    pub fn delay(&self) -> &D {
        &self.delay
    }
}
