//! Joystick to Bluetooth mouse firmware for RP2040.
//!
//! Board support for the engine in `mouse-core`: a PmodJSTK2 joystick on
//! SPI, four chassis push buttons and an LED on GPIO, and a PmodBT2
//! (RN-42) module on UART that carries the reports to the host.

#![no_std]

// Re-export core types for convenience
pub use mouse_core::{
    Action, ChassisButtonSource, ChassisButtons, EngineConfig, EngineError, IndicatorSink,
    InputError, JoystickSource, MouseEngine, MouseReport, ReportSink, TickOutcome, TransportError,
};

pub mod bt2_output;
pub mod chassis;
pub mod jstk2;

pub use bt2_output::{Bt2Output, BT2_BAUDRATE};
pub use chassis::{ChassisButtonsGpio, LedIndicator};
pub use jstk2::Jstk2;
