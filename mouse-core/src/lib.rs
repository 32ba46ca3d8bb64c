//! Platform-agnostic joystick-to-mouse translation engine.
//!
//! This crate turns raw joystick and push-button readings into relative
//! mouse reports without any platform-specific dependencies. It can be used
//! both in embedded `no_std` environments and on host for testing.
//!
//! # Overview
//!
//! - [`rng`]: xorshift mixer + 15-bit LCG used for the chassis dice roll
//! - [`edge`]: per-tick press/release detection ([`EdgeState`])
//! - [`translate`]: axis and button translation ([`translate()`], [`translate_button_edge`])
//! - [`mode`]: sensitivity and move/scroll state ([`on_chassis_buttons`])
//! - [`sequence`]: scripted report playback ([`ReportSequencer`], [`PRANK_SCRIPT`])
//! - [`input`] / [`output`]: collaborator traits for the peripherals
//! - [`engine`]: wires everything into one control-loop tick ([`MouseEngine`])
//!
//! # Example
//!
//! ```rust
//! use mouse_core::{translate, JoystickSample, Sensitivity};
//!
//! let report = translate(JoystickSample::new(255, 128), Sensitivity::DEFAULT, false);
//! assert_eq!(report.dx, 42);
//! assert_eq!(report.dy, 0);
//! ```
//!
//! # Features
//!
//! - **`std`**: Enable standard library support (for host testing)
//! - **`defmt`**: Enable defmt formatting and logging (for embedded targets)
//!
//! # No-std Support
//!
//! This crate is `#![no_std]` by default and uses no heap allocations.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;

// must come first so the logging macros are visible to the other modules
mod fmt;

pub mod config;
pub mod edge;
pub mod engine;
pub mod input;
pub mod mode;
pub mod output;
pub mod rng;
pub mod sequence;
pub mod translate;
pub mod types;

#[cfg(test)]
mod test_util;

// Re-export main types at crate root
pub use config::EngineConfig;
pub use edge::{detect, Edge, EdgeState};
pub use engine::{EngineError, MouseEngine, TickOutcome};
pub use input::{ChassisButtonSource, InputError, JoystickSource};
pub use mode::{on_chassis_buttons, Action, ConfigError, ControllerState, Sensitivity};
pub use output::{IndicatorSink, ReportSink, TransportError};
pub use rng::RngState;
pub use sequence::{
    ReportSequencer, ScriptStep, SequenceSummary, SequencerScript, PRANK_SCRIPT, PRANK_STEPS,
};
pub use translate::{translate, translate_button_edge, JoystickButton};
pub use types::{ChassisButtons, JoystickButtons, JoystickSample, AXIS_CENTER};

pub use mouse_proto::{MouseButtons, MouseReport};
