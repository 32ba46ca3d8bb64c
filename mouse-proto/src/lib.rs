//! Report types and wire codec for the joystick mouse.
//!
//! - **Types**: [`MouseButtons`] and [`MouseReport`]
//! - **Framing**: [`Serialize`] and [`parse_frame()`] for the seven byte
//!   raw HID frame understood by RN-42 class Bluetooth modules
//!
//! # Frame Format
//!
//! ```text
//! 0xFD 0x05 0x02 <buttons> <dx> <dy> <wheel>
//! ```
//!
//! Deltas are sent as two's-complement bytes.
//!
//! # Features
//!
//! - **`std`**: Enable standard library support (for host testing)
//! - **`defmt`**: Enable defmt formatting (for embedded logging)
//! - **`heapless`**: Enable `serialize_to_vec()`
//!
//! # No-std Support
//!
//! This crate is `#![no_std]` by default and uses no heap allocations.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;

pub mod frame;
pub mod types;

pub use frame::{
    parse_frame, ParseError, Serialize, SerializeError, FRAME_SIZE, FRAME_START, MOUSE_DESCRIPTOR,
    MOUSE_PAYLOAD_LEN,
};
pub use types::{MouseButtons, MouseReport};
