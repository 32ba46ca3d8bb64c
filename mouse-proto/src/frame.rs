//! Raw HID frame codec for RN-42 class Bluetooth modules.
//!
//! In HID raw-report mode the module forwards any frame of the form
//!
//! ```text
//! 0xFD <len> <descriptor> <payload...>
//! ```
//!
//! to the paired host. A mouse report uses descriptor `0x02` and a
//! four byte payload, giving a fixed seven byte frame:
//!
//! ```text
//! 0xFD 0x05 0x02 <buttons> <dx> <dy> <wheel>
//! ```
//!
//! # Example
//!
//! ```
//! use mouse_proto::{parse_frame, MouseButtons, MouseReport, Serialize};
//!
//! let report = MouseReport::new(MouseButtons::LEFT, 4, -4, 0);
//! let mut buf = [0u8; 16];
//! let len = report.serialize(&mut buf).unwrap();
//! assert_eq!(&buf[..len], &[0xFD, 0x05, 0x02, 0x01, 0x04, 0xFC, 0x00]);
//! assert_eq!(parse_frame(&buf[..len]), Ok(report));
//! ```

use crate::types::{MouseButtons, MouseReport};

/// Raw report start byte.
pub const FRAME_START: u8 = 0xFD;

/// Descriptor id of the mouse report.
pub const MOUSE_DESCRIPTOR: u8 = 0x02;

/// Bytes following the length byte: descriptor + buttons + x + y + wheel.
pub const MOUSE_PAYLOAD_LEN: u8 = 5;

/// Total size of a serialized mouse frame.
pub const FRAME_SIZE: usize = 2 + MOUSE_PAYLOAD_LEN as usize;

/// Error type for serialization operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SerializeError {
    /// The output buffer is too small to hold the frame.
    BufferTooSmall,
}

impl core::fmt::Display for SerializeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::BufferTooSmall => write!(f, "buffer too small"),
        }
    }
}

/// Error type for frame parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Input is not exactly [`FRAME_SIZE`] bytes.
    Length,
    /// First byte is not [`FRAME_START`].
    StartByte,
    /// Length byte is not [`MOUSE_PAYLOAD_LEN`].
    PayloadLength,
    /// Descriptor is not [`MOUSE_DESCRIPTOR`].
    ReportId,
    /// Buttons byte carries bits other than left/right.
    Buttons,
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Length => write!(f, "wrong frame length"),
            Self::StartByte => write!(f, "missing start byte"),
            Self::PayloadLength => write!(f, "unexpected payload length"),
            Self::ReportId => write!(f, "not a mouse report"),
            Self::Buttons => write!(f, "unknown button bits"),
        }
    }
}

/// Extension trait for serializing reports to the wire.
pub trait Serialize {
    /// Serialize to the provided buffer.
    ///
    /// Returns the number of bytes written on success.
    ///
    /// # Errors
    ///
    /// Returns [`SerializeError::BufferTooSmall`] if the buffer is not large enough.
    fn serialize(&self, buf: &mut [u8]) -> Result<usize, SerializeError>;

    /// Serialize to a `heapless::Vec`.
    ///
    /// # Errors
    ///
    /// Returns [`SerializeError::BufferTooSmall`] if `N` is not large enough.
    #[cfg(feature = "heapless")]
    fn serialize_to_vec<const N: usize>(&self) -> Result<heapless::Vec<u8, N>, SerializeError> {
        let mut vec = heapless::Vec::new();
        vec.resize(N, 0)
            .map_err(|_| SerializeError::BufferTooSmall)?;
        let len = self.serialize(&mut vec)?;
        vec.truncate(len);
        Ok(vec)
    }
}

impl Serialize for MouseReport {
    fn serialize(&self, buf: &mut [u8]) -> Result<usize, SerializeError> {
        let frame = buf
            .get_mut(..FRAME_SIZE)
            .ok_or(SerializeError::BufferTooSmall)?;
        frame.copy_from_slice(&self.to_frame());
        Ok(FRAME_SIZE)
    }
}

impl MouseReport {
    /// Encode into a fixed-size frame.
    #[must_use]
    pub const fn to_frame(&self) -> [u8; FRAME_SIZE] {
        [
            FRAME_START,
            MOUSE_PAYLOAD_LEN,
            MOUSE_DESCRIPTOR,
            self.buttons.raw(),
            self.dx as u8,
            self.dy as u8,
            self.wheel as u8,
        ]
    }
}

/// Decode a single mouse frame.
///
/// # Errors
///
/// See [`ParseError`] for the individual rejection reasons.
pub fn parse_frame(bytes: &[u8]) -> Result<MouseReport, ParseError> {
    let frame: &[u8; FRAME_SIZE] = bytes.try_into().map_err(|_| ParseError::Length)?;

    if frame[0] != FRAME_START {
        return Err(ParseError::StartByte);
    }
    if frame[1] != MOUSE_PAYLOAD_LEN {
        return Err(ParseError::PayloadLength);
    }
    if frame[2] != MOUSE_DESCRIPTOR {
        return Err(ParseError::ReportId);
    }
    let buttons = MouseButtons::from_bits(frame[3]).ok_or(ParseError::Buttons)?;

    Ok(MouseReport::new(
        buttons,
        frame[4] as i8,
        frame[5] as i8,
        frame[6] as i8,
    ))
}
