//! PmodBT2 (RN-42) output over UART.
//!
//! In HID raw mode the module forwards each 7-byte frame to the host as a
//! mouse report, so the sink only serializes and writes.

use embassy_rp::uart::{Async, Error as UartError, UartTx};
use mouse_core::{MouseReport, ReportSink, TransportError};
use mouse_proto::{Serialize, FRAME_SIZE};

/// UART baud rate the RN-42 ships with.
pub const BT2_BAUDRATE: u32 = 115_200;

/// Map UART errors to transport errors.
fn uart_error_to_transport_error(e: UartError) -> TransportError {
    match e {
        UartError::Overrun => TransportError::Busy,
        _ => TransportError::Io,
    }
}

/// Report sink writing raw HID frames to the RN-42.
pub struct Bt2Output<'d> {
    tx: UartTx<'d, Async>,
}

impl<'d> Bt2Output<'d> {
    /// Create a sink on a UART transmitter configured for [`BT2_BAUDRATE`].
    #[must_use]
    pub fn new(tx: UartTx<'d, Async>) -> Self {
        Self { tx }
    }
}

impl ReportSink for Bt2Output<'_> {
    async fn send(&mut self, report: &MouseReport) -> Result<(), TransportError> {
        let mut frame = [0u8; FRAME_SIZE];
        let len = report
            .serialize(&mut frame)
            .map_err(|_| TransportError::Io)?;

        self.tx
            .write(&frame[..len])
            .await
            .map_err(uart_error_to_transport_error)
    }
}
