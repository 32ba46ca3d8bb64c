//! Output collaborator traits and error types.

use core::future::Future;
use mouse_proto::MouseReport;

/// Error type for report transport.
///
/// Never fatal: the engine drops the report and carries on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransportError {
    /// UART/radio I/O error.
    Io,
    /// Link not up (e.g., host not paired).
    NotReady,
    /// Transmit queue full.
    Busy,
}

/// Async trait for report transports.
///
/// This trait abstracts where finished reports go (Bluetooth module, USB,
/// a capture buffer in tests).
pub trait ReportSink {
    /// Transmit one report.
    fn send(&mut self, report: &MouseReport) -> impl Future<Output = Result<(), TransportError>>;
}

/// Mode indicator output (LEDs on the chassis).
pub trait IndicatorSink {
    /// Drive the indicator with `mask`; zero means off.
    fn write(&mut self, mask: u32);
}
