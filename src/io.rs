//! Text sink abstraction for status reporting.
//!
//! The `StatusSink` trait is the output half of a serial console: the engine
//! hands it fully formatted lines and does not care about the transport
//! (UART, RTT, USB CDC, an in-memory buffer in tests).

/// Platform-agnostic status line sink.
///
/// The engine performs one `write_str` per status line. Implementations may
/// block on the transport or buffer internally; no acknowledgment is
/// expected beyond the returned result.
pub trait StatusSink {
    /// Platform-specific error type
    type Error;

    /// Deliver one chunk of already formatted text.
    fn write_str(&mut self, s: &str) -> Result<(), Self::Error>;
}

/// In-memory sink, mainly for host-side tests and log buffers.
impl<const N: usize> StatusSink for heapless::String<N> {
    type Error = ();

    fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
        self.push_str(s).map_err(|_| ())
    }
}
