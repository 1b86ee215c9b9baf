//! Device control channel abstraction for handheld terminals.
//!
//! The terminal exposes its low-level peripherals as named device files
//! (for example the wired adapter's `NDS0:`). A caller opens a channel to a
//! device file, issues exactly one control or query request selected by an
//! opaque numeric control code, and releases the channel before returning.
//! Channels are never held across calls.
//!
//! Both traits are deliberately small so the rest of the library can be
//! tested against a simulated channel without real hardware.

#![allow(missing_docs)]
#![deny(unsafe_code)]

/// Common error types for device channel operations
pub mod error;

/// Re-exports of common traits
pub mod prelude {
    pub use super::{ControlChannel, DeviceControl};
}

/// A short-lived handle to a named device's control interface.
///
/// One channel performs one operation. `close` consumes the handle, so a
/// channel cannot outlive the call that opened it without the compiler
/// noticing.
pub trait ControlChannel {
    /// Associated error type
    type Error: core::fmt::Debug;

    /// Issue a control request carrying an input payload and no output.
    fn control(&mut self, code: u32, input: &[u8]) -> Result<(), Self::Error>;

    /// Issue a query request that fills `output`, returning the number of
    /// bytes the device produced.
    fn query(&mut self, code: u32, output: &mut [u8]) -> Result<usize, Self::Error>;

    /// Release the channel.
    fn close(self) -> Result<(), Self::Error>;
}

/// Capability to open control channels to named device files.
///
/// Implemented by the platform layer; on real hardware this wraps the native
/// open-by-name call, in tests it hands out simulated channels.
pub trait DeviceControl {
    /// Associated channel type
    type Channel: ControlChannel;
    /// Associated error type
    type Error: core::fmt::Debug;

    /// Open a channel to the device file `name`.
    fn open(&mut self, name: &str) -> Result<Self::Channel, Self::Error>;
}
