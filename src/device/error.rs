//! Common error types for device channel operations

/// A common error type for device channel operations.
///
/// This enum defines a set of common errors that can occur when working with
/// device control channels. It is designed to be simple and portable for
/// `no_std` environments.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    /// The named device file could not be opened.
    Unavailable,
    /// A control request was rejected by the device.
    ControlFailed,
    /// A query request failed or produced no data.
    QueryFailed,
    /// The channel could not be released cleanly.
    CloseFailed,
}

#[cfg(feature = "defmt")]
impl defmt::Format for Error {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Error::Unavailable => defmt::write!(f, "Unavailable"),
            Error::ControlFailed => defmt::write!(f, "ControlFailed"),
            Error::QueryFailed => defmt::write!(f, "QueryFailed"),
            Error::CloseFailed => defmt::write!(f, "CloseFailed"),
        }
    }
}
