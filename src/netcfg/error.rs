//! Error types for adapter configuration operations

/// Internal error type for adapter configuration operations.
///
/// These never cross the boolean/fallback public contract of
/// [`NetAdapter`](super::NetAdapter); they exist so failure causes stay
/// distinguishable for diagnostics and tests.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    /// A device channel could not be opened.
    DeviceUnavailable,
    /// Adapter discovery has never succeeded.
    AdapterUnresolved,
    /// An empty value was passed to a write operation.
    InvalidArgument,
    /// The backing store failed to read or write an item.
    PersistenceFailure,
    /// The rebind control call signaled failure.
    ApplyFailure,
}

#[cfg(feature = "defmt")]
impl defmt::Format for Error {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Error::DeviceUnavailable => defmt::write!(f, "DeviceUnavailable"),
            Error::AdapterUnresolved => defmt::write!(f, "AdapterUnresolved"),
            Error::InvalidArgument => defmt::write!(f, "InvalidArgument"),
            Error::PersistenceFailure => defmt::write!(f, "PersistenceFailure"),
            Error::ApplyFailure => defmt::write!(f, "ApplyFailure"),
        }
    }
}
