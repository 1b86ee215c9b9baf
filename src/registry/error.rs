//! Common error types for store operations

/// A common error type for persistent store operations.
///
/// This enum defines a set of common errors that can occur when working with
/// a hierarchical store. It is designed to be simple and portable for
/// `no_std` environments.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    /// The requested path or item does not exist.
    NotFound,
    /// An error occurred during a read operation.
    ReadError,
    /// An error occurred during a write operation.
    WriteError,
    /// The backing store is not available.
    Unavailable,
}

#[cfg(feature = "defmt")]
impl defmt::Format for Error {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Error::NotFound => defmt::write!(f, "NotFound"),
            Error::ReadError => defmt::write!(f, "ReadError"),
            Error::WriteError => defmt::write!(f, "WriteError"),
            Error::Unavailable => defmt::write!(f, "Unavailable"),
        }
    }
}
