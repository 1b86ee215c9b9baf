//! Hierarchical persistent store abstraction.
//!
//! Terminal configuration lives in a registry-style store: string values
//! named within hierarchical paths such as `Comm/NE2000/Parms/TcpIp`. The
//! backing technology is the platform's business (a real OS configuration
//! store, a file, an embedded database); the trait only requires path-scoped
//! string get/set where an absent item is distinguishable from an item that
//! holds an empty string.

#![allow(missing_docs)]
#![deny(unsafe_code)]

use heapless::String;

/// Common error types for store operations
pub mod error;

/// Maximum length of a stored string value.
pub const VALUE_MAX: usize = 128;

/// A path-scoped persistent string store.
pub trait Registry {
    /// Associated error type
    type Error: core::fmt::Debug;

    /// Read the item `name` under `path` into `out`.
    ///
    /// An absent path or item is an error; `Ok` with an empty `out` means the
    /// item exists and holds an empty string.
    fn get_value(
        &mut self,
        path: &str,
        name: &str,
        out: &mut String<VALUE_MAX>,
    ) -> Result<(), Self::Error>;

    /// Write the item `name` under `path`, creating path and item as needed.
    fn set_value(&mut self, path: &str, name: &str, value: &str) -> Result<(), Self::Error>;
}
