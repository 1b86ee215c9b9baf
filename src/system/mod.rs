//! System utilities for the terminal platform.
//!
//! Platform seams that don't belong to networking or storage. Currently this
//! is the soft input panel hook used by form screens to summon and dismiss
//! the on-screen keyboard.

/// Soft input panel control.
///
/// The trait the platform layer implements to show and hide the terminal's
/// on-screen keyboard.
pub mod input;
