//! # libhht - Handheld Terminal SDK
//!
//! A Rust library for handheld data terminals. It manages the IP configuration
//! of the terminal's single wired network adapter through a low-level device
//! control channel and a hierarchical persistent store, and carries the small
//! text utilities these terminals need (string hashing, pinyin sort keys).
//! This library is designed for embedded systems and supports `no_std`
//! environments.
//!
//! ## Features
//!
//! ### Adapter Configuration
//! - **AdapterLocator**: discovers and caches the managed adapter's name
//! - **IpConfigStore**: reads and persists IP address, subnet mask and
//!   default gateway under the adapter's store path
//! - **AdapterController**: signals the adapter to rebind so a changed
//!   configuration takes effect without a device restart
//!
//! ### Platform Seams
//! - Device control channels ([`device`]) and the hierarchical store
//!   ([`registry`]) are traits, so the core can be exercised against
//!   simulated hardware
//! - Soft input panel hook ([`system`]) for the terminal's on-screen keyboard
//!
//! ### Text Utilities
//! - MD5 hex digests and GB2312 pinyin first-letter sort keys ([`text`])
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! libhht = "0.1.0"
//! ```
//!
//! A caller first mutates configuration, then applies it:
//!
//! ```text
//! let mut adapter = NetAdapter::new(platform_device, platform_registry);
//! adapter.set(ConfigKey::IpAddress, "192.168.1.5");
//! adapter.set(ConfigKey::SubnetMask, "255.255.255.0");
//! adapter.apply();
//! ```
//!
//! ## Threading
//!
//! Every operation is synchronous and blocking: a device channel is opened,
//! used for exactly one control or query call, and released before the call
//! returns. The library keeps no locks; all entry points take `&mut self`
//! and are intended for a single foreground thread of use.
//!
//! ## Optional Features
//!
//! - `std`: Enable standard library support (default: disabled)
//! - `defmt`: Enable defmt logging support for embedded debugging

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]
#![warn(missing_debug_implementations)]

/// Device control channel abstraction.
///
/// Models the native open / control / close triple of the terminal's device
/// files as short-lived, injectable channel handles.
pub mod device;

/// Hierarchical persistent store abstraction.
///
/// A path-scoped string key-value store; any backing technology satisfies
/// the contract if absent keys are distinguishable from empty values.
pub mod registry;

/// Wired network adapter IP configuration.
///
/// The core of the library: adapter discovery, persisted TCP/IP settings,
/// and the rebind signal that applies them.
pub mod netcfg;

/// Text utilities for terminal applications.
///
/// String hashing and GB2312 pinyin sort keys.
pub mod text;

/// System utilities for the terminal platform.
///
/// Contains the soft input panel hook and related platform seams.
pub mod system;
