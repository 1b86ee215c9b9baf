//! Wired network adapter IP configuration.
//!
//! The terminal manages exactly one wired adapter, reachable through the
//! `NDS0:` device file. Three components cooperate:
//!
//! - [`AdapterLocator`] resolves and caches the adapter's name by querying
//!   the device file
//! - [`IpConfigStore`] reads and persists IP address, subnet mask and
//!   default gateway under the adapter's store path
//! - [`AdapterController`] signals the adapter to rebind so a changed
//!   configuration takes effect without a device restart
//!
//! [`NetAdapter`] owns all three plus the platform capabilities and is the
//! intended entry point: mutate with [`NetAdapter::set`], then make the
//! change effective with [`NetAdapter::apply`].
//!
//! # Failure contract
//!
//! `get` never surfaces an error: every failure collapses to the
//! caller-supplied fallback. `set` and `apply` report failure only as a
//! boolean. The `try_*` counterparts return the typed [`error::Error`] and
//! exist for diagnostics and tests; the boolean contract is the public one.
//!
//! # Threading
//!
//! Single foreground thread of use. The locator cache is plain owned state
//! with no locking; `&mut self` on every operation rules out shared
//! concurrent access at compile time.

#![deny(unsafe_code)]

use core::fmt::Write;

use heapless::{String, Vec};

use crate::device::{ControlChannel, DeviceControl};
use crate::registry::{Registry, VALUE_MAX};

pub mod error;


use self::error::Error;

/// Device file of the wired adapter, used both for name enumeration and for
/// rebind signaling.
pub const ADAPTER_DEVICE_FILE: &str = "NDS0:";

/// Control code instructing the NDIS layer to rebind an adapter.
///
/// Opaque protocol constant; must stay bit-exact for the device driver
/// contract.
pub const IOCTL_NDIS_REBIND_ADAPTER: u32 = 1_507_374;

/// Control code requesting the list of bound adapter names.
///
/// Opaque protocol constant; must stay bit-exact for the device driver
/// contract.
pub const IOCTL_NDIS_GET_ADAPTER_NAMES: u32 = 1_507_386;

/// Root segment of the device-communication subtree in the store.
pub const COMM_ROOT: &str = "Comm";

/// Fixed trailing segments of the adapter's TCP/IP store path.
pub const TCPIP_PARMS: &str = "Parms/TcpIp";

/// Store item holding the adapter's IP address.
pub const IP_ADDRESS_ITEM: &str = "IpAddress";

/// Store item holding the adapter's subnet mask.
pub const SUBNET_MASK_ITEM: &str = "Subnetmask";

/// Store item holding the adapter's default gateway.
///
/// The misspelling is historical and load-bearing: deployed terminals and
/// their drivers read this exact item name, so it must not be corrected.
pub const DEFAULT_GATEWAY_ITEM: &str = "DefaultGageway";

/// Fallback returned by `get` for address-valued keys when nothing is
/// resolvable.
pub const UNSPECIFIED_ADDR: &str = "0.0.0.0";

/// Maximum length of an adapter name.
pub const ADAPTER_NAME_MAX: usize = 64;

/// Maximum length of a computed store path.
pub const PATH_MAX: usize = 96;

/// Size of the output buffer handed to the adapter-names query.
const NAME_QUERY_LEN: usize = 255;

/// Worst case rebind payload: every name byte one UTF-16 unit, plus the
/// two-byte terminator.
const REBIND_PAYLOAD_MAX: usize = (ADAPTER_NAME_MAX + 1) * 2;

/// The three persisted configuration values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    /// The adapter's IP address.
    IpAddress,
    /// The adapter's subnet mask.
    SubnetMask,
    /// The adapter's default gateway.
    DefaultGateway,
}

impl ConfigKey {
    /// The fixed store item name this key maps to.
    pub fn item_name(self) -> &'static str {
        match self {
            ConfigKey::IpAddress => IP_ADDRESS_ITEM,
            ConfigKey::SubnetMask => SUBNET_MASK_ITEM,
            ConfigKey::DefaultGateway => DEFAULT_GATEWAY_ITEM,
        }
    }
}

/// Compute the store path for an adapter's TCP/IP settings.
///
/// ```
/// use libhht::netcfg::config_path;
///
/// assert_eq!(&config_path("NE2000")[..], "Comm/NE2000/Parms/TcpIp");
/// ```
pub fn config_path(adapter: &str) -> String<PATH_MAX> {
    let mut path = String::new();
    // PATH_MAX covers the longest possible adapter name.
    let _ = write!(path, "{}/{}/{}", COMM_ROOT, adapter, TCPIP_PARMS);
    path
}

/// Resolves and caches the name of the managed adapter.
///
/// The name is resolved at most once per process lifetime; a failed
/// resolution caches nothing, so a later call may retry.
#[derive(Debug, Default)]
pub struct AdapterLocator {
    cached: Option<String<ADAPTER_NAME_MAX>>,
}

impl AdapterLocator {
    /// Create a locator with an unresolved cache.
    pub fn new() -> Self {
        Self { cached: None }
    }

    /// The cached adapter name, if discovery has succeeded.
    pub fn name(&self) -> Option<&str> {
        self.cached.as_deref()
    }

    /// Resolve the adapter name, querying the device only on the first
    /// successful call.
    ///
    /// Returns `None` when the enumeration device cannot be opened or the
    /// query yields no usable name. Nothing is cached in that case.
    pub fn discover<D: DeviceControl>(&mut self, device: &mut D) -> Option<&str> {
        if self.cached.is_none() {
            match query_adapter_name(device) {
                Ok(name) => self.cached = Some(name),
                Err(_e) => {
                    #[cfg(feature = "defmt")]
                    defmt::warn!("adapter discovery failed: {}", _e);
                }
            }
        }
        self.cached.as_deref()
    }
}

/// One enumeration round trip: open, query, close.
fn query_adapter_name<D: DeviceControl>(
    device: &mut D,
) -> Result<String<ADAPTER_NAME_MAX>, Error> {
    let mut channel = device
        .open(ADAPTER_DEVICE_FILE)
        .map_err(|_| Error::DeviceUnavailable)?;

    let mut buf = [0u8; NAME_QUERY_LEN];
    let produced = channel
        .query(IOCTL_NDIS_GET_ADAPTER_NAMES, &mut buf)
        .map_err(|_| Error::AdapterUnresolved)?;
    let _ = channel.close();

    // The device returns NUL-separated names; the managed adapter is the
    // first one.
    let end = buf[..produced]
        .iter()
        .position(|&b| b == 0)
        .unwrap_or(produced);
    if end == 0 {
        return Err(Error::AdapterUnresolved);
    }
    let raw = core::str::from_utf8(&buf[..end]).map_err(|_| Error::AdapterUnresolved)?;

    let mut name = String::new();
    name.push_str(raw).map_err(|_| Error::AdapterUnresolved)?;
    Ok(name)
}

/// Reads and persists the adapter's TCP/IP settings.
///
/// Paths are keyed by the adapter name, so both operations resolve the
/// adapter through the shared [`AdapterLocator`] before touching the store.
pub struct IpConfigStore<R: Registry> {
    registry: R,
}

impl<R: Registry> IpConfigStore<R> {
    /// Wrap a backing store.
    pub fn new(registry: R) -> Self {
        Self { registry }
    }

    /// Typed read path. See [`IpConfigStore::get`] for the public contract.
    pub fn try_get<D: DeviceControl>(
        &mut self,
        device: &mut D,
        locator: &mut AdapterLocator,
        key: ConfigKey,
        out: &mut String<VALUE_MAX>,
    ) -> Result<(), Error> {
        let adapter = locator.discover(device).ok_or(Error::AdapterUnresolved)?;
        let path = config_path(adapter);
        self.registry
            .get_value(&path, key.item_name(), out)
            .map_err(|_| Error::PersistenceFailure)
    }

    /// Read a configuration value, falling back on any failure.
    ///
    /// The caller never observes an error: an unresolved adapter, an absent
    /// item and a store failure all collapse to `fallback`. `fallback` must
    /// fit in [`VALUE_MAX`].
    pub fn get<D: DeviceControl>(
        &mut self,
        device: &mut D,
        locator: &mut AdapterLocator,
        key: ConfigKey,
        fallback: &str,
    ) -> String<VALUE_MAX> {
        let mut value = String::new();
        match self.try_get(device, locator, key, &mut value) {
            Ok(()) => value,
            Err(_e) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("config read failed, using fallback: {}", _e);
                value.clear();
                let _ = value.push_str(fallback);
                value
            }
        }
    }

    /// Typed write path. See [`IpConfigStore::set`] for the public contract.
    ///
    /// An empty `value` is rejected before any device or store I/O.
    pub fn try_set<D: DeviceControl>(
        &mut self,
        device: &mut D,
        locator: &mut AdapterLocator,
        key: ConfigKey,
        value: &str,
    ) -> Result<(), Error> {
        if value.is_empty() {
            return Err(Error::InvalidArgument);
        }
        let adapter = locator.discover(device).ok_or(Error::AdapterUnresolved)?;
        let path = config_path(adapter);
        self.registry
            .set_value(&path, key.item_name(), value)
            .map_err(|_| Error::PersistenceFailure)
    }

    /// Persist a configuration value.
    ///
    /// Returns `false` for an empty value, an unresolved adapter or a store
    /// failure; `true` once the item is written. The change only takes
    /// effect after [`AdapterController::apply`].
    pub fn set<D: DeviceControl>(
        &mut self,
        device: &mut D,
        locator: &mut AdapterLocator,
        key: ConfigKey,
        value: &str,
    ) -> bool {
        match self.try_set(device, locator, key, value) {
            Ok(()) => true,
            Err(_e) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("config write failed: {}", _e);
                false
            }
        }
    }
}

/// Signals the adapter to reload its persisted configuration.
#[derive(Debug, Default)]
pub struct AdapterController;

impl AdapterController {
    /// Create a controller.
    pub fn new() -> Self {
        Self
    }

    /// Typed rebind path. See [`AdapterController::apply`] for the public
    /// contract.
    pub fn try_apply<D: DeviceControl>(
        &mut self,
        device: &mut D,
        locator: &mut AdapterLocator,
    ) -> Result<(), Error> {
        // The rebind device file is adapter-agnostic, so a failed discovery
        // still attempts the operation with an empty name and lets the
        // device call itself fail.
        let adapter = locator.discover(device).unwrap_or("");
        let payload = rebind_payload(adapter)?;

        let mut channel = device
            .open(ADAPTER_DEVICE_FILE)
            .map_err(|_| Error::DeviceUnavailable)?;
        channel
            .control(IOCTL_NDIS_REBIND_ADAPTER, &payload)
            .map_err(|_| Error::ApplyFailure)?;
        channel.close().map_err(|_| Error::ApplyFailure)?;
        Ok(())
    }

    /// Rebind the adapter so the persisted configuration takes effect.
    ///
    /// Returns `false` when the control device cannot be opened or the
    /// rebind call signals failure; no further device calls are made after
    /// a failed open.
    pub fn apply<D: DeviceControl>(
        &mut self,
        device: &mut D,
        locator: &mut AdapterLocator,
    ) -> bool {
        match self.try_apply(device, locator) {
            Ok(()) => true,
            Err(_e) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("adapter rebind failed: {}", _e);
                false
            }
        }
    }
}

/// Rebind request payload: the adapter name as UTF-16LE including its
/// two-byte terminator, the unit the driver sizes the buffer in.
fn rebind_payload(adapter: &str) -> Result<Vec<u8, REBIND_PAYLOAD_MAX>, Error> {
    let mut payload = Vec::new();
    for unit in adapter.encode_utf16() {
        payload
            .extend_from_slice(&unit.to_le_bytes())
            .map_err(|_| Error::InvalidArgument)?;
    }
    payload
        .extend_from_slice(&[0, 0])
        .map_err(|_| Error::InvalidArgument)?;
    Ok(payload)
}

/// The managed wired adapter.
///
/// Owns the platform capabilities and the single [`AdapterLocator`] whose
/// cached name [`IpConfigStore`] and [`AdapterController`] share. Intended
/// for a single foreground thread; nothing here is `Sync`-aware.
pub struct NetAdapter<D: DeviceControl, R: Registry> {
    device: D,
    locator: AdapterLocator,
    store: IpConfigStore<R>,
    controller: AdapterController,
}

impl<D: DeviceControl, R: Registry> NetAdapter<D, R> {
    /// Bind the platform's device capability and backing store.
    pub fn new(device: D, registry: R) -> Self {
        Self {
            device,
            locator: AdapterLocator::new(),
            store: IpConfigStore::new(registry),
            controller: AdapterController::new(),
        }
    }

    /// The locator state, for inspection.
    pub fn locator(&self) -> &AdapterLocator {
        &self.locator
    }

    /// Resolve the adapter name, querying the device at most once.
    pub fn discover(&mut self) -> Option<&str> {
        self.locator.discover(&mut self.device)
    }

    /// Read a configuration value, falling back on any failure.
    pub fn get(&mut self, key: ConfigKey, fallback: &str) -> String<VALUE_MAX> {
        self.store
            .get(&mut self.device, &mut self.locator, key, fallback)
    }

    /// Persist a configuration value. `false` on any failure.
    pub fn set(&mut self, key: ConfigKey, value: &str) -> bool {
        self.store
            .set(&mut self.device, &mut self.locator, key, value)
    }

    /// Rebind the adapter so persisted changes take effect. `false` on any
    /// failure.
    pub fn apply(&mut self) -> bool {
        self.controller.apply(&mut self.device, &mut self.locator)
    }

    /// Typed counterpart of [`NetAdapter::get`], for diagnostics and tests.
    pub fn try_get(&mut self, key: ConfigKey, out: &mut String<VALUE_MAX>) -> Result<(), Error> {
        self.store
            .try_get(&mut self.device, &mut self.locator, key, out)
    }

    /// Typed counterpart of [`NetAdapter::set`], for diagnostics and tests.
    pub fn try_set(&mut self, key: ConfigKey, value: &str) -> Result<(), Error> {
        self.store
            .try_set(&mut self.device, &mut self.locator, key, value)
    }

    /// Typed counterpart of [`NetAdapter::apply`], for diagnostics and tests.
    pub fn try_apply(&mut self) -> Result<(), Error> {
        self.controller
            .try_apply(&mut self.device, &mut self.locator)
    }
}
