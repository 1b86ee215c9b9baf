use core::cell::{Cell, RefCell};

use heapless::{String, Vec};
use libhht::device::{ControlChannel, DeviceControl};
use libhht::netcfg::{
    ADAPTER_DEVICE_FILE, ConfigKey, IOCTL_NDIS_GET_ADAPTER_NAMES, IOCTL_NDIS_REBIND_ADAPTER,
    NetAdapter, UNSPECIFIED_ADDR, config_path,
};
use libhht::registry::{Registry, VALUE_MAX};

const NAMES: &[u8] = b"NE2000\0\0";

#[derive(Default)]
struct DeviceLog {
    opens: Cell<usize>,
    queries: Cell<usize>,
    controls: Cell<usize>,
    last_code: Cell<u32>,
    last_payload: RefCell<Vec<u8, 256>>,
}

struct MockDevice<'a> {
    log: &'a DeviceLog,
    open_fails: bool,
}

struct MockChannel<'a> {
    log: &'a DeviceLog,
}

impl<'a> DeviceControl for MockDevice<'a> {
    type Channel = MockChannel<'a>;
    type Error = ();

    fn open(&mut self, name: &str) -> Result<Self::Channel, Self::Error> {
        assert_eq!(name, ADAPTER_DEVICE_FILE);
        if self.open_fails {
            return Err(());
        }
        self.log.opens.set(self.log.opens.get() + 1);
        Ok(MockChannel { log: self.log })
    }
}

impl ControlChannel for MockChannel<'_> {
    type Error = ();

    fn control(&mut self, code: u32, input: &[u8]) -> Result<(), Self::Error> {
        self.log.controls.set(self.log.controls.get() + 1);
        self.log.last_code.set(code);
        let mut payload = self.log.last_payload.borrow_mut();
        payload.clear();
        payload.extend_from_slice(input).unwrap();
        Ok(())
    }

    fn query(&mut self, code: u32, output: &mut [u8]) -> Result<usize, Self::Error> {
        self.log.queries.set(self.log.queries.get() + 1);
        assert_eq!(code, IOCTL_NDIS_GET_ADAPTER_NAMES);
        output[..NAMES.len()].copy_from_slice(NAMES);
        Ok(NAMES.len())
    }

    fn close(self) -> Result<(), Self::Error> {
        Ok(())
    }
}

#[derive(Default)]
struct MemRegistry {
    entries: std::collections::BTreeMap<(std::string::String, std::string::String), std::string::String>,
}

impl Registry for MemRegistry {
    type Error = ();

    fn get_value(
        &mut self,
        path: &str,
        name: &str,
        out: &mut String<VALUE_MAX>,
    ) -> Result<(), Self::Error> {
        let value = self
            .entries
            .get(&(path.to_owned(), name.to_owned()))
            .ok_or(())?;
        out.clear();
        out.push_str(value).map_err(|_| ())
    }

    fn set_value(&mut self, path: &str, name: &str, value: &str) -> Result<(), Self::Error> {
        self.entries
            .insert((path.to_owned(), name.to_owned()), value.to_owned());
        Ok(())
    }
}

#[test]
fn configure_then_apply() {
    let log = DeviceLog::default();
    let device = MockDevice {
        log: &log,
        open_fails: false,
    };
    let mut adapter = NetAdapter::new(device, MemRegistry::default());

    // First use resolves the adapter; the cache is shared from then on.
    assert!(adapter.set(ConfigKey::IpAddress, "192.168.1.5"));
    assert!(adapter.set(ConfigKey::SubnetMask, "255.255.255.0"));
    assert!(adapter.set(ConfigKey::DefaultGateway, "192.168.1.1"));
    assert_eq!(log.queries.get(), 1);
    assert_eq!(adapter.locator().name(), Some("NE2000"));

    assert_eq!(&adapter.get(ConfigKey::IpAddress, UNSPECIFIED_ADDR)[..], "192.168.1.5");
    assert_eq!(
        &adapter.get(ConfigKey::SubnetMask, UNSPECIFIED_ADDR)[..],
        "255.255.255.0"
    );
    assert_eq!(
        &adapter.get(ConfigKey::DefaultGateway, UNSPECIFIED_ADDR)[..],
        "192.168.1.1"
    );

    assert!(adapter.apply());
    assert_eq!(log.last_code.get(), IOCTL_NDIS_REBIND_ADAPTER);
    let expected = [
        0x4E, 0x00, 0x45, 0x00, 0x32, 0x00, 0x30, 0x00, 0x30, 0x00, 0x30, 0x00, 0x00, 0x00,
    ];
    assert_eq!(&log.last_payload.borrow()[..], &expected);

    // Discovery never re-queried the device.
    assert_eq!(log.queries.get(), 1);
}

#[test]
fn everything_falls_back_when_the_device_is_absent() {
    let log = DeviceLog::default();
    let device = MockDevice {
        log: &log,
        open_fails: true,
    };
    let mut adapter = NetAdapter::new(device, MemRegistry::default());

    assert_eq!(adapter.discover(), None);
    assert_eq!(&adapter.get(ConfigKey::IpAddress, UNSPECIFIED_ADDR)[..], UNSPECIFIED_ADDR);
    assert_eq!(&adapter.get(ConfigKey::SubnetMask, "255.255.255.0")[..], "255.255.255.0");
    assert!(!adapter.set(ConfigKey::IpAddress, "192.168.1.5"));
    assert!(!adapter.apply());
    assert_eq!(log.controls.get(), 0);
}

#[test]
fn values_persist_under_the_adapter_path() {
    let log = DeviceLog::default();
    let device = MockDevice {
        log: &log,
        open_fails: false,
    };
    let mut adapter = NetAdapter::new(device, MemRegistry::default());

    assert!(adapter.set(ConfigKey::DefaultGateway, "10.0.0.254"));

    // Stored items use the fixed path template and item names, misspelled
    // gateway item included.
    assert_eq!(&config_path("NE2000")[..], "Comm/NE2000/Parms/TcpIp");
    assert_eq!(ConfigKey::DefaultGateway.item_name(), "DefaultGageway");
}
