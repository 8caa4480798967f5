//! Wi-Fi device detection from `networksetup -listallhardwareports`.
//!
//! The listing is a series of blank-line separated blocks:
//!
//! ```text
//! Hardware Port: Wi-Fi
//! Device: en0
//! Ethernet Address: a4:83:e7:00:00:00
//! ```
//!
//! Older macOS releases label the radio `AirPort` instead of `Wi-Fi`.
//! This is the only place where command output is parsed; everything else
//! is printed verbatim.

use crate::command_runner::CommandRunner;
use crate::error::{PrefNetError, Result};
use crate::netcmd::NetworkCommand;
use crate::types::WifiDevice;
use tracing::{debug, info};

/// Hardware port labels that identify the wireless radio.
const WIFI_PORT_LABELS: &[&str] = &["Wi-Fi", "AirPort"];

/// Extract the device identifier of the first Wi-Fi hardware port.
///
/// Returns `None` if there is no Wi-Fi port, or if its `Device:` line is
/// missing or empty.
pub fn parse_wifi_device(listing: &str) -> Option<WifiDevice> {
    let mut in_wifi_port = false;

    for line in listing.lines() {
        let line = line.trim();
        if let Some(port) = line.strip_prefix("Hardware Port:") {
            in_wifi_port = WIFI_PORT_LABELS.contains(&port.trim());
        } else if line.is_empty() {
            in_wifi_port = false;
        } else if in_wifi_port {
            if let Some(device) = line.strip_prefix("Device:") {
                return WifiDevice::new(device);
            }
        }
    }

    None
}

/// Run the hardware-port listing and locate the Wi-Fi device.
///
/// Any failure here, including the listing command itself failing, is
/// reported as [`PrefNetError::DeviceNotFound`] so the caller halts before
/// touching the preferred list.
pub fn locate_wifi_device<R: CommandRunner + ?Sized>(runner: &R) -> Result<WifiDevice> {
    let output = runner
        .run(&NetworkCommand::ListHardwarePorts)
        .map_err(|e| PrefNetError::device_not_found(format!("hardware port listing failed: {}", e)))?;

    if !output.success {
        return Err(PrefNetError::device_not_found(format!(
            "hardware port listing exited with {:?}: {}",
            output.exit_code,
            output.detail()
        )));
    }

    debug!(listing = %output.stdout, "hardware ports");

    match parse_wifi_device(&output.stdout) {
        Some(device) => {
            info!(%device, "found Wi-Fi device");
            Ok(device)
        }
        None => Err(PrefNetError::device_not_found(
            "no Wi-Fi hardware port in networksetup output",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command_runner::CommandOutput;

    const MACBOOK_LISTING: &str = "\
Hardware Port: Thunderbolt Bridge
Device: bridge0
Ethernet Address: N/A

Hardware Port: Wi-Fi
Device: en0
Ethernet Address: a4:83:e7:12:34:56

Hardware Port: Thunderbolt 1
Device: en1
Ethernet Address: 82:0e:ad:00:00:01

VLAN Configurations
===================
";

    #[test]
    fn test_finds_wifi_among_ports() {
        let device = parse_wifi_device(MACBOOK_LISTING).unwrap();
        assert_eq!(device.as_str(), "en0");
    }

    #[test]
    fn test_wifi_not_first_port() {
        let listing = "\
Hardware Port: Ethernet
Device: en0
Ethernet Address: 00:00:00:00:00:01

Hardware Port: Wi-Fi
Device: en1
Ethernet Address: 00:00:00:00:00:02
";
        assert_eq!(parse_wifi_device(listing).unwrap().as_str(), "en1");
    }

    #[test]
    fn test_legacy_airport_label() {
        let listing = "Hardware Port: AirPort\nDevice: en1\nEthernet Address: x\n";
        assert_eq!(parse_wifi_device(listing).unwrap().as_str(), "en1");
    }

    #[test]
    fn test_no_wifi_port() {
        let listing = "Hardware Port: Ethernet\nDevice: en0\nEthernet Address: x\n";
        assert!(parse_wifi_device(listing).is_none());
        assert!(parse_wifi_device("").is_none());
    }

    #[test]
    fn test_empty_device_value() {
        let listing = "Hardware Port: Wi-Fi\nDevice: \nEthernet Address: x\n";
        assert!(parse_wifi_device(listing).is_none());
    }

    #[test]
    fn test_device_line_does_not_leak_across_blocks() {
        // Wi-Fi block has no Device line; the next block's device must not be taken
        let listing = "Hardware Port: Wi-Fi\nEthernet Address: x\n\nDevice: en7\n";
        assert!(parse_wifi_device(listing).is_none());
    }

    #[test]
    fn test_similar_label_is_not_wifi() {
        let listing = "Hardware Port: Wi-Fi Bridge\nDevice: en3\n";
        assert!(parse_wifi_device(listing).is_none());
    }

    struct Fixed(CommandOutput);

    impl CommandRunner for Fixed {
        fn run(&self, _: &NetworkCommand) -> Result<CommandOutput> {
            Ok(self.0.clone())
        }
    }

    struct Broken;

    impl CommandRunner for Broken {
        fn run(&self, _: &NetworkCommand) -> Result<CommandOutput> {
            Err(PrefNetError::command("failed to spawn"))
        }
    }

    #[test]
    fn test_locate_ok() {
        let runner = Fixed(CommandOutput::ok(MACBOOK_LISTING));
        assert_eq!(locate_wifi_device(&runner).unwrap().as_str(), "en0");
    }

    #[test]
    fn test_locate_maps_failures_to_device_not_found() {
        let runner = Fixed(CommandOutput::failed(1, "boom"));
        assert!(matches!(
            locate_wifi_device(&runner),
            Err(PrefNetError::DeviceNotFound(_))
        ));

        assert!(matches!(
            locate_wifi_device(&Broken),
            Err(PrefNetError::DeviceNotFound(_))
        ));

        let runner = Fixed(CommandOutput::ok("Hardware Port: Ethernet\nDevice: en0\n"));
        assert!(matches!(
            locate_wifi_device(&runner),
            Err(PrefNetError::DeviceNotFound(_))
        ));
    }
}
