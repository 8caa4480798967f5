//! Typed `networksetup` invocations.
//!
//! Each variant maps to exactly one `networksetup` sub-operation. The argv is
//! produced here and nowhere else, so flag spelling lives in one place.
//!
//! | Variant                    | argv                                                   |
//! |----------------------------|--------------------------------------------------------|
//! | `ListHardwarePorts`        | `-listallhardwareports`                                |
//! | `ListPreferred(dev)`       | `-listpreferredwirelessnetworks <dev>`                 |
//! | `RemovePreferred(dev, s)`  | `-removepreferredwirelessnetwork <dev> <s>`            |
//! | `SetPower(dev, state)`     | `-setairportpower <dev> <on/off>`                      |

use crate::types::{PowerState, WifiDevice};
use std::fmt;

/// Default location of the macOS network configuration utility.
pub const DEFAULT_NETWORKSETUP: &str = "/usr/sbin/networksetup";

/// A single request to the network configuration utility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkCommand {
    /// Enumerate hardware ports and their device identifiers
    ListHardwarePorts,
    /// Print the preferred wireless networks for a device
    ListPreferred(WifiDevice),
    /// Remove one SSID from a device's preferred list
    RemovePreferred(WifiDevice, String),
    /// Turn the adapter on or off
    SetPower(WifiDevice, PowerState),
}

impl NetworkCommand {
    /// Arguments exactly as `networksetup` expects them.
    pub fn to_cli_args(&self) -> Vec<String> {
        match self {
            Self::ListHardwarePorts => vec!["-listallhardwareports".to_string()],
            Self::ListPreferred(dev) => vec![
                "-listpreferredwirelessnetworks".to_string(),
                dev.to_string(),
            ],
            Self::RemovePreferred(dev, ssid) => vec![
                "-removepreferredwirelessnetwork".to_string(),
                dev.to_string(),
                ssid.clone(),
            ],
            Self::SetPower(dev, state) => vec![
                "-setairportpower".to_string(),
                dev.to_string(),
                state.to_string(),
            ],
        }
    }

    /// Whether this command changes OS network state.
    ///
    /// Dry-run mode skips destructive commands and still executes the
    /// read-only ones so the preview shows real data.
    pub fn is_destructive(&self) -> bool {
        matches!(self, Self::RemovePreferred(..) | Self::SetPower(..))
    }
}

impl fmt::Display for NetworkCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "networksetup {}", self.to_cli_args().join(" "))
    }
}
