//! Typed vocabulary shared by the editor and its collaborators.

use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{Display, EnumIter, EnumString};

/// Adapter power state as understood by `networksetup -setairportpower`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum PowerState {
    #[strum(serialize = "on")]
    On,
    #[strum(serialize = "off")]
    Off,
}

/// A Wi-Fi device identifier such as `en0`.
///
/// Can only be built from a non-empty string, so holding one means the
/// hardware-port lookup actually succeeded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct WifiDevice(String);

impl WifiDevice {
    /// Trim and wrap a device name, rejecting empty input.
    pub fn new(name: impl AsRef<str>) -> Option<Self> {
        let trimmed = name.as_ref().trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WifiDevice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What happened when one SSID removal was attempted.
///
/// Only kept for diagnostics; a failed removal never fails the run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RemovalOutcome {
    pub ssid: String,
    /// Exit code (None if the command never ran or was killed by a signal)
    pub exit_code: Option<i32>,
    pub success: bool,
    /// Trimmed stderr, or the spawn error
    pub detail: String,
}

/// Summary of a full forget-and-reconnect run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub device: WifiDevice,
    /// Preferred list text before removals
    pub before: String,
    /// Preferred list text after removals
    pub after: String,
    pub removals: Vec<RemovalOutcome>,
    pub power_off_ok: bool,
    pub power_on_ok: bool,
    pub dry_run: bool,
}

impl RunReport {
    /// Number of removal commands that exited non-zero or failed to spawn.
    pub fn failed_removals(&self) -> usize {
        self.removals.iter().filter(|r| !r.success).count()
    }

    /// Whether both power commands reported success.
    pub fn power_cycled(&self) -> bool {
        self.power_off_ok && self.power_on_ok
    }
}
