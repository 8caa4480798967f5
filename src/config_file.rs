//! Configuration file handling.
//!
//! A JSON file supplies defaults that command-line flags override:
//!
//! ```json
//! {
//!   "ssids": ["HomeNet", "OldOffice"],
//!   "power_cycle_delay_secs": 3,
//!   "networksetup": "/usr/sbin/networksetup"
//! }
//! ```

use crate::editor::SsidList;
use crate::error::{PrefNetError, Result};
use crate::netcmd::DEFAULT_NETWORKSETUP;
use crate::pause::DEFAULT_POWER_CYCLE_DELAY;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Longest accepted power-cycle delay. Anything longer is almost certainly a typo.
pub const MAX_POWER_CYCLE_DELAY_SECS: u64 = 120;

/// Settings that can be saved/loaded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PrefNetConfig {
    /// SSIDs to remove, in order
    pub ssids: Vec<String>,
    /// Wait between power off and power on
    pub power_cycle_delay_secs: u64,
    /// Path to the networksetup binary
    pub networksetup: PathBuf,
}

impl Default for PrefNetConfig {
    fn default() -> Self {
        Self {
            ssids: Vec::new(),
            power_cycle_delay_secs: DEFAULT_POWER_CYCLE_DELAY.as_secs(),
            networksetup: PathBuf::from(DEFAULT_NETWORKSETUP),
        }
    }
}

impl PrefNetConfig {
    /// Load configuration from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).map_err(|e| {
            PrefNetError::config(format!(
                "Failed to read configuration from {:?}: {}",
                path.as_ref(),
                e
            ))
        })?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(&path, json)?;
        Ok(())
    }

    /// Apply command-line overrides. Non-empty `ssids` replace the file's list.
    pub fn merge_cli(
        mut self,
        ssids: &[String],
        delay_secs: Option<u64>,
        networksetup: Option<&Path>,
    ) -> Self {
        if !ssids.is_empty() {
            self.ssids = ssids.to_vec();
        }
        if let Some(delay) = delay_secs {
            self.power_cycle_delay_secs = delay;
        }
        if let Some(path) = networksetup {
            self.networksetup = path.to_path_buf();
        }
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        SsidList::new(self.ssids.clone())?;

        if self.power_cycle_delay_secs > MAX_POWER_CYCLE_DELAY_SECS {
            return Err(PrefNetError::config(format!(
                "power_cycle_delay_secs must be at most {}",
                MAX_POWER_CYCLE_DELAY_SECS
            )));
        }

        if self.networksetup.as_os_str().is_empty() {
            return Err(PrefNetError::config("networksetup path cannot be empty"));
        }

        Ok(())
    }

    /// Validated SSID list.
    pub fn ssid_list(&self) -> Result<SsidList> {
        SsidList::new(self.ssids.clone())
    }

    pub fn power_cycle_delay(&self) -> Duration {
        Duration::from_secs(self.power_cycle_delay_secs)
    }
}
