//! Preferred-network editor
//!
//! Runs the fixed forget-and-reconnect sequence:
//!
//! 1. privilege check
//! 2. locate the Wi-Fi device
//! 3. print the preferred list
//! 4. remove each configured SSID
//! 5. print the preferred list again
//! 6. power off, pause, power on
//!
//! # Failure Modes
//!
//! - Not privileged: `Err(InsufficientPrivilege)`, no command issued
//! - No Wi-Fi device: `Err(DeviceNotFound)`, only the hardware listing ran
//! - Anything after step 2 failing: logged at `warn`, recorded in the
//!   [`RunReport`], and the sequence continues

use crate::command_runner::CommandRunner;
use crate::error::{PrefNetError, Result};
use crate::hardware::locate_wifi_device;
use crate::netcmd::NetworkCommand;
use crate::pause::{DEFAULT_POWER_CYCLE_DELAY, Pause};
use crate::sanity::PrivilegeCheck;
use crate::types::{PowerState, RemovalOutcome, RunReport, WifiDevice};
use std::collections::HashSet;
use std::time::Duration;
use tracing::{info, warn};

/// Most SSIDs a single run will remove.
pub const MAX_SSIDS: usize = 2;

/// One or two distinct, non-blank SSIDs in removal order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SsidList(Vec<String>);

impl SsidList {
    /// Validate and wrap a list of SSIDs.
    ///
    /// SSIDs are kept verbatim (no trimming); networks with leading or
    /// trailing spaces exist and must be matched exactly.
    pub fn new(ssids: Vec<String>) -> Result<Self> {
        if ssids.is_empty() {
            return Err(PrefNetError::config("at least one SSID must be specified"));
        }
        if ssids.len() > MAX_SSIDS {
            return Err(PrefNetError::config(format!(
                "at most {} SSIDs can be removed per run, got {}",
                MAX_SSIDS,
                ssids.len()
            )));
        }

        let mut seen = HashSet::new();
        for ssid in &ssids {
            if ssid.trim().is_empty() {
                return Err(PrefNetError::config("SSID cannot be blank"));
            }
            if !seen.insert(ssid.as_str()) {
                return Err(PrefNetError::config(format!("duplicate SSID: {}", ssid)));
            }
        }

        Ok(Self(ssids))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Tunables for a run.
#[derive(Debug, Clone)]
pub struct EditorOptions {
    pub ssids: SsidList,
    /// Wait between power off and power on
    pub power_cycle_delay: Duration,
    /// Only affects reporting; the runner decides what is skipped
    pub dry_run: bool,
}

impl EditorOptions {
    pub fn new(ssids: SsidList) -> Self {
        Self {
            ssids,
            power_cycle_delay: DEFAULT_POWER_CYCLE_DELAY,
            dry_run: false,
        }
    }
}

/// Removes SSIDs from the preferred list and power-cycles the adapter.
pub struct PreferredNetworkEditor<R, P, S> {
    runner: R,
    privilege: P,
    pause: S,
}

impl<R: CommandRunner, P: PrivilegeCheck, S: Pause> PreferredNetworkEditor<R, P, S> {
    pub fn new(runner: R, privilege: P, pause: S) -> Self {
        Self {
            runner,
            privilege,
            pause,
        }
    }

    /// Locate the Wi-Fi device without checking privilege.
    pub fn locate_device(&self) -> Result<WifiDevice> {
        locate_wifi_device(&self.runner)
    }

    /// Locate the device and return the current preferred list text.
    ///
    /// Read-only; does not need root.
    pub fn preferred_list(&self) -> Result<(WifiDevice, String)> {
        let device = self.locate_device()?;
        let output = self
            .runner
            .run(&NetworkCommand::ListPreferred(device.clone()))?;
        output.ensure_success("listing preferred networks")?;
        Ok((device, output.stdout))
    }

    /// Run the full forget-and-reconnect sequence.
    pub fn run(&self, options: &EditorOptions) -> Result<RunReport> {
        if !self.privilege.is_privileged() {
            return Err(PrefNetError::InsufficientPrivilege);
        }

        let device = self.locate_device()?;
        println!("📡 Wi-Fi device: {}", device);

        println!("\nPreferred networks before:");
        let before = self.snapshot(&device);

        let removals: Vec<RemovalOutcome> = options
            .ssids
            .iter()
            .map(|ssid| self.remove(&device, ssid))
            .collect();

        println!("\nPreferred networks after:");
        let after = self.snapshot(&device);

        println!("\n🔄 Restarting Wi-Fi on {}...", device);
        let power_off_ok = self.set_power(&device, PowerState::Off);
        if !options.dry_run {
            info!(delay = ?options.power_cycle_delay, "waiting for adapter to power down");
        }
        self.pause.pause(options.power_cycle_delay);
        let power_on_ok = self.set_power(&device, PowerState::On);

        Ok(RunReport {
            device,
            before,
            after,
            removals,
            power_off_ok,
            power_on_ok,
            dry_run: options.dry_run,
        })
    }

    /// Print the preferred list for the operator. Never fails the run.
    fn snapshot(&self, device: &WifiDevice) -> String {
        match self.runner.run(&NetworkCommand::ListPreferred(device.clone())) {
            Ok(output) => {
                if !output.success {
                    warn!(%device, detail = %output.detail(), "listing preferred networks failed");
                }
                print!("{}", output.stdout);
                if !output.stderr.is_empty() {
                    eprint!("{}", output.stderr);
                }
                output.stdout
            }
            Err(e) => {
                warn!(%device, error = %e, "listing preferred networks failed");
                eprintln!("{}", e);
                String::new()
            }
        }
    }

    /// Best-effort removal; a missing SSID is not an error.
    fn remove(&self, device: &WifiDevice, ssid: &str) -> RemovalOutcome {
        println!("🗑  Removing {} from preferred networks", ssid);
        let command = NetworkCommand::RemovePreferred(device.clone(), ssid.to_string());

        match self.runner.run(&command) {
            Ok(output) => {
                if output.success {
                    info!(%device, ssid, "remove command finished");
                } else {
                    warn!(
                        %device,
                        ssid,
                        exit_code = ?output.exit_code,
                        detail = %output.detail(),
                        "remove command failed (SSID may not be in the preferred list)"
                    );
                }
                RemovalOutcome {
                    ssid: ssid.to_string(),
                    exit_code: output.exit_code,
                    success: output.success,
                    detail: output.detail(),
                }
            }
            Err(e) => {
                warn!(%device, ssid, error = %e, "remove command could not run");
                RemovalOutcome {
                    ssid: ssid.to_string(),
                    exit_code: None,
                    success: false,
                    detail: e.to_string(),
                }
            }
        }
    }

    fn set_power(&self, device: &WifiDevice, state: PowerState) -> bool {
        match self
            .runner
            .run(&NetworkCommand::SetPower(device.clone(), state))
        {
            Ok(output) if output.success => {
                info!(%device, %state, "set adapter power");
                true
            }
            Ok(output) => {
                warn!(%device, %state, detail = %output.detail(), "power command failed");
                false
            }
            Err(e) => {
                warn!(%device, %state, error = %e, "power command could not run");
                false
            }
        }
    }
}
