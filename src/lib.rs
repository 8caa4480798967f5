//! prefnet library
//!
//! Removes networks from the macOS Wi-Fi preferred list via `networksetup`
//! and power-cycles the adapter so it rejoins the next preferred network.

pub mod cli;
pub mod command_runner;
pub mod config_file;
pub mod editor;
pub mod error;
pub mod hardware;
pub mod netcmd;
pub mod pause;
pub mod process_guard;
pub mod sanity;
pub mod types;

pub use command_runner::{CommandOutput, CommandRunner, DryRunRunner, NetworkSetup};
pub use config_file::PrefNetConfig;
pub use editor::{EditorOptions, MAX_SSIDS, PreferredNetworkEditor, SsidList};
pub use error::{PrefNetError, Result};
pub use hardware::{locate_wifi_device, parse_wifi_device};
pub use netcmd::NetworkCommand;
pub use pause::{NoPause, Pause, ThreadSleep};
pub use process_guard::{ChildRegistry, CommandProcessGroup, ProcessGuard};
pub use sanity::{AssumePrivileged, EuidCheck, PrivilegeCheck};
pub use types::{PowerState, RemovalOutcome, RunReport, WifiDevice};
