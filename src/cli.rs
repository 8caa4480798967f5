use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// prefnet - forget Wi-Fi networks and reconnect
#[derive(Parser, Debug)]
#[command(name = "prefnet")]
#[command(about = "Remove networks from the macOS Wi-Fi preferred list and restart Wi-Fi")]
#[command(version)]
pub struct Cli {
    /// Dry-run mode: show what would be executed without making changes.
    ///
    /// The hardware-port lookup and preferred-list snapshots still run so
    /// the preview is realistic; removals and power changes are skipped.
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// SSID to remove from the preferred list (repeat for a second one)
    #[arg(short, long = "ssid", value_name = "SSID", global = true)]
    pub ssids: Vec<String>,

    /// JSON configuration file
    #[arg(short, long, env = "PREFNET_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Seconds to wait between powering Wi-Fi off and on
    #[arg(long, value_name = "SECS", global = true)]
    pub delay_secs: Option<u64>,

    /// Path to the networksetup binary
    #[arg(long, value_name = "PATH", global = true)]
    pub networksetup: Option<PathBuf>,

    /// Skip the root check (development only)
    #[arg(long, global = true, hide = true)]
    pub skip_root_check: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Remove the configured SSIDs and power-cycle Wi-Fi (default)
    Forget,
    /// Show the current preferred network list
    List,
    /// Print the Wi-Fi device identifier
    Device,
    /// Validate a configuration file
    Validate {
        /// Path to configuration file to validate
        file: PathBuf,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        <Self as clap::Parser>::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_no_args() {
        let cli = Cli::try_parse_from(["prefnet"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.ssids.is_empty());
        assert!(!cli.dry_run);
    }

    #[test]
    fn test_cli_two_ssids() {
        let cli = Cli::try_parse_from([
            "prefnet", "--ssid", "HomeNet", "-s", "OldOffice", "forget",
        ])
        .unwrap();
        assert_eq!(cli.ssids, vec!["HomeNet", "OldOffice"]);
        assert_eq!(cli.command, Some(Commands::Forget));
    }

    #[test]
    fn test_cli_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "prefnet",
            "forget",
            "--dry-run",
            "--delay-secs",
            "0",
            "--ssid",
            "Cafe Wifi",
        ])
        .unwrap();
        assert!(cli.dry_run);
        assert_eq!(cli.delay_secs, Some(0));
        assert_eq!(cli.ssids, vec!["Cafe Wifi"]);
    }

    #[test]
    fn test_cli_validate_command() {
        let cli = Cli::try_parse_from(["prefnet", "validate", "/etc/prefnet.json"]).unwrap();
        match cli.command {
            Some(Commands::Validate { file }) => {
                assert_eq!(file, PathBuf::from("/etc/prefnet.json"));
            }
            _ => panic!("Expected Validate command"),
        }
    }

    #[test]
    fn test_cli_rejects_bad_delay() {
        assert!(Cli::try_parse_from(["prefnet", "--delay-secs", "soon"]).is_err());
    }

    #[test]
    fn test_cli_list_and_device() {
        let cli = Cli::try_parse_from(["prefnet", "list"]).unwrap();
        assert_eq!(cli.command, Some(Commands::List));
        let cli = Cli::try_parse_from(["prefnet", "device", "--networksetup", "/bin/echo"]).unwrap();
        assert_eq!(cli.command, Some(Commands::Device));
        assert_eq!(cli.networksetup, Some(PathBuf::from("/bin/echo")));
    }
}
