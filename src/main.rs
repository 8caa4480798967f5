//! prefnet - main entry point

use anyhow::{Context, Result};
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

use prefnet::cli::{Cli, Commands};
use prefnet::{
    CommandRunner, DryRunRunner, EditorOptions, NetworkSetup, NoPause, Pause, PrefNetConfig,
    PrefNetError, PreferredNetworkEditor, ProcessGuard, RunReport, ThreadSleep, process_guard,
    sanity,
};

/// Initialize logging. `RUST_LOG` overrides the default `info` level.
fn init_logger() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    init_logger();
    debug!("prefnet starting up");

    // Stray networksetup children are killed on SIGINT/SIGTERM
    if let Err(e) = process_guard::init_signal_handlers() {
        warn!("Failed to initialize signal handlers: {}", e);
    }
    let _guard = ProcessGuard::new();

    let cli = Cli::parse_args();

    match &cli.command {
        Some(Commands::Validate { file }) => validate_config(file),
        Some(Commands::List) => {
            let config = resolve_config(&cli)?;
            let editor = build_editor(&config, &cli);
            exit_on_error(editor.preferred_list().map(|(device, list)| {
                println!("Preferred networks on {}:", device);
                print!("{}", list);
            }))
        }
        Some(Commands::Device) => {
            let config = resolve_config(&cli)?;
            let editor = build_editor(&config, &cli);
            exit_on_error(editor.locate_device().map(|device| println!("{}", device)))
        }
        Some(Commands::Forget) | None => {
            let config = resolve_config(&cli)?;
            exit_on_error(config.validate())?;
            let mut options = EditorOptions::new(config.ssid_list()?);
            options.power_cycle_delay = config.power_cycle_delay();
            options.dry_run = cli.dry_run;

            info!(
                ssids = ?config.ssids,
                delay = ?options.power_cycle_delay,
                dry_run = cli.dry_run,
                "forgetting preferred networks"
            );
            let editor = build_editor(&config, &cli);
            exit_on_error(editor.run(&options).map(|report| print_summary(&report)))
        }
    }
}

/// Load the config file (if any) and apply command-line overrides.
fn resolve_config(cli: &Cli) -> Result<PrefNetConfig> {
    let base = match &cli.config {
        Some(path) => {
            info!("Loading configuration from: {:?}", path);
            PrefNetConfig::load_from_file(path)
                .with_context(|| format!("Failed to load configuration file {:?}", path))?
        }
        None => PrefNetConfig::default(),
    };
    Ok(base.merge_cli(&cli.ssids, cli.delay_secs, cli.networksetup.as_deref()))
}

fn build_editor(
    config: &PrefNetConfig,
    cli: &Cli,
) -> PreferredNetworkEditor<Box<dyn CommandRunner>, Box<dyn sanity::PrivilegeCheck>, Box<dyn Pause>>
{
    let real = NetworkSetup::new(config.networksetup.clone());
    let (runner, pause): (Box<dyn CommandRunner>, Box<dyn Pause>) = if cli.dry_run {
        info!("[DRY RUN] removals and power changes will be skipped");
        (Box::new(DryRunRunner::new(real)), Box::new(NoPause))
    } else {
        (Box::new(real), Box::new(ThreadSleep))
    };
    PreferredNetworkEditor::new(runner, sanity::privilege_check(cli.skip_root_check), pause)
}

fn validate_config(path: &std::path::Path) -> Result<()> {
    info!("Validating configuration file: {:?}", path);
    match PrefNetConfig::load_from_file(path).and_then(|c| c.validate().map(|_| c)) {
        Ok(config) => {
            println!("✓ Configuration file is valid: {:?}", config);
            Ok(())
        }
        Err(e) => {
            error!("Configuration validation failed: {}", e);
            eprintln!("✗ Configuration validation failed: {}", e);
            std::process::exit(1);
        }
    }
}

/// Print a fatal error and exit 1; pass success through.
fn exit_on_error<T>(result: prefnet::Result<T>) -> Result<()> {
    match result {
        Ok(_) => Ok(()),
        Err(PrefNetError::InsufficientPrivilege) => {
            error!("Not running as root");
            sanity::print_privilege_error();
            std::process::exit(1);
        }
        Err(e) => {
            error!(preflight = e.is_preflight(), "{}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }
}

fn print_summary(report: &RunReport) {
    println!();
    if report.dry_run {
        println!("✓ Dry run complete; nothing was changed on {}", report.device);
        return;
    }

    let failed = report.failed_removals();
    if failed > 0 {
        println!(
            "⚠  {} of {} removal(s) reported an error (the network may not have been in the list)",
            failed,
            report.removals.len()
        );
    }
    if !report.power_cycled() {
        println!("⚠  Wi-Fi power cycle reported an error; check the adapter state");
    }
    println!("✅ Done. Wi-Fi on {} was restarted", report.device);
}
