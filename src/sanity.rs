//! Pre-flight privilege check
//!
//! `networksetup` needs root to edit the preferred list and toggle the
//! adapter. The check runs before any command is issued; if it fails the
//! program exits with a clear message and nothing is touched.

use tracing::{debug, warn};

/// Environment variable that disables the root check for development.
pub const SKIP_ROOT_CHECK_ENV: &str = "PREFNET_SKIP_ROOT_CHECK";

/// Strategy for deciding whether we may mutate network settings.
pub trait PrivilegeCheck {
    fn is_privileged(&self) -> bool;
}

impl<P: PrivilegeCheck + ?Sized> PrivilegeCheck for &P {
    fn is_privileged(&self) -> bool {
        (**self).is_privileged()
    }
}

impl<P: PrivilegeCheck + ?Sized> PrivilegeCheck for Box<P> {
    fn is_privileged(&self) -> bool {
        (**self).is_privileged()
    }
}

/// Privileged iff the effective UID is 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct EuidCheck;

impl PrivilegeCheck for EuidCheck {
    fn is_privileged(&self) -> bool {
        nix::unistd::geteuid().is_root()
    }
}

/// Fixed answer, for tests and `--skip-root-check`.
#[derive(Debug, Clone, Copy)]
pub struct AssumePrivileged(pub bool);

impl PrivilegeCheck for AssumePrivileged {
    fn is_privileged(&self) -> bool {
        self.0
    }
}

/// Interpret a skip-flag value: `1` or `true` (any case).
fn parse_skip_flag(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true")
}

/// Whether `PREFNET_SKIP_ROOT_CHECK` asks to skip the root check
pub fn should_skip_root_check() -> bool {
    std::env::var(SKIP_ROOT_CHECK_ENV)
        .map(|v| parse_skip_flag(&v))
        .unwrap_or(false)
}

/// Pick the privilege strategy for this process.
pub fn privilege_check(skip_root: bool) -> Box<dyn PrivilegeCheck> {
    if skip_root || should_skip_root_check() {
        warn!("Root check skipped ({}=1)", SKIP_ROOT_CHECK_ENV);
        Box::new(AssumePrivileged(true))
    } else {
        debug!("Using effective UID for privilege check");
        Box::new(EuidCheck)
    }
}

/// Print the privilege error to stderr.
pub fn print_privilege_error() {
    eprintln!();
    eprintln!("❌ ERROR: Root privileges required");
    eprintln!("   Editing the preferred network list and toggling Wi-Fi power");
    eprintln!("   need administrator rights.");
    eprintln!();
    eprintln!("   Solution: Run with sudo:");
    eprintln!("     sudo prefnet");
    eprintln!();
}
