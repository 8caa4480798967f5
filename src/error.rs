//! Error handling module for prefnet
//!
//! Provides the library error type using thiserror. Only privilege and
//! device lookup failures (plus bad configuration) stop a run; command
//! failures after the device is known are logged and recorded instead.

use thiserror::Error;

/// Main error type for prefnet
#[derive(Error, Debug)]
pub enum PrefNetError {
    /// Not running with administrative privilege
    #[error("Administrative privileges required (run with sudo)")]
    InsufficientPrivilege,

    /// Hardware port listing has no Wi-Fi device
    #[error("Could not find a Wi-Fi device: {0}")]
    DeviceNotFound(String),

    /// Configuration errors (loading, parsing, validation)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Command spawn or wait failures
    #[error("Command failed: {0}")]
    Command(String),

    /// IO errors (config file, process spawning)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for prefnet operations
pub type Result<T> = std::result::Result<T, PrefNetError>;

impl PrefNetError {
    /// Create a device lookup error
    pub fn device_not_found(msg: impl Into<String>) -> Self {
        Self::DeviceNotFound(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a command error
    pub fn command(msg: impl Into<String>) -> Self {
        Self::Command(msg.into())
    }

    /// Whether this error stops the run before anything is mutated.
    pub fn is_preflight(&self) -> bool {
        matches!(
            self,
            Self::InsufficientPrivilege | Self::DeviceNotFound(_) | Self::Config(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PrefNetError::config("no SSIDs configured");
        assert_eq!(err.to_string(), "Configuration error: no SSIDs configured");

        let err = PrefNetError::device_not_found("no Wi-Fi hardware port");
        assert_eq!(
            err.to_string(),
            "Could not find a Wi-Fi device: no Wi-Fi hardware port"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: PrefNetError = io_err.into();
        assert!(matches!(err, PrefNetError::Io(_)));
    }

    #[test]
    fn test_preflight_classification() {
        assert!(PrefNetError::InsufficientPrivilege.is_preflight());
        assert!(PrefNetError::device_not_found("x").is_preflight());
        assert!(!PrefNetError::command("spawn failed").is_preflight());
    }
}
