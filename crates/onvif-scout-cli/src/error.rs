//! Error types for the onvif-scout CLI.
//!
//! CliError wraps CoreError from the shared library and adds CLI-specific variants.

use onvif_scout_core::error::CoreError;
use thiserror::Error;

pub use onvif_scout_core::error::{ConfigError, DiscoveryError, StorageError};

/// Exit codes for the CLI
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL_ERROR: i32 = 1;
    pub const NETWORK_ERROR: i32 = 2;
    pub const INVALID_ARGS: i32 = 4;
}

/// Main error type for the CLI
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Core(#[from] CoreError),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("No devices found")]
    NoDevicesFound,

    #[error("{0}")]
    Other(String),
}

impl CliError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Core(e) => match e {
                CoreError::Discovery(_) => exit_codes::NETWORK_ERROR,
                CoreError::Config(_) => exit_codes::INVALID_ARGS,
                CoreError::Storage(StorageError::InvalidName(_)) => exit_codes::INVALID_ARGS,
                CoreError::Storage(_) => exit_codes::GENERAL_ERROR,
            },
            CliError::InvalidArgument(_) => exit_codes::INVALID_ARGS,
            CliError::NoDevicesFound => exit_codes::GENERAL_ERROR,
            CliError::Other(_) => exit_codes::GENERAL_ERROR,
        }
    }
}

// Conversions from core error subtypes to CliError
impl From<DiscoveryError> for CliError {
    fn from(e: DiscoveryError) -> Self {
        CliError::Core(CoreError::Discovery(e))
    }
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        CliError::Core(CoreError::Config(e))
    }
}

impl From<StorageError> for CliError {
    fn from(e: StorageError) -> Self {
        CliError::Core(CoreError::Storage(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        assert_eq!(
            CliError::from(DiscoveryError::Send(io)).exit_code(),
            exit_codes::NETWORK_ERROR
        );
        assert_eq!(
            CliError::from(ConfigError::Invalid("x".to_string())).exit_code(),
            exit_codes::INVALID_ARGS
        );
        assert_eq!(
            CliError::from(StorageError::InvalidName("../x".to_string())).exit_code(),
            exit_codes::INVALID_ARGS
        );
        assert_eq!(
            CliError::from(StorageError::NotFound("lab".to_string())).exit_code(),
            exit_codes::GENERAL_ERROR
        );
        assert_eq!(CliError::NoDevicesFound.exit_code(), exit_codes::GENERAL_ERROR);
    }

    #[test]
    fn test_core_error_display_passthrough() {
        let err = CliError::from(StorageError::NotFound("lab".to_string()));
        assert_eq!(err.to_string(), "Storage error: Not found: lab");
    }
}
