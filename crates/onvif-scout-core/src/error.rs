//! Error types for onvif-scout core.

use thiserror::Error;

/// Core error type for shared operations.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Discovery error: {0}")]
    Discovery(#[from] DiscoveryError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Setup failures of a discovery run.
///
/// Any of these aborts the run before collection starts; there is no partial
/// result.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("Failed to open UDP endpoint: {0}")]
    Bind(#[source] std::io::Error),

    #[error("Failed to resolve discovery address {addr}: {source}")]
    Resolve {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Discovery address {0} did not resolve to any socket address")]
    NoAddress(String),

    #[error("Failed to send probe: {0}")]
    Send(#[source] std::io::Error),
}

/// Reasons a single response is skipped during collection.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResponseError {
    #[error("response does not carry the discovery marker")]
    MissingMarker,

    #[error("response has no XAddrs value")]
    MissingAddress,

    #[error("invalid XAddrs '{xaddrs}': {reason}")]
    InvalidAddress { xaddrs: String, reason: String },

    #[error("XAddrs '{xaddrs}' has no host")]
    MissingHost { xaddrs: String },
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to access storage directory: {0}")]
    DirectoryAccess(String),

    #[error("Invalid name: {0}")]
    InvalidName(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
