//! Discovery configuration.
//!
//! Defaults match the standard WS-Discovery multicast group and a five second
//! receive window. A JSON file can override any subset of the fields.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::fs;
use tracing::debug;

use crate::error::ConfigError;

/// WS-Discovery multicast group and port
pub const DEFAULT_MULTICAST_ADDR: &str = "239.255.255.250:3702";

/// Receive window in milliseconds
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;

/// Receive buffer size per datagram
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Substring every discovery reply of interest carries
pub const DEFAULT_MARKER: &str = "onvif";

/// Largest datagram payload a UDP socket can deliver
const MAX_BUFFER_SIZE: usize = 65535;

/// Parameters of a discovery run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DiscoveryConfig {
    /// Destination of the probe (`host:port`, resolved at send time)
    pub multicast_addr: String,
    /// Local address of the transient endpoint
    pub bind_addr: SocketAddr,
    /// Receive window, measured from the start of collection
    pub timeout_ms: u64,
    /// Receive buffer size
    pub buffer_size: usize,
    /// Content filter applied to every reply
    pub marker: String,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            multicast_addr: DEFAULT_MULTICAST_ADDR.to_string(),
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 0)),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            buffer_size: DEFAULT_BUFFER_SIZE,
            marker: DEFAULT_MARKER.to_string(),
        }
    }
}

impl DiscoveryConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Check the values a discovery run cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.multicast_addr.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "multicastAddr cannot be empty".to_string(),
            ));
        }

        if self.timeout_ms == 0 {
            return Err(ConfigError::Invalid(
                "timeoutMs must be greater than zero".to_string(),
            ));
        }

        if self.buffer_size == 0 || self.buffer_size > MAX_BUFFER_SIZE {
            return Err(ConfigError::Invalid(format!(
                "bufferSize must be between 1 and {}",
                MAX_BUFFER_SIZE
            )));
        }

        Ok(())
    }

    /// Load and validate a JSON config file.
    pub async fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).await?;
        let config: DiscoveryConfig = serde_json::from_str(&content)?;
        config.validate()?;

        debug!("Loaded discovery config from {}", path.display());
        Ok(config)
    }

    /// Load `path` if given, else the default config file if present, else
    /// the built-in defaults.
    pub async fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::load(path).await;
        }

        match default_config_path() {
            Some(path) if path.exists() => Self::load(&path).await,
            _ => Ok(Self::default()),
        }
    }
}

/// Platform-specific location of the config file.
pub fn default_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "onvif-scout", "onvif-scout")
        .map(|dirs| dirs.config_dir().join("config.json"))
}
