//! Type definitions shared by the core and its frontends.

use serde::{Deserialize, Serialize};

/// Separator used when joining the profile list into a single field.
pub const PROFILE_SEPARATOR: &str = ", ";

/// A streaming device that answered the discovery probe.
///
/// Every field is always present, possibly empty. Free-text fields are
/// percent-escaped; `xaddrs` is the raw first service address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceRecord {
    /// Friendly name from the `name` scope
    pub name: String,
    /// Hardware model from the `hardware` scope
    pub hardware: String,
    /// `<host>:<port>` of the device service endpoint. Without an explicit
    /// port in the address, the scheme's default port is used (`80` for http).
    pub ip: String,
    /// First advertised service address
    pub xaddrs: String,
    /// MAC address from the `MAC` scope
    pub mac: String,
    /// Supported profiles, joined with `", "`
    pub profile: String,
    /// Value of the `MetadataVersion` element
    pub metadata_version: String,
}

/// A saved discovery result.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoverySnapshot {
    pub name: String,
    pub created_at: String,
    pub devices: Vec<DeviceRecord>,
}

/// Listing entry for a saved snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotInfo {
    pub name: String,
    pub created_at: String,
    pub device_count: usize,
}
