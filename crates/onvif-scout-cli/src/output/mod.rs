//! Output formatting for CLI results.

pub mod json;
pub mod table;

pub use json::JsonOutput;
pub use table::TableOutput;

use onvif_scout_core::types::{DeviceRecord, DiscoverySnapshot, SnapshotInfo};

/// Output formatter trait
pub trait OutputFormatter {
    /// Format device list
    fn format_devices(&self, devices: &[DeviceRecord]) -> String;

    /// Format saved snapshot listing
    fn format_snapshot_list(&self, snapshots: &[SnapshotInfo]) -> String;

    /// Format a single saved snapshot
    fn format_snapshot(&self, snapshot: &DiscoverySnapshot) -> String;

    /// Format a generic message
    fn format_message(&self, message: &str) -> String;
}

/// Get the appropriate formatter based on JSON flag
pub fn get_formatter(json: bool) -> Box<dyn OutputFormatter> {
    if json {
        Box::new(JsonOutput::new())
    } else {
        Box::new(TableOutput::new())
    }
}
