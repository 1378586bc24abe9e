//! JSON-formatted output for CLI.

use serde::Serialize;
use serde_json::json;

use super::OutputFormatter;
use onvif_scout_core::types::{DeviceRecord, DiscoverySnapshot, SnapshotInfo};

pub struct JsonOutput;

impl JsonOutput {
    pub fn new() -> Self {
        Self
    }

    fn to_json<T: Serialize>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }
}

impl Default for JsonOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for JsonOutput {
    fn format_devices(&self, devices: &[DeviceRecord]) -> String {
        let output = json!({
            "devices": devices,
            "count": devices.len()
        });
        Self::to_json(&output)
    }

    fn format_snapshot_list(&self, snapshots: &[SnapshotInfo]) -> String {
        Self::to_json(&json!({
            "snapshots": snapshots,
            "count": snapshots.len()
        }))
    }

    fn format_snapshot(&self, snapshot: &DiscoverySnapshot) -> String {
        Self::to_json(snapshot)
    }

    fn format_message(&self, message: &str) -> String {
        Self::to_json(&json!({ "message": message }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_devices() {
        let devices = vec![DeviceRecord {
            name: "Cam1".to_string(),
            ip: "10.0.0.1:80".to_string(),
            ..Default::default()
        }];

        let output = JsonOutput::new().format_devices(&devices);
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["count"], 1);
        assert_eq!(value["devices"][0]["ip"], "10.0.0.1:80");
        assert_eq!(value["devices"][0]["metadata_version"], "");
    }

    #[test]
    fn test_format_snapshot_list() {
        let snapshots = vec![SnapshotInfo {
            name: "lab".to_string(),
            created_at: "2026-01-01T00:00:00+00:00".to_string(),
            device_count: 3,
        }];

        let output = JsonOutput::new().format_snapshot_list(&snapshots);
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["snapshots"][0]["deviceCount"], 3);
    }
}
