//! Table-formatted output for CLI.

use colored::*;
use comfy_table::{Cell, ContentArrangement, Table};

use super::OutputFormatter;
use onvif_scout_core::types::{DeviceRecord, DiscoverySnapshot, SnapshotInfo};

pub struct TableOutput;

impl TableOutput {
    pub fn new() -> Self {
        Self
    }

    fn device_table(devices: &[DeviceRecord]) -> Table {
        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec!["Name", "Hardware", "IP", "MAC", "Profiles", "Metadata"]);

        for device in devices {
            table.add_row(vec![
                Cell::new(&device.name),
                Cell::new(&device.hardware),
                Cell::new(&device.ip),
                Cell::new(&device.mac),
                Cell::new(&device.profile),
                Cell::new(&device.metadata_version),
            ]);
        }

        table
    }
}

impl Default for TableOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for TableOutput {
    fn format_devices(&self, devices: &[DeviceRecord]) -> String {
        if devices.is_empty() {
            return "No devices found.".to_string();
        }

        format!(
            "{}\n\nFound {} device(s)",
            Self::device_table(devices),
            devices.len()
        )
    }

    fn format_snapshot_list(&self, snapshots: &[SnapshotInfo]) -> String {
        if snapshots.is_empty() {
            return "No snapshots saved.".to_string();
        }

        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec!["Name", "Created", "Devices"]);

        for snapshot in snapshots {
            table.add_row(vec![
                Cell::new(&snapshot.name),
                Cell::new(&snapshot.created_at),
                Cell::new(snapshot.device_count.to_string()),
            ]);
        }

        table.to_string()
    }

    fn format_snapshot(&self, snapshot: &DiscoverySnapshot) -> String {
        let header = format!(
            "Snapshot: {} ({})",
            snapshot.name.bold(),
            snapshot.created_at.dimmed()
        );

        format!("{}\n{}", header, self.format_devices(&snapshot.devices))
    }

    fn format_message(&self, message: &str) -> String {
        message.to_string()
    }
}
