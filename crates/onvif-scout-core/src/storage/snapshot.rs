//! Snapshot storage service.
//!
//! Saves the device list of a discovery run under a name so it can be
//! listed or compared later.

use crate::error::StorageError;
use crate::types::{DeviceRecord, DiscoverySnapshot, SnapshotInfo};
use regex::Regex;
use std::path::PathBuf;
use tokio::fs;
use tracing::debug;

/// Regex for valid snapshot names: alphanumeric, dash, underscore only
const NAME_PATTERN: &str = r"^[a-zA-Z0-9_-]+$";

/// Maximum name length
const MAX_NAME_LENGTH: usize = 64;

/// Snapshot storage service.
///
/// Takes a `PathBuf` in the constructor so callers and tests can choose
/// the storage location.
pub struct SnapshotStorage {
    snapshot_dir: PathBuf,
    name_regex: Regex,
}

impl SnapshotStorage {
    /// Create a new SnapshotStorage with the given directory.
    pub fn new(dir: PathBuf) -> Result<Self, StorageError> {
        std::fs::create_dir_all(&dir).map_err(|e| {
            StorageError::DirectoryAccess(format!("{}: {}", dir.display(), e))
        })?;

        Ok(Self {
            snapshot_dir: dir,
            name_regex: Regex::new(NAME_PATTERN).expect("name pattern is a valid regex"),
        })
    }

    fn validate_name(&self, name: &str) -> Result<(), StorageError> {
        if name.is_empty() {
            return Err(StorageError::InvalidName(
                "Name cannot be empty".to_string(),
            ));
        }

        if name.len() > MAX_NAME_LENGTH {
            return Err(StorageError::InvalidName(format!(
                "Name exceeds maximum length of {} characters",
                MAX_NAME_LENGTH
            )));
        }

        if !self.name_regex.is_match(name) {
            return Err(StorageError::InvalidName(format!(
                "Name '{}' contains invalid characters. Only alphanumeric, dash, and underscore allowed.",
                name
            )));
        }

        Ok(())
    }

    fn get_path(&self, name: &str) -> PathBuf {
        self.snapshot_dir.join(format!("{}.json", name))
    }

    /// List all saved snapshots.
    pub async fn list(&self) -> Result<Vec<SnapshotInfo>, StorageError> {
        let mut snapshots = Vec::new();
        let mut entries = fs::read_dir(&self.snapshot_dir).await?;

        while let Ok(Some(entry)) = entries.next_entry().await {
            let path = entry.path();

            if path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }

            let name = match path.file_stem().and_then(|s| s.to_str()) {
                Some(n) => n.to_string(),
                None => continue,
            };

            let snapshot = match self.read(&name).await {
                Ok(Some(s)) => s,
                _ => continue,
            };

            snapshots.push(SnapshotInfo {
                name,
                created_at: snapshot.created_at,
                device_count: snapshot.devices.len(),
            });
        }

        snapshots.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(snapshots)
    }

    /// Read a snapshot by name.
    pub async fn read(&self, name: &str) -> Result<Option<DiscoverySnapshot>, StorageError> {
        self.validate_name(name)?;

        let path = self.get_path(name);

        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path).await?;
        let snapshot: DiscoverySnapshot = serde_json::from_str(&content)?;

        Ok(Some(snapshot))
    }

    /// Save a device list, replacing any snapshot with the same name.
    pub async fn save(
        &self,
        name: &str,
        devices: &[DeviceRecord],
    ) -> Result<DiscoverySnapshot, StorageError> {
        self.validate_name(name)?;

        let snapshot = DiscoverySnapshot {
            name: name.to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
            devices: devices.to_vec(),
        };

        let path = self.get_path(name);
        let content = serde_json::to_string_pretty(&snapshot)?;
        fs::write(&path, content).await?;

        debug!("Saved {} device(s) to {}", devices.len(), path.display());
        Ok(snapshot)
    }

    /// Delete a snapshot.
    pub async fn delete(&self, name: &str) -> Result<(), StorageError> {
        self.validate_name(name)?;

        let path = self.get_path(name);

        if !path.exists() {
            return Err(StorageError::NotFound(name.to_string()));
        }

        fs::remove_file(&path).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_storage() -> (SnapshotStorage, tempfile::TempDir) {
        let temp_dir = tempfile::tempdir().unwrap();
        let storage = SnapshotStorage::new(temp_dir.path().to_path_buf()).unwrap();
        (storage, temp_dir)
    }

    fn make_device(ip: &str) -> DeviceRecord {
        DeviceRecord {
            name: "Cam1".to_string(),
            hardware: "Model1".to_string(),
            ip: ip.to_string(),
            xaddrs: format!("http://{}/onvif/device_service", ip),
            mac: "AA:BB:CC:DD:EE:FF".to_string(),
            profile: "Streaming".to_string(),
            metadata_version: "1".to_string(),
        }
    }

    #[tokio::test]
    async fn test_save_and_read() {
        let (storage, _tmp) = create_test_storage();
        let devices = vec![make_device("10.0.0.1:80"), make_device("10.0.0.2:80")];

        storage.save("office", &devices).await.unwrap();

        let loaded = storage.read("office").await.unwrap().unwrap();
        assert_eq!(loaded.name, "office");
        assert_eq!(loaded.devices, devices);
        assert!(chrono::DateTime::parse_from_rfc3339(&loaded.created_at).is_ok());
    }

    #[tokio::test]
    async fn test_read_missing() {
        let (storage, _tmp) = create_test_storage();
        assert!(storage.read("nothing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list() {
        let (storage, _tmp) = create_test_storage();

        storage.save("beta", &[make_device("10.0.0.1:80")]).await.unwrap();
        storage.save("alpha", &[]).await.unwrap();

        let snapshots = storage.list().await.unwrap();
        assert_eq!(snapshots.len(), 2);
        assert_eq!(snapshots[0].name, "alpha");
        assert_eq!(snapshots[0].device_count, 0);
        assert_eq!(snapshots[1].name, "beta");
        assert_eq!(snapshots[1].device_count, 1);
    }

    #[tokio::test]
    async fn test_delete() {
        let (storage, _tmp) = create_test_storage();

        storage.save("to-delete", &[]).await.unwrap();
        storage.delete("to-delete").await.unwrap();
        assert!(storage.read("to-delete").await.unwrap().is_none());

        assert!(matches!(
            storage.delete("to-delete").await,
            Err(StorageError::NotFound(_))
        ));
    }

    #[test]
    fn test_validate_name() {
        let (storage, _tmp) = create_test_storage();

        assert!(storage.validate_name("valid-name_1").is_ok());
        assert!(storage.validate_name("").is_err());
        assert!(storage.validate_name("../etc").is_err());
        assert!(storage.validate_name(&"a".repeat(65)).is_err());
    }
}
