//! Storage for saved discovery results.

pub mod snapshot;

pub use snapshot::SnapshotStorage;

/// Get the default snapshot directory.
///
/// Uses the `directories` crate to find the appropriate platform-specific
/// data directory.
pub fn default_storage_dir() -> Option<std::path::PathBuf> {
    directories::ProjectDirs::from("", "onvif-scout", "onvif-scout")
        .map(|dirs| dirs.data_dir().join("snapshots"))
}
