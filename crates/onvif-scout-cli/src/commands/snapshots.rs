//! Snapshot command implementation.

use onvif_scout_core::storage::{default_storage_dir, SnapshotStorage};

use crate::cli::{SnapshotCommands, SnapshotsArgs};
use crate::error::{CliError, StorageError};
use crate::output::get_formatter;

/// Run the snapshots command
pub async fn run_snapshots(args: SnapshotsArgs, json: bool) -> Result<(), CliError> {
    let dir = default_storage_dir()
        .ok_or_else(|| CliError::Other("No snapshot directory available".to_string()))?;
    let storage = SnapshotStorage::new(dir)?;

    let output = execute(&storage, args.command, json).await?;
    println!("{}", output);
    Ok(())
}

async fn execute(
    storage: &SnapshotStorage,
    command: SnapshotCommands,
    json: bool,
) -> Result<String, CliError> {
    let formatter = get_formatter(json);

    match command {
        SnapshotCommands::List => {
            let snapshots = storage.list().await?;
            Ok(formatter.format_snapshot_list(&snapshots))
        }
        SnapshotCommands::Show(args) => {
            let snapshot = storage
                .read(&args.name)
                .await?
                .ok_or_else(|| StorageError::NotFound(args.name.clone()))?;
            Ok(formatter.format_snapshot(&snapshot))
        }
        SnapshotCommands::Delete(args) => {
            storage.delete(&args.name).await?;
            Ok(formatter.format_message(&format!("Deleted snapshot '{}'", args.name)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::SnapshotNameArgs;
    use onvif_scout_core::types::DeviceRecord;

    fn create_test_storage() -> (SnapshotStorage, tempfile::TempDir) {
        let temp_dir = tempfile::tempdir().unwrap();
        let storage = SnapshotStorage::new(temp_dir.path().to_path_buf()).unwrap();
        (storage, temp_dir)
    }

    #[tokio::test]
    async fn test_show_and_delete() {
        let (storage, _tmp) = create_test_storage();
        let device = DeviceRecord {
            name: "Lobby".to_string(),
            ip: "10.0.0.1:80".to_string(),
            ..Default::default()
        };
        storage.save("lab", &[device]).await.unwrap();

        let shown = execute(
            &storage,
            SnapshotCommands::Show(SnapshotNameArgs {
                name: "lab".to_string(),
            }),
            true,
        )
        .await
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&shown).unwrap();
        assert_eq!(value["devices"][0]["name"], "Lobby");

        execute(
            &storage,
            SnapshotCommands::Delete(SnapshotNameArgs {
                name: "lab".to_string(),
            }),
            false,
        )
        .await
        .unwrap();

        let listed = execute(&storage, SnapshotCommands::List, false).await.unwrap();
        assert_eq!(listed, "No snapshots saved.");
    }

    #[tokio::test]
    async fn test_show_missing() {
        let (storage, _tmp) = create_test_storage();
        let result = execute(
            &storage,
            SnapshotCommands::Show(SnapshotNameArgs {
                name: "absent".to_string(),
            }),
            false,
        )
        .await;
        assert!(matches!(
            result,
            Err(CliError::Core(onvif_scout_core::CoreError::Storage(
                StorageError::NotFound(_)
            )))
        ));
    }
}
