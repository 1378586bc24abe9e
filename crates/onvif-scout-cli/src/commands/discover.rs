//! Discover command implementation.

use std::path::Path;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use onvif_scout_core::config::DiscoveryConfig;
use onvif_scout_core::discovery::{local_ipv4, DiscoveryService};
use onvif_scout_core::storage::{default_storage_dir, SnapshotStorage};
use tracing::info;

use crate::cli::DiscoverArgs;
use crate::error::CliError;
use crate::output::get_formatter;

/// Run the discover command
pub async fn run_discover(
    args: DiscoverArgs,
    config_path: Option<&Path>,
    json: bool,
    strict: bool,
) -> Result<(), CliError> {
    let formatter = get_formatter(json);
    let config = resolve_config(&args, config_path).await?;

    info!(
        "Probing {} from {} for {} ms",
        config.multicast_addr,
        local_ipv4(),
        config.timeout_ms
    );

    let spinner = if json {
        None
    } else {
        Some(collection_spinner(config.timeout()))
    };

    let result = DiscoveryService::new(config).discover().await;

    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    let devices = result?;

    if let Some(name) = args.save.as_deref() {
        let dir = default_storage_dir()
            .ok_or_else(|| CliError::Other("No snapshot directory available".to_string()))?;
        let storage = SnapshotStorage::new(dir)?;
        storage.save(name, &devices).await?;
        info!("Saved snapshot '{}'", name);
    }

    println!("{}", formatter.format_devices(&devices));

    if devices.is_empty() && strict {
        return Err(CliError::NoDevicesFound);
    }

    Ok(())
}

/// File config (or defaults) overlaid with command-line flags.
async fn resolve_config(
    args: &DiscoverArgs,
    config_path: Option<&Path>,
) -> Result<DiscoveryConfig, CliError> {
    let mut config = DiscoveryConfig::load_or_default(config_path).await?;

    if let Some(timeout) = args.timeout {
        config.timeout_ms = timeout;
    }
    if let Some(multicast) = &args.multicast {
        config.multicast_addr = multicast.clone();
    }
    if let Some(marker) = &args.marker {
        config.marker = marker.clone();
    }

    config.validate()?;
    Ok(config)
}

fn collection_spinner(window: Duration) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg} [{elapsed}]")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(format!(
        "Discovering devices for {:.1} seconds...",
        window.as_secs_f64()
    ));
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
