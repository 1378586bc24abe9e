//! CLI argument definitions using clap.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

/// onvif-scout - Discover ONVIF cameras and other streaming devices
#[derive(Parser, Debug)]
#[command(name = "onvif-scout")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Exit non-zero when discovery finds no devices
    #[arg(long, global = true)]
    pub strict: bool,

    /// Discovery config file (JSON)
    #[arg(long, global = true, env = "ONVIF_SCOUT_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Probe the network and list responding devices
    Discover(DiscoverArgs),

    /// Print the probe message that discovery sends
    Probe(ProbeArgs),

    /// Print this machine's outbound IPv4 address
    LocalIp,

    /// Saved discovery results
    Snapshots(SnapshotsArgs),
}

// ==================== Discover ====================

#[derive(Args, Debug)]
pub struct DiscoverArgs {
    /// Receive window in milliseconds
    #[arg(short, long, env = "ONVIF_SCOUT_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Probe destination (host:port)
    #[arg(long)]
    pub multicast: Option<String>,

    /// Only accept replies containing this text
    #[arg(long)]
    pub marker: Option<String>,

    /// Save the result as a named snapshot
    #[arg(long)]
    pub save: Option<String>,
}

// ==================== Probe ====================

#[derive(Args, Debug)]
pub struct ProbeArgs {
    /// Message id to embed instead of a fresh one
    #[arg(long)]
    pub token: Option<String>,
}

// ==================== Snapshots ====================

#[derive(Args, Debug)]
pub struct SnapshotsArgs {
    #[command(subcommand)]
    pub command: SnapshotCommands,
}

#[derive(Subcommand, Debug)]
pub enum SnapshotCommands {
    /// List saved snapshots
    List,

    /// Show the devices of a snapshot
    Show(SnapshotNameArgs),

    /// Delete a snapshot
    Delete(SnapshotNameArgs),
}

#[derive(Args, Debug)]
pub struct SnapshotNameArgs {
    /// Snapshot name
    pub name: String,
}
