//! onvif-scout core library.
//!
//! Sends a WS-Discovery probe to the ONVIF multicast group, collects the
//! replies that arrive within the receive window and turns each one into a
//! [`DeviceRecord`]. Shared by the CLI and usable from any other frontend.

pub mod config;
pub mod discovery;
pub mod error;
pub mod protocol;
pub mod storage;
pub mod types;

pub use config::DiscoveryConfig;
pub use discovery::{discover_devices, DiscoveryService};
pub use error::CoreError;
pub use types::DeviceRecord;
