//! WS-Discovery device discovery.
//!
//! Provides probe-match parsing, the one-shot discovery service and the
//! local address lookup used for display.

pub mod local_addr;
pub mod record;
pub mod service;

pub use local_addr::local_ipv4;
pub use record::parse_probe_match;
pub use service::{discover_devices, DiscoveryService};
