//! Command implementations.

pub mod discover;
pub mod local_ip;
pub mod probe;
pub mod snapshots;

pub use discover::run_discover;
pub use local_ip::run_local_ip;
pub use probe::run_probe;
pub use snapshots::run_snapshots;
