//! Protocol layer for WS-Discovery.
//!
//! This module builds the probe message and pulls fields out of probe-match
//! replies. Extraction is pattern based so that replies from firmware that
//! emits malformed XML still yield whatever fields can be found.

pub mod escape;
pub mod probe;
pub mod scopes;
pub mod tags;

pub use escape::path_escape;
pub use probe::{build_probe, new_session_token};
pub use scopes::{extract_profiles, extract_value};
pub use tags::find_tag_value;
