//! Loose tag-value extraction from XML-shaped payloads.
//!
//! Devices in the field send replies that are not always well-formed, so a
//! validating parser is not used. The first opening tag whose name contains
//! the requested name wins, and its text runs up to the next `<`.

use regex::Regex;
use tracing::trace;

/// Service addresses of the responding device
pub const XADDRS_TAG: &str = "XAddrs";

/// Space-delimited scope URIs
pub const SCOPES_TAG: &str = "Scopes";

/// Metadata version counter
pub const METADATA_VERSION_TAG: &str = "MetadataVersion";

/// Find the text content of the first element whose name contains `tag`.
///
/// Returns an empty string when nothing matches.
pub fn find_tag_value(xml: &str, tag: &str) -> String {
    trace!("Finding value for tag: {}", tag);

    let pattern = format!(r"<[^/>]*{}[^>]*>([^<]+)", regex::escape(tag));
    let regex = match Regex::new(&pattern) {
        Ok(r) => r,
        Err(_) => return String::new(),
    };

    regex
        .captures(xml)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}
