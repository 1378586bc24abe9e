//! Probe-match parsing.
//!
//! Turns one received datagram into a [`DeviceRecord`], or explains why the
//! datagram was skipped.

use std::net::{IpAddr, SocketAddr};

use url::{Host, Url};

use crate::error::ResponseError;
use crate::protocol::escape::path_escape;
use crate::protocol::scopes::{extract_profiles, extract_value, HARDWARE_KEY, MAC_KEY, NAME_KEY};
use crate::protocol::tags::{find_tag_value, METADATA_VERSION_TAG, SCOPES_TAG, XADDRS_TAG};
use crate::types::{DeviceRecord, PROFILE_SEPARATOR};

/// Address prefix of devices that report their wildcard bind address
pub const WILDCARD_PREFIX: &str = "http://0.0.0.0";

/// Parse a probe-match datagram received from `sender`.
///
/// Only payloads containing `marker` are considered.
pub fn parse_probe_match(
    data: &[u8],
    sender: SocketAddr,
    marker: &str,
) -> Result<DeviceRecord, ResponseError> {
    let payload = String::from_utf8_lossy(data);

    if !payload.contains(marker) {
        return Err(ResponseError::MissingMarker);
    }

    let xaddrs = find_tag_value(&payload, XADDRS_TAG);
    if xaddrs.is_empty() {
        return Err(ResponseError::MissingAddress);
    }

    let xaddrs = resolve_wildcard(&xaddrs, sender.ip());
    let xaddrs = xaddrs.split(' ').next().unwrap_or("").to_string();
    let ip = endpoint_of(&xaddrs)?;

    let scopes = find_tag_value(&payload, SCOPES_TAG);
    let metadata_version = find_tag_value(&payload, METADATA_VERSION_TAG);

    Ok(DeviceRecord {
        name: path_escape(&extract_value(&scopes, NAME_KEY)),
        hardware: path_escape(&extract_value(&scopes, HARDWARE_KEY)),
        ip,
        xaddrs,
        mac: path_escape(&extract_value(&scopes, MAC_KEY)),
        profile: extract_profiles(&scopes).join(PROFILE_SEPARATOR),
        metadata_version: path_escape(&metadata_version),
    })
}

/// Replace a wildcard bind host with the address the reply came from.
pub fn resolve_wildcard(xaddrs: &str, sender: IpAddr) -> String {
    match xaddrs.strip_prefix(WILDCARD_PREFIX) {
        Some(rest) => match sender {
            IpAddr::V4(v4) => format!("http://{}{}", v4, rest),
            IpAddr::V6(v6) => format!("http://[{}]{}", v6, rest),
        },
        None => xaddrs.to_string(),
    }
}

/// Reduce a service address to `host:port`.
///
/// A missing port falls back to the scheme's default.
fn endpoint_of(xaddrs: &str) -> Result<String, ResponseError> {
    let url = Url::parse(xaddrs).map_err(|e| ResponseError::InvalidAddress {
        xaddrs: xaddrs.to_string(),
        reason: e.to_string(),
    })?;

    let host = match url.host() {
        Some(Host::Ipv6(v6)) => v6.to_string(),
        Some(host) => host.to_string(),
        None => {
            return Err(ResponseError::MissingHost {
                xaddrs: xaddrs.to_string(),
            })
        }
    };

    let port = url
        .port_or_known_default()
        .map(|p| p.to_string())
        .unwrap_or_default();

    Ok(format!("{}:{}", host, port))
}
