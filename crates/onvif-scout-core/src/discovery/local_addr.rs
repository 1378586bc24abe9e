//! Local outbound address lookup.

use std::net::{Ipv4Addr, SocketAddr, UdpSocket};

/// Routable address used only to select the outbound interface
const ROUTE_PROBE_ADDR: &str = "10.255.255.255:1";

/// Returned when no outbound interface can be determined
pub const FALLBACK_IPV4: &str = "127.0.0.1";

/// Return the IPv4 address this machine would use for outbound traffic.
///
/// Connecting a UDP socket sends nothing; it only asks the OS to pick a
/// route. Falls back to the loopback address.
pub fn local_ipv4() -> String {
    outbound_ipv4()
        .map(|ip| ip.to_string())
        .unwrap_or_else(|| FALLBACK_IPV4.to_string())
}

fn outbound_ipv4() -> Option<Ipv4Addr> {
    let socket = UdpSocket::bind("0.0.0.0:0").ok()?;
    socket.connect(ROUTE_PROBE_ADDR).ok()?;

    match socket.local_addr().ok()? {
        SocketAddr::V4(addr) if !addr.ip().is_unspecified() => Some(*addr.ip()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_ipv4_is_an_address() {
        let ip = local_ipv4();
        let parsed: Ipv4Addr = ip.parse().unwrap();
        assert!(!parsed.is_unspecified());
    }
}
