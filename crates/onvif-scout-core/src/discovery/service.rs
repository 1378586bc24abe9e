//! One-shot WS-Discovery service.
//!
//! Sends a single probe from a transient endpoint and collects replies until
//! the receive window closes.

use socket2::{Domain, Protocol, Socket, Type};
use std::net::SocketAddr;
use tokio::net::{lookup_host, UdpSocket};
use tokio::time::{timeout_at, Instant};
use tracing::{debug, info, warn};

use super::record::parse_probe_match;
use crate::config::DiscoveryConfig;
use crate::error::DiscoveryError;
use crate::protocol::probe::{build_probe, new_session_token};
use crate::types::DeviceRecord;

/// Create the transient UDP endpoint a probe is sent from.
pub fn create_probe_socket(bind: SocketAddr) -> Result<std::net::UdpSocket, std::io::Error> {
    let socket = Socket::new(Domain::for_address(bind), Type::DGRAM, Some(Protocol::UDP))?;

    socket.bind(&bind.into())?;

    socket.set_nonblocking(true)?;

    Ok(socket.into())
}

/// Framework-agnostic discovery service.
pub struct DiscoveryService {
    config: DiscoveryConfig,
}

impl DiscoveryService {
    pub fn new(config: DiscoveryConfig) -> Self {
        Self { config }
    }

    /// Probe the network once and return every device that answered.
    ///
    /// Fails only if the probe cannot be sent. Once collection has started
    /// the call always succeeds, possibly with an empty list.
    pub async fn discover(&self) -> Result<Vec<DeviceRecord>, DiscoveryError> {
        info!("Starting device discovery");

        let std_socket =
            create_probe_socket(self.config.bind_addr).map_err(DiscoveryError::Bind)?;
        let socket = UdpSocket::from_std(std_socket).map_err(DiscoveryError::Bind)?;

        let probe = build_probe(&new_session_token());
        let target = self.resolve_target().await?;

        debug!("Sending probe to {}: {}", target, probe);
        socket
            .send_to(probe.as_bytes(), target)
            .await
            .map_err(DiscoveryError::Send)?;

        let devices = self.collect(&socket).await;
        info!("Discovery finished, {} device(s) found", devices.len());

        Ok(devices)
    }

    /// Resolve the probe destination, preferring the bind address family.
    async fn resolve_target(&self) -> Result<SocketAddr, DiscoveryError> {
        let addr = &self.config.multicast_addr;
        let candidates: Vec<SocketAddr> = lookup_host(addr.as_str())
            .await
            .map_err(|source| DiscoveryError::Resolve {
                addr: addr.clone(),
                source,
            })?
            .collect();

        let want_v4 = self.config.bind_addr.is_ipv4();
        candidates
            .iter()
            .find(|a| a.is_ipv4() == want_v4)
            .or_else(|| candidates.first())
            .copied()
            .ok_or_else(|| DiscoveryError::NoAddress(addr.clone()))
    }

    /// Receive replies until the window closes or the socket fails.
    async fn collect(&self, socket: &UdpSocket) -> Vec<DeviceRecord> {
        let deadline = Instant::now() + self.config.timeout();
        let mut devices = Vec::new();
        let mut buf = vec![0u8; self.config.buffer_size];

        loop {
            match timeout_at(deadline, socket.recv_from(&mut buf)).await {
                Ok(Ok((len, sender))) => {
                    debug!(
                        "Received {} bytes from {}: {}",
                        len,
                        sender,
                        String::from_utf8_lossy(&buf[..len])
                    );

                    match parse_probe_match(&buf[..len], sender, &self.config.marker) {
                        Ok(device) => {
                            debug!("Discovered {} ({})", device.xaddrs, device.name);
                            devices.push(device);
                        }
                        Err(e) => {
                            debug!("Skipping response from {}: {}", sender, e);
                        }
                    }
                }
                Ok(Err(e)) => {
                    warn!("UDP receive error, ending collection: {}", e);
                    break;
                }
                Err(_) => {
                    debug!("Receive window of {:?} elapsed", self.config.timeout());
                    break;
                }
            }
        }

        devices
    }
}

/// Discover devices with the default configuration.
pub async fn discover_devices() -> Result<Vec<DeviceRecord>, DiscoveryError> {
    DiscoveryService::new(DiscoveryConfig::default())
        .discover()
        .await
}
