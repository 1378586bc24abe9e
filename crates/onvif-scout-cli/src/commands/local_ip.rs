//! Local-ip command implementation.

use onvif_scout_core::discovery::local_ipv4;

use crate::error::CliError;

/// Print the outbound IPv4 address of this machine
pub fn run_local_ip(json: bool) -> Result<(), CliError> {
    let ip = local_ipv4();

    if json {
        println!("{}", serde_json::json!({ "ip": ip }));
    } else {
        println!("{}", ip);
    }

    Ok(())
}
