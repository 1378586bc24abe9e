//! Probe command implementation.

use onvif_scout_core::protocol::{build_probe, new_session_token};

use crate::cli::ProbeArgs;
use crate::error::CliError;

/// Print the probe envelope discovery would send
pub fn run_probe(args: ProbeArgs) -> Result<(), CliError> {
    let token = match args.token {
        Some(token) if token.trim().is_empty() => {
            return Err(CliError::InvalidArgument(
                "token cannot be empty".to_string(),
            ))
        }
        Some(token) => token,
        None => new_session_token(),
    };

    println!("{}", build_probe(&token));
    Ok(())
}
