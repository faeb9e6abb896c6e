//! Host resolution from multiple sources

use log::debug;

use crate::config::env;
use crate::error::{Result, VraError};

/// Host resolution with fallback logic
pub struct HostResolver;

impl HostResolver {
    /// Resolve host from multiple sources with fallback:
    /// 1. CLI argument (if provided)
    /// 2. Environment variable (VRA_HOSTNAME)
    pub fn resolve(cli_host: Option<&str>) -> Result<String> {
        if let Some(host) = cli_host {
            debug!("Using host from CLI argument: {}", host);
            return Ok(host.to_string());
        }

        match std::env::var(env::HOST) {
            Ok(host) if !host.is_empty() => {
                debug!("Using host from {} environment variable: {}", env::HOST, host);
                Ok(host)
            }
            _ => Err(VraError::HostNotFound(Self::host_not_found_message())),
        }
    }

    /// Generate helpful error message when host is not found
    fn host_not_found_message() -> String {
        format!(
            "No vRA host specified. Please provide a host using one of:\n\
             \n\
             1. CLI argument:      vractl --host <HOST>\n\
             2. Environment var:   export {}=<HOST>\n",
            env::HOST
        )
    }
}
