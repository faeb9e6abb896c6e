//! vRA token resolution from multiple sources

use log::debug;

use crate::config::env;
use crate::error::{Result, VraError};

/// Token resolution with fallback logic
pub struct TokenResolver {
    host: String,
}

impl TokenResolver {
    /// Create a new token resolver for the given host
    pub fn new(host: &str) -> Self {
        Self {
            host: host.to_string(),
        }
    }

    /// Resolve token from multiple sources with fallback:
    /// 1. CLI argument (if provided)
    /// 2. Environment variable (VRA_TOKEN)
    pub fn resolve(&self, cli_token: Option<&str>) -> Result<String> {
        if let Some(token) = cli_token {
            debug!("Using token from CLI argument");
            return Ok(token.to_string());
        }

        match std::env::var(env::TOKEN) {
            Ok(token) if !token.is_empty() => {
                debug!("Using token from {} environment variable", env::TOKEN);
                Ok(token)
            }
            _ => Err(VraError::TokenNotFound(self.token_not_found_message())),
        }
    }

    /// Generate helpful error message when token is not found
    fn token_not_found_message(&self) -> String {
        format!(
            "No API token found for host '{}'. Please provide a token using one of:\n\
             \n\
             1. CLI argument:      vractl --token <TOKEN>\n\
             2. Environment var:   export {}=<TOKEN>\n\
             3. Log in:            export {}=$(vractl --host {} login -u <USER>)\n",
            self.host,
            env::TOKEN,
            env::TOKEN,
            self.host
        )
    }
}
