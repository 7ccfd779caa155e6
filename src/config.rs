//! Environment-driven configuration.
//!
//! All settings come from environment variables (a `.env` file is loaded
//! by the binary via dotenv before this runs).

use std::error::Error;

use crate::parser::Endpoint;

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings for talking to the metadata server.
#[derive(Debug, Clone)]
pub struct Config {
    /// URL scheme, "http" or "https".
    pub scheme: String,
    /// Server host, as a parsed endpoint (hostname or IP, optional port).
    pub server_host: Endpoint,
    /// Optional User-Agent override.
    pub user_agent: Option<String>,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// Skip TLS peer verification (for self-signed test servers).
    pub disable_peer_verification: bool,
}

impl Config {
    /// Build a [`Config`] from environment variables.
    ///
    /// * `SERVER_PROTOCOL` - "http" or "https" (default "https")
    /// * `SERVER_HOST` - endpoint text, e.g. "vpn.example.net:443" (default "localhost")
    /// * `USER_AGENT` - optional User-Agent override
    /// * `SERVER_TIMEOUT_SECS` - request timeout (default 30)
    /// * `DISABLE_PEER_VERIFICATION` - "true" to accept invalid certs
    pub fn from_env() -> Result<Config, Box<dyn Error>> {
        let scheme = std::env::var("SERVER_PROTOCOL").unwrap_or_else(|_| "https".to_string());
        if scheme != "http" && scheme != "https" {
            return Err(format!("Unsupported server protocol: {scheme}").into());
        }

        let host = std::env::var("SERVER_HOST").unwrap_or_else(|_| "localhost".to_string());
        let server_host: Endpoint = host
            .parse()
            .map_err(|e| format!("Invalid SERVER_HOST {host:?}: {e}"))?;

        let user_agent = std::env::var("USER_AGENT").ok().filter(|ua| {
            if ua.is_empty() {
                log::warn!("Empty user agent specified, using the client default");
                false
            } else {
                true
            }
        });

        let timeout_secs = match std::env::var("SERVER_TIMEOUT_SECS") {
            Ok(value) => value
                .parse()
                .map_err(|e| format!("Invalid SERVER_TIMEOUT_SECS {value:?}: {e}"))?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        let disable_peer_verification = std::env::var("DISABLE_PEER_VERIFICATION")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(false);
        if disable_peer_verification {
            log::warn!("Peer verification disabled: connection security is reduced");
        }

        Ok(Config {
            scheme,
            server_host,
            user_agent,
            timeout_secs,
            disable_peer_verification,
        })
    }

    /// The base URL for server requests.
    pub fn base_url(&self) -> String {
        format!("{}://{}", self.scheme, self.server_host)
    }
}
