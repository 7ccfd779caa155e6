//! HTTP+JSON metadata client.
//!
//! A thin transport wrapper: fetch a flat JSON object of string values
//! from the server and pull out the fields callers need. No retries, no
//! session state.

use colored::Colorize;
use std::collections::HashMap;
use std::error::Error;
use std::time::Duration;

use crate::config::Config;

/// Identity reported by the metadata server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerInfo {
    /// Server software name.
    pub name: String,
    /// Major version.
    pub version_major: u32,
    /// Minor version.
    pub version_minor: u32,
}

/// Fetch the server information from `GET <base>/api/information`.
pub async fn get_server_information(config: &Config) -> Result<ServerInfo, Box<dyn Error>> {
    let url = format!("{}/api/information", config.base_url());
    let values = perform_get_request(config, &url).await?;

    let name = require_value(&values, "name")?;
    let version_major = require_value(&values, "major")?
        .parse()
        .map_err(|e| format!("Invalid server major version: {e}"))?;
    let version_minor = require_value(&values, "minor")?
        .parse()
        .map_err(|e| format!("Invalid server minor version: {e}"))?;

    log::info!("Server version is {name}/{version_major}.{version_minor}");

    Ok(ServerInfo {
        name,
        version_major,
        version_minor,
    })
}

/// Perform a GET request and decode the response as a flat map of string
/// values.
async fn perform_get_request(
    config: &Config,
    url: &str,
) -> Result<HashMap<String, String>, Box<dyn Error>> {
    let mut builder = reqwest::Client::builder().timeout(Duration::from_secs(config.timeout_secs));

    if let Some(user_agent) = &config.user_agent {
        log::info!("User agent set to {user_agent:?}");
        builder = builder.user_agent(user_agent.clone());
    }

    if config.disable_peer_verification {
        builder = builder.danger_accept_invalid_certs(true);
    }

    let client = builder.build()?;

    log::debug!("Sent: GET {url}");
    let response = client
        .get(url)
        .header(reqwest::header::ACCEPT, "application/json")
        .send()
        .await?;

    let status = response.status();
    log::debug!("Received: {status} for {url}");

    if !status.is_success() {
        log::warn!(
            "{failed}: GET {url} returned {status}",
            failed = "failed".on_red()
        );
        return Err(format!("Server returned {status} for {url}").into());
    }

    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    if !content_type.starts_with("application/json") {
        return Err(format!("Unexpected content type {content_type:?} from {url}").into());
    }

    let body = response.text().await?;
    parse_values(&body)
}

/// Decode a flat JSON object whose values are all strings.
fn parse_values(json: &str) -> Result<HashMap<String, String>, Box<dyn Error>> {
    let mut deserializer = serde_json::Deserializer::from_str(json);
    let values: HashMap<String, String> = serde_path_to_error::deserialize(&mut deserializer)
        .map_err(|e| format!("Error parsing server response: path={} error={}", e.path(), e))?;
    Ok(values)
}

/// Get a required value from the decoded response.
fn require_value(
    values: &HashMap<String, String>,
    key: &str,
) -> Result<String, Box<dyn Error>> {
    values
        .get(key)
        .cloned()
        .ok_or_else(|| format!("Missing value in server response: {key}").into())
}
