use crate::{Error, Result, config::HttpConfig};
use reqwest::Url;

/// Builds the shared outbound client. No timeout or retry policy is applied.
pub fn build_client(config: &HttpConfig) -> Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .user_agent(config.user_agent.as_str())
        .build()?;
    Ok(client)
}

/// Parses an endpoint URL that further path segments or query pairs are appended to.
pub fn parse_endpoint(value: &str) -> Result<Url> {
    let url = Url::parse(value)
        .map_err(|e| Error::config(format!("Invalid endpoint URL '{}': {}", value, e)))?;

    if url.cannot_be_a_base() {
        return Err(Error::config(format!(
            "Endpoint URL '{}' cannot be used as a base",
            value
        )));
    }

    Ok(url)
}
