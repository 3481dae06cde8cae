mod types;

pub use types::*;

use crate::{Error, Result, http};
use std::{env, path::Path};
use tracing::debug;

const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Loads configuration from `CONFIG_PATH`, or `config.yaml` when unset.
///
/// A missing default file yields the built-in defaults; a path named
/// explicitly through `CONFIG_PATH` must exist.
pub async fn load() -> Result<Config> {
    match env::var("CONFIG_PATH") {
        Ok(config_path) => load_from(&config_path).await,
        Err(_) => {
            if tokio::fs::try_exists(DEFAULT_CONFIG_PATH).await? {
                load_from(DEFAULT_CONFIG_PATH).await
            } else {
                debug!("No {} found, using defaults", DEFAULT_CONFIG_PATH);
                Ok(Config::default())
            }
        }
    }
}

pub async fn load_from(config_path: impl AsRef<Path>) -> Result<Config> {
    let config_path = config_path.as_ref();
    debug!("Loading configuration from: {}", config_path.display());

    let config_str = tokio::fs::read_to_string(config_path).await?;
    parse(&config_str)
}

/// Parses YAML configuration and checks that endpoint URLs are usable.
pub fn parse(config_str: &str) -> Result<Config> {
    // An empty document deserializes to unit rather than a mapping.
    let config: Config = if config_str.trim().is_empty() {
        Config::default()
    } else {
        serde_yaml::from_str(config_str)?
    };

    validate_url("wikipedia.summary_url", &config.wikipedia.summary_url)?;
    validate_url("wikidata.api_url", &config.wikidata.api_url)?;

    Ok(config)
}

fn validate_url(field: &str, value: &str) -> Result<()> {
    match http::parse_endpoint(value) {
        Ok(_) => Ok(()),
        Err(Error::Config(msg)) => Err(Error::config(format!("{}: {}", field, msg))),
        Err(e) => Err(e),
    }
}
