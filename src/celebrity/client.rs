use super::types::{CelebrityResult, PageSummary};
use crate::{
    Error, Result,
    config::{HttpConfig, WikipediaConfig},
    http,
};
use async_trait::async_trait;
use reqwest::Url;
use tracing::{debug, warn};

#[async_trait]
pub trait CelebrityClient: Send + Sync {
    /// Looks up `name`. Failures are reported through [`CelebrityResult::error`].
    async fn fetch_celebrity(&self, name: &str) -> CelebrityResult;
}

/// Celebrity lookups against the Wikipedia REST page summary endpoint.
#[derive(Debug, Clone)]
pub struct WikipediaClient {
    client: reqwest::Client,
    summary_url: Url,
}

impl WikipediaClient {
    pub fn new(config: &WikipediaConfig, http_config: &HttpConfig) -> Result<Self> {
        Self::with_client(http::build_client(http_config)?, &config.summary_url)
    }

    pub fn with_client(client: reqwest::Client, summary_url: &str) -> Result<Self> {
        Ok(Self {
            client,
            summary_url: http::parse_endpoint(summary_url)?,
        })
    }

    /// Summary URL for `name`, which is percent-encoded as a single path segment.
    pub fn summary_url_for(&self, name: &str) -> Result<Url> {
        let mut url = self.summary_url.clone();
        url.path_segments_mut()
            .map_err(|_| Error::internal("summary URL cannot be a base"))?
            .pop_if_empty()
            .push(name);
        Ok(url)
    }

    async fn fetch_summary(&self, name: &str) -> Result<PageSummary> {
        let url = self.summary_url_for(name)?;
        debug!("Fetching page summary: {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::upstream(
                format!("Failed to fetch data for {}", name),
                status,
            ));
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait]
impl CelebrityClient for WikipediaClient {
    async fn fetch_celebrity(&self, name: &str) -> CelebrityResult {
        match self.fetch_summary(name).await {
            Ok(summary) => {
                let result = CelebrityResult::from_summary(name, summary);
                debug!(
                    "Resolved '{}': deceased={:?}, disambiguation={}",
                    name,
                    result.deceased,
                    result.disambiguation.as_ref().map_or(0, Vec::len)
                );
                result
            }
            Err(e) => {
                warn!("Celebrity lookup for '{}' failed: {}", name, e);
                CelebrityResult::failed(name)
            }
        }
    }
}

/// Looks up `name` against the public Wikipedia endpoint.
pub async fn fetch_celebrity_data(name: &str) -> CelebrityResult {
    match WikipediaClient::new(&WikipediaConfig::default(), &HttpConfig::default()) {
        Ok(client) => client.fetch_celebrity(name).await,
        Err(e) => {
            warn!("Could not build Wikipedia client: {}", e);
            CelebrityResult::failed(name)
        }
    }
}
