use super::types::{SearchResponse, SearchSuggestion};
use crate::{
    Error, Result,
    config::{HttpConfig, WikidataConfig},
    http,
};
use async_trait::async_trait;
use reqwest::Url;
use tracing::debug;

const SEARCH_ACTION: &str = "wbsearchentities";

// Sent with every search, after the query itself.
const FIXED_PARAMS: [(&str, &str); 4] = [
    ("language", "en"),
    ("type", "item"),
    ("format", "json"),
    ("origin", "*"),
];

#[async_trait]
pub trait SuggestionClient: Send + Sync {
    /// Entities matching `query`, in the order the search service ranks them.
    async fn fetch_suggestions(&self, query: &str) -> Result<Vec<SearchSuggestion>>;
}

/// Entity search against the Wikidata `wbsearchentities` action.
#[derive(Debug, Clone)]
pub struct WikidataClient {
    client: reqwest::Client,
    api_url: Url,
}

impl WikidataClient {
    pub fn new(config: &WikidataConfig, http_config: &HttpConfig) -> Result<Self> {
        Self::with_client(http::build_client(http_config)?, &config.api_url)
    }

    pub fn with_client(client: reqwest::Client, api_url: &str) -> Result<Self> {
        Ok(Self {
            client,
            api_url: http::parse_endpoint(api_url)?,
        })
    }

    pub fn search_url_for(&self, query: &str) -> Url {
        let mut url = self.api_url.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("action", SEARCH_ACTION);
            pairs.append_pair("search", query);
            for (key, value) in FIXED_PARAMS {
                pairs.append_pair(key, value);
            }
        }
        url
    }
}

#[async_trait]
impl SuggestionClient for WikidataClient {
    async fn fetch_suggestions(&self, query: &str) -> Result<Vec<SearchSuggestion>> {
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let url = self.search_url_for(query);
        debug!("Searching entities: {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::upstream(
                format!("Failed to fetch suggestions for {}", query),
                status,
            ));
        }

        let bytes = response.bytes().await?;
        let response: SearchResponse = serde_json::from_slice(&bytes)?;

        debug!(
            "Found {} suggestions for '{}'",
            response.search.len(),
            query
        );
        Ok(response.search)
    }
}

/// Searches the public Wikidata endpoint for `query`.
pub async fn fetch_celebrity_suggestions(query: &str) -> Result<Vec<SearchSuggestion>> {
    WikidataClient::new(&WikidataConfig::default(), &HttpConfig::default())?
        .fetch_suggestions(query)
        .await
}
