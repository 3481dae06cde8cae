use serde::{Deserialize, Serialize};

/// One entity from a Wikidata search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchSuggestion {
    pub id: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub search: Vec<SearchSuggestion>,
}
