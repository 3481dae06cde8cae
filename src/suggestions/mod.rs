mod client;
mod types;

pub use client::{SuggestionClient, WikidataClient, fetch_celebrity_suggestions};
pub use types::{SearchResponse, SearchSuggestion};
