mod client;
mod types;

pub use client::{CelebrityClient, WikipediaClient, fetch_celebrity_data};
pub use types::{CelebrityResult, PageSummary, Titles};
