use async_trait::async_trait;
use celebrity_status::{
    Error, Result,
    celebrity::{CelebrityClient, CelebrityResult},
    server::handlers::AppState,
    suggestions::{SearchSuggestion, SuggestionClient},
};
use std::sync::{Arc, Mutex};

/// Mock celebrity client returning a canned result per call
#[derive(Debug, Default)]
pub struct MockCelebrityClient {
    pub deceased: Option<bool>,
    pub disambiguation: Option<Vec<String>>,
    pub fail: bool,
    pub requests: Arc<Mutex<Vec<String>>>,
}

impl MockCelebrityClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_deceased(mut self, deceased: bool) -> Self {
        self.deceased = Some(deceased);
        self
    }

    pub fn with_disambiguation(mut self, titles: Vec<String>) -> Self {
        self.disambiguation = Some(titles);
        self
    }

    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    pub fn get_requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl CelebrityClient for MockCelebrityClient {
    async fn fetch_celebrity(&self, name: &str) -> CelebrityResult {
        self.requests.lock().unwrap().push(name.to_string());

        if self.fail {
            return CelebrityResult::failed(name);
        }

        CelebrityResult {
            name: name.to_string(),
            deceased: self.deceased,
            disambiguation: self.disambiguation.clone(),
            error: None,
        }
    }
}

/// Mock suggestion client
#[derive(Debug, Default)]
pub struct MockSuggestionClient {
    pub suggestions: Vec<SearchSuggestion>,
    pub error_status: Option<u16>,
    pub requests: Arc<Mutex<Vec<String>>>,
}

impl MockSuggestionClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_suggestions(mut self, suggestions: Vec<SearchSuggestion>) -> Self {
        self.suggestions = suggestions;
        self
    }

    pub fn with_error_status(mut self, status: u16) -> Self {
        self.error_status = Some(status);
        self
    }

    pub fn get_requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl SuggestionClient for MockSuggestionClient {
    async fn fetch_suggestions(&self, query: &str) -> Result<Vec<SearchSuggestion>> {
        self.requests.lock().unwrap().push(query.to_string());

        if let Some(status) = self.error_status {
            return Err(Error::Upstream {
                message: format!("Failed to fetch suggestions for {}", query),
                status,
            });
        }

        Ok(self.suggestions.clone())
    }
}

pub fn create_mock_suggestion(id: &str, label: &str, description: &str) -> SearchSuggestion {
    SearchSuggestion {
        id: id.to_string(),
        label: label.to_string(),
        description: description.to_string(),
    }
}

pub fn create_app_state(
    celebrity: MockCelebrityClient,
    suggestions: MockSuggestionClient,
) -> (AppState, Arc<MockCelebrityClient>, Arc<MockSuggestionClient>) {
    let celebrity = Arc::new(celebrity);
    let suggestions = Arc::new(suggestions);
    let state = AppState {
        celebrity: celebrity.clone(),
        suggestions: suggestions.clone(),
    };
    (state, celebrity, suggestions)
}
