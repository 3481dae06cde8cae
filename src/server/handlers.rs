use super::types::{ErrorResponse, SuggestionQuery};
use crate::{
    celebrity::{CelebrityClient, CelebrityResult},
    suggestions::{SearchSuggestion, SuggestionClient},
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Clone)]
pub struct AppState {
    pub celebrity: Arc<dyn CelebrityClient>,
    pub suggestions: Arc<dyn SuggestionClient>,
}

/// Lookup failures are part of the body, so this always answers 200.
pub async fn celebrity(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Json<CelebrityResult> {
    info!("Received celebrity lookup for: {}", name);
    Json(state.celebrity.fetch_celebrity(&name).await)
}

pub async fn suggestions(
    State(state): State<AppState>,
    Query(query): Query<SuggestionQuery>,
) -> Result<Json<Vec<SearchSuggestion>>, (StatusCode, Json<ErrorResponse>)> {
    let query = query.q.unwrap_or_default();

    match state.suggestions.fetch_suggestions(&query).await {
        Ok(suggestions) => Ok(Json(suggestions)),
        Err(e) => {
            error!("Suggestion lookup for '{}' failed: {}", query, e);
            Err((
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            ))
        }
    }
}
