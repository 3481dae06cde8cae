pub mod handlers;
pub mod types;

use crate::{
    Result,
    celebrity::WikipediaClient,
    config::Config,
    http,
    suggestions::WikidataClient,
};
use axum::{Router, routing::get};
use handlers::AppState;
use std::{net::SocketAddr, sync::Arc};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/celebrity/:name", get(handlers::celebrity))
        .route("/api/suggestions", get(handlers::suggestions))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    // Both lookup clients share one connection pool
    let client = http::build_client(&config.http)?;
    let app_state = AppState {
        celebrity: Arc::new(WikipediaClient::with_client(
            client.clone(),
            &config.wikipedia.summary_url,
        )?),
        suggestions: Arc::new(WikidataClient::with_client(
            client,
            &config.wikidata.api_url,
        )?),
    };

    let app = router(app_state);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
