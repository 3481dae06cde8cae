use celebrity_status::{
    Result,
    celebrity::WikipediaClient,
    config::{Config, WikidataConfig, WikipediaConfig},
    suggestions::WikidataClient,
};
use serde_json::{Value, json};
use tempfile::TempDir;
use tokio::fs;
use wiremock::MockServer;

pub const SUMMARY_PATH: &str = "/api/rest_v1/page/summary";
pub const SEARCH_PATH: &str = "/w/api.php";

/// Create a test configuration pointing both endpoints at `server`
pub fn create_test_config(server: &MockServer) -> Config {
    Config {
        wikipedia: WikipediaConfig {
            summary_url: format!("{}{}", server.uri(), SUMMARY_PATH),
        },
        wikidata: WikidataConfig {
            api_url: format!("{}{}", server.uri(), SEARCH_PATH),
        },
        ..Config::default()
    }
}

pub fn wikipedia_client(server: &MockServer) -> WikipediaClient {
    let config = create_test_config(server);
    WikipediaClient::new(&config.wikipedia, &config.http).expect("wikipedia client")
}

pub fn wikidata_client(server: &MockServer) -> WikidataClient {
    let config = create_test_config(server);
    WikidataClient::new(&config.wikidata, &config.http).expect("wikidata client")
}

/// Create a temporary directory for test files
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Create a test config YAML file
pub async fn create_test_config_file(dir: &TempDir, content: &str) -> Result<String> {
    let config_path = dir.path().join("config.yaml");
    fs::write(&config_path, content).await?;
    Ok(config_path.to_string_lossy().to_string())
}

pub fn standard_summary(title: &str, description: &str, extract: &str) -> Value {
    json!({
        "type": "standard",
        "title": title,
        "titles": {
            "canonical": title.replace(' ', "_"),
            "normalized": title,
            "display": title
        },
        "description": description,
        "extract": extract,
        "lang": "en"
    })
}

pub fn search_item(id: &str, label: &str, description: &str) -> Value {
    json!({
        "id": id,
        "title": id,
        "concepturi": format!("http://www.wikidata.org/entity/{}", id),
        "label": label,
        "description": description,
        "match": {"type": "label", "language": "en", "text": label}
    })
}

/// Sample configuration YAML for testing
pub const SAMPLE_CONFIG_YAML: &str = r#"
server:
  host: "127.0.0.1"
  port: 3000
  logs:
    level: "debug"
http:
  user_agent: "celebrity-status-tests/1.0 (ops@example.com)"
wikipedia:
  summary_url: "http://127.0.0.1:4000/api/rest_v1/page/summary"
wikidata:
  api_url: "http://127.0.0.1:4000/w/api.php"
"#;
