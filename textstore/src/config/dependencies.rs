//! Dependency initialization and wiring for the textstore.

use std::env;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use crate::StoreError;
use textstore_repository::{ElasticClient, ElasticConfig, MemoryStore, QueryTemplates};
use textstore_service::{DataService, RawTextConverter};
use textstore_shared::{RawTextDocument, RawTextDto};

/// Default search service host.
const DEFAULT_ELASTICSEARCH_HOST: &str = "localhost";

/// Default search service port.
const DEFAULT_ELASTICSEARCH_PORT: u16 = 9200;

/// Default per-request timeout in milliseconds.
const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;

/// The raw text service bound to the search index backend.
pub type SearchBackedRawTextService =
    DataService<RawTextDto, RawTextDocument, RawTextConverter, Arc<ElasticClient<RawTextDocument>>>;

/// The raw text service bound to the in-memory document store.
pub type MemoryBackedRawTextService =
    DataService<RawTextDto, RawTextDocument, RawTextConverter, MemoryStore<RawTextDocument>>;

/// Container for all initialized dependencies.
pub struct Dependencies {
    /// The search index client, shared between the data service and direct
    /// search callers.
    pub search_client: Arc<ElasticClient<RawTextDocument>>,
    /// Raw text persistence backed by the search index.
    pub raw_text_service: SearchBackedRawTextService,
}

impl Dependencies {
    /// Initialize all dependencies from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `ELASTICSEARCH_HOST`: search service host (default: localhost)
    /// - `ELASTICSEARCH_PORT`: search service port (default: 9200)
    /// - `REQUEST_TIMEOUT_MS`: per-request timeout (default: 30000)
    pub async fn new() -> Result<Self, StoreError> {
        dotenv::dotenv().ok();

        let host = env::var("ELASTICSEARCH_HOST")
            .unwrap_or_else(|_| DEFAULT_ELASTICSEARCH_HOST.to_string());
        let port = read_env_number("ELASTICSEARCH_PORT", DEFAULT_ELASTICSEARCH_PORT)?;
        let timeout_ms = read_env_number("REQUEST_TIMEOUT_MS", DEFAULT_REQUEST_TIMEOUT_MS)?;

        info!(
            host = %host,
            port,
            timeout_ms,
            "Initializing dependencies"
        );

        let config = ElasticConfig::new(host, port)
            .with_request_timeout(Duration::from_millis(timeout_ms));

        let search_client =
            Arc::new(ElasticClient::new(&config, QueryTemplates::raw_text()).await?);

        let raw_text_service = DataService::new(RawTextConverter, search_client.clone());

        Ok(Self {
            search_client,
            raw_text_service,
        })
    }

    /// Build a raw text service backed by the in-memory document store,
    /// for local development and tests.
    pub fn memory_backed_raw_text_service() -> MemoryBackedRawTextService {
        DataService::new(RawTextConverter, MemoryStore::new())
    }
}

fn read_env_number<T: std::str::FromStr>(name: &str, default: T) -> Result<T, StoreError> {
    match env::var(name) {
        Ok(value) => value
            .parse()
            .map_err(|_| StoreError::config(format!("{} must be a number, got '{}'", name, value))),
        Err(_) => Ok(default),
    }
}
