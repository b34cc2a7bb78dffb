//! Configuration for the search index client.

use std::time::Duration;

/// Connection settings for the search index service.
#[derive(Debug, Clone)]
pub struct ElasticConfig {
    /// Host name of the search index service.
    pub host: String,
    /// Port of the search index service.
    pub port: u16,
    /// Upper bound for every HTTP request made by the client. Callers own
    /// timeout policy; this is the only cancellation mechanism in the core.
    pub request_timeout: Duration,
}

impl Default for ElasticConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 9200,
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl ElasticConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Self::default()
        }
    }

    /// Override the per-request timeout.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Base URL of the index resource for the given index name.
    pub fn index_url(&self, index: &str) -> String {
        format!("http://{}:{}/{}", self.host, self.port, index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_url_includes_host_port_and_index() {
        let config = ElasticConfig::new("search.internal", 9201);
        assert_eq!(
            config.index_url("rawtext"),
            "http://search.internal:9201/rawtext"
        );
    }
}
