//! HTTP clients for the two retrieval backends
//!
//! Both backends are opaque GET endpoints taking a `query` parameter. Every
//! request carries a fresh cache-busting token and no-store semantics so
//! intermediate layers never serve a previous query's result.

use serde::de::DeserializeOwned;

use crate::retrieval::transport::{SyncTransport, Transport, TransportError};
use crate::retrieval::types::{GraphPayload, VectorPayload};

/// Per-side failure, rendered verbatim in that side's error banner
#[derive(Debug, Clone, thiserror::Error)]
pub enum RetrievalError {
    /// Non-2xx HTTP response
    #[error("API error: {0}")]
    Api(u16),

    /// Transport failure reaching the backend
    #[error("{0}")]
    Network(String),

    /// 2xx response whose body is not the expected payload shape
    #[error("invalid payload: {0}")]
    Format(String),
}

impl From<TransportError> for RetrievalError {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::Http { status, .. } => RetrievalError::Api(status),
            TransportError::Network(msg) => RetrievalError::Network(msg),
            TransportError::Io(msg) => RetrievalError::Network(msg),
        }
    }
}

/// Client over both retrieval endpoints
///
/// Cheap to share across the worker threads; holds no per-query state.
#[derive(Debug)]
pub struct RetrievalClient {
    transport: Transport,
    vector_url: String,
    graph_url: String,
}

impl RetrievalClient {
    pub fn new(transport: Transport, vector_url: String, graph_url: String) -> Self {
        Self {
            transport,
            vector_url,
            graph_url,
        }
    }

    /// Fetch the vector-similarity side for `query`
    pub fn fetch_vector(&self, query: &str) -> Result<VectorPayload, RetrievalError> {
        self.fetch(&self.vector_url, query)
    }

    /// Fetch the graph-augmented side for `query`
    pub fn fetch_graph(&self, query: &str) -> Result<GraphPayload, RetrievalError> {
        self.fetch(&self.graph_url, query)
    }

    fn fetch<T: DeserializeOwned>(&self, url: &str, query: &str) -> Result<T, RetrievalError> {
        let token = cache_bust_token();
        let body = self.transport.get_json(
            url,
            &[("query", query), ("t", &token)],
            &[("Cache-Control", "no-store")],
        )?;
        serde_json::from_str(&body).map_err(|e| RetrievalError::Format(e.to_string()))
    }
}

/// Fresh token per request; defeats intermediate caches
fn cache_bust_token() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};

    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    format!("{}", nanos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::retrieval::transport_fake::FakeTransport;

    const VECTOR_BODY: &str = r#"{
        "query": "What is diabetes?",
        "summary": "A chronic condition.",
        "vectorResults": [{"score": "0.91", "text": "Diabetes is..."}]
    }"#;

    const GRAPH_BODY: &str = r#"{
        "query": "What is diabetes?",
        "summary": "Graph summary.",
        "cypherQuery": "MATCH (d:Disease) RETURN d",
        "cypherResultCount": 2,
        "cypherResults": [{"name": "Type 1"}, {"name": "Type 2"}],
        "vectorResults": []
    }"#;

    fn client(transport: FakeTransport) -> RetrievalClient {
        RetrievalClient::new(
            Transport::Fake(transport),
            "http://test/vector-search".to_string(),
            "http://test/graphrag-search".to_string(),
        )
    }

    #[test]
    fn test_fetch_vector_success() {
        let client = client(FakeTransport::new(VECTOR_BODY));
        let payload = client.fetch_vector("What is diabetes?").unwrap();
        assert_eq!(payload.summary, "A chronic condition.");
        assert_eq!(payload.vector_results.len(), 1);
    }

    #[test]
    fn test_fetch_graph_success() {
        let client = client(FakeTransport::new(GRAPH_BODY));
        let payload = client.fetch_graph("What is diabetes?").unwrap();
        assert_eq!(payload.cypher_result_count, 2);
        assert_eq!(payload.cypher_query, "MATCH (d:Disease) RETURN d");
    }

    #[test]
    fn test_non_2xx_maps_to_api_error_with_status() {
        let client = client(FakeTransport::with_status(500));
        let err = client.fetch_vector("q").unwrap_err();
        assert!(matches!(err, RetrievalError::Api(500)));
        assert_eq!(err.to_string(), "API error: 500");
    }

    #[test]
    fn test_network_failure_keeps_raw_description() {
        let client = client(FakeTransport::with_error("connection refused"));
        let err = client.fetch_graph("q").unwrap_err();
        assert_eq!(err.to_string(), "connection refused");
    }

    #[test]
    fn test_malformed_body_is_a_format_error() {
        let client = client(FakeTransport::new("not json at all"));
        let err = client.fetch_vector("q").unwrap_err();
        assert!(matches!(err, RetrievalError::Format(_)));
    }

    #[test]
    fn test_shape_mismatch_is_a_format_error() {
        // Valid JSON, wrong shape: missing summary
        let client = client(FakeTransport::new(r#"{"query": "q", "vectorResults": []}"#));
        let err = client.fetch_vector("q").unwrap_err();
        assert!(matches!(err, RetrievalError::Format(_)));
    }

    #[test]
    fn test_request_carries_query_and_cache_bust_token() {
        let transport = FakeTransport::new(VECTOR_BODY);
        let client = RetrievalClient::new(
            Transport::Fake(transport),
            "http://test/vector-search".to_string(),
            "http://test/graphrag-search".to_string(),
        );
        client.fetch_vector("What is diabetes?").unwrap();

        let Transport::Fake(ref fake) = client.transport else {
            unreachable!()
        };
        let calls = fake.calls();
        assert_eq!(calls.len(), 1);
        assert!(calls[0].starts_with("http://test/vector-search?"));
        assert!(calls[0].contains("query=What is diabetes?"));
        assert!(calls[0].contains("&t="));
    }

    #[test]
    fn test_tokens_differ_across_requests() {
        let a = cache_bust_token();
        std::thread::sleep(std::time::Duration::from_millis(1));
        let b = cache_bust_token();
        assert_ne!(a, b);
    }
}
