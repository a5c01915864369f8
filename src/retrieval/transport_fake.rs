//! Fake transport for testing
//!
//! Serves fixture bodies instead of real HTTP calls. Routes match on a URL
//! substring so the vector and graph endpoints can return different
//! fixtures from one transport. Every call is recorded for assertions.

use std::sync::Mutex;

use crate::retrieval::transport_types::{SyncTransport, TransportError};

/// Fake transport for testing (uses fixture strings)
#[derive(Debug, Default)]
pub struct FakeTransport {
    /// Fallback response body when no route matches
    response_body: String,
    /// (url substring, body) routes, first match wins
    routes: Vec<(String, String)>,
    /// Error to return instead of any body (if set)
    error: Option<TransportError>,
    /// Full request lines ("url?k=v&k=v") observed, in call order
    calls: Mutex<Vec<String>>,
}

impl FakeTransport {
    /// Create fake transport with a single response body
    pub fn new(response: &str) -> Self {
        Self {
            response_body: response.to_string(),
            ..Default::default()
        }
    }

    /// Create fake transport that fails with a network error
    pub fn with_error(msg: &str) -> Self {
        Self {
            error: Some(TransportError::Network(msg.to_string())),
            ..Default::default()
        }
    }

    /// Create fake transport that fails with an HTTP status
    pub fn with_status(status: u16) -> Self {
        Self {
            error: Some(TransportError::Http {
                status,
                message: format!("HTTP {}", status),
            }),
            ..Default::default()
        }
    }

    /// Add a routed response: requests whose URL contains `fragment` get
    /// `body` instead of the fallback.
    pub fn route(mut self, fragment: &str, body: &str) -> Self {
        self.routes.push((fragment.to_string(), body.to_string()));
        self
    }

    /// URLs (with serialized params) seen so far
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("calls lock poisoned").clone()
    }
}

impl SyncTransport for FakeTransport {
    fn get_json(
        &self,
        url: &str,
        params: &[(&str, &str)],
        _headers: &[(&str, &str)],
    ) -> Result<String, TransportError> {
        let query: Vec<String> = params.iter().map(|(k, v)| format!("{}={}", k, v)).collect();
        let line = format!("{}?{}", url, query.join("&"));
        self.calls
            .lock()
            .expect("calls lock poisoned")
            .push(line.clone());

        if let Some(ref err) = self.error {
            return Err(err.clone());
        }
        for (fragment, body) in &self.routes {
            if line.contains(fragment.as_str()) {
                return Ok(body.clone());
            }
        }
        Ok(self.response_body.clone())
    }
}
