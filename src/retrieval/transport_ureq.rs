//! Real HTTP transport using ureq
//!
//! Synchronous blocking HTTP client for the retrieval backends.

use crate::retrieval::transport_types::{SyncTransport, TransportError};

/// Real HTTP transport using ureq
#[derive(Debug)]
pub struct UreqTransport {
    /// Timeout in seconds for requests
    timeout: u64,
}

impl UreqTransport {
    /// Create new transport with default timeout (30s)
    pub fn new() -> Self {
        Self { timeout: 30 }
    }

    /// Create transport with custom timeout
    pub fn with_timeout(timeout_secs: u64) -> Self {
        Self {
            timeout: timeout_secs,
        }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl SyncTransport for UreqTransport {
    fn get_json(
        &self,
        url: &str,
        params: &[(&str, &str)],
        headers: &[(&str, &str)],
    ) -> Result<String, TransportError> {
        let mut request =
            ureq::get(url).timeout(std::time::Duration::from_secs(self.timeout));

        for (key, value) in params {
            request = request.query(key, value);
        }
        for (key, value) in headers {
            request = request.set(key, value);
        }

        tracing::debug!(url, timeout_secs = self.timeout, "GET");
        let response = request.call()?;

        let status = response.status();
        if !(200..300).contains(&status) {
            return Err(TransportError::Http {
                status,
                message: format!("HTTP {}", status),
            });
        }

        let body = response.into_string()?;
        Ok(body)
    }
}
