//! Transport types
//!
//! Common types shared across transport implementations.

/// Transport errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum TransportError {
    /// Network error (connection refused, timeout, etc.)
    #[error("Network error: {0}")]
    Network(String),

    /// HTTP error (non-2xx status)
    #[error("HTTP error {status}: {message}")]
    Http { status: u16, message: String },

    /// IO error while reading the response body
    #[error("IO error: {0}")]
    Io(String),
}

impl From<std::io::Error> for TransportError {
    fn from(err: std::io::Error) -> Self {
        TransportError::Io(err.to_string())
    }
}

impl From<ureq::Error> for TransportError {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::Status(code, _response) => TransportError::Http {
                status: code,
                message: format!("{}", code),
            },
            ureq::Error::Transport(err) => TransportError::Network(err.to_string()),
        }
    }
}

/// Synchronous HTTP transport
///
/// Abstraction over the HTTP client to enable testing with FakeTransport.
pub trait SyncTransport: Send + Sync {
    /// GET a JSON document and return the raw response body
    ///
    /// `params` are appended URL-encoded as the query string; `headers`
    /// are set verbatim on the request.
    fn get_json(
        &self,
        url: &str,
        params: &[(&str, &str)],
        headers: &[(&str, &str)],
    ) -> Result<String, TransportError>;
}
