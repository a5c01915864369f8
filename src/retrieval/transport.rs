//! HTTP transport seam for the retrieval clients

pub use crate::retrieval::transport_fake::FakeTransport;
pub use crate::retrieval::transport_types::{SyncTransport, TransportError};
pub use crate::retrieval::transport_ureq::UreqTransport;

/// Concrete transport enum
///
/// Wraps all transport types, avoiding dyn compatibility issues.
#[derive(Debug)]
pub enum Transport {
    Real(UreqTransport),
    Fake(FakeTransport),
}

impl SyncTransport for Transport {
    fn get_json(
        &self,
        url: &str,
        params: &[(&str, &str)],
        headers: &[(&str, &str)],
    ) -> Result<String, TransportError> {
        match self {
            Transport::Real(t) => t.get_json(url, params, headers),
            Transport::Fake(t) => t.get_json(url, params, headers),
        }
    }
}

impl Default for Transport {
    fn default() -> Self {
        Transport::Real(UreqTransport::new())
    }
}
