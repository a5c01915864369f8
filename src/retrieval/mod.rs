//! Dual retrieval: types, transport, clients, and the dispatcher
//!
//! One query fans out to two independent backends. Each side runs on its
//! own fire-and-forget thread and reports completion over mpsc; the
//! dispatcher owns the live comparison session and discards stale results.

pub mod client;
pub mod dispatcher;
pub mod events;
pub mod outcome;
pub mod transport;
pub mod transport_fake;
pub mod transport_types;
pub mod transport_ureq;
pub mod types;
pub mod worker;

pub use client::{RetrievalClient, RetrievalError};
pub use dispatcher::Dispatcher;
pub use events::{RetrievalEvent, RetrievalReceiver, RetrievalSender, Side};
pub use outcome::{Outcome, Session};
pub use transport::Transport;
pub use transport_fake::FakeTransport;
pub use transport_types::{SyncTransport, TransportError};
pub use transport_ureq::UreqTransport;
pub use types::{GraphPayload, VectorHit, VectorPayload};
