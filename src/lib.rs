//! ragdiff: side-by-side comparison of two retrieval strategies
//!
//! Submits one natural-language query to a vector-similarity backend and a
//! knowledge-graph-augmented backend, tracks each call's lifecycle
//! independently (pending, success with latency, failure), and renders a
//! unified comparison in the terminal.

pub mod cli;
pub mod config;
pub mod retrieval;
pub mod signal;
pub mod ui;

pub use config::Config;
pub use retrieval::{
    Dispatcher, GraphPayload, Outcome, RetrievalClient, RetrievalError, Session, Side, VectorHit,
    VectorPayload,
};
pub use signal::{QuerySubmitted, SubmitBus};
