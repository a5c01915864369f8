//! Retrieval completion events
//!
//! Events sent from the per-side worker threads to the main thread via
//! mpsc::channel. Each event is tagged with the generation of the call
//! pair that produced it; the dispatcher discards events whose generation
//! no longer matches the live session.

use std::sync::mpsc;

use crate::retrieval::client::RetrievalError;
use crate::retrieval::types::{GraphPayload, VectorPayload};

/// Channel sender for retrieval events
pub type RetrievalSender = mpsc::Sender<RetrievalEvent>;
/// Channel receiver for retrieval events
pub type RetrievalReceiver = mpsc::Receiver<RetrievalEvent>;

/// Which retrieval backend a value belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Vector,
    Graph,
}

impl Side {
    pub fn label(&self) -> &'static str {
        match self {
            Side::Vector => "vector",
            Side::Graph => "graph",
        }
    }
}

/// One side's completion for one dispatched call pair
///
/// Exactly one event per worker per dispatch. `elapsed_ms` is measured by
/// the worker from its own start instant; it is only meaningful on success.
#[derive(Debug)]
pub enum RetrievalEvent {
    Vector {
        generation: u64,
        elapsed_ms: u64,
        result: Result<VectorPayload, RetrievalError>,
    },
    Graph {
        generation: u64,
        elapsed_ms: u64,
        result: Result<GraphPayload, RetrievalError>,
    },
}

impl RetrievalEvent {
    /// Generation of the call pair that produced this event
    pub fn generation(&self) -> u64 {
        match self {
            RetrievalEvent::Vector { generation, .. } => *generation,
            RetrievalEvent::Graph { generation, .. } => *generation,
        }
    }

    pub fn side(&self) -> Side {
        match self {
            RetrievalEvent::Vector { .. } => Side::Vector,
            RetrievalEvent::Graph { .. } => Side::Graph,
        }
    }
}
