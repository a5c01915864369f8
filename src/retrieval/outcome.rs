//! Per-side outcome lifecycle and the comparison session
//!
//! A side's outcome moves Pending → Success | Failure exactly once per
//! query; it never reverts and never transitions again without a new
//! dispatch. The session is the only shared state between dispatcher and
//! presentation, and only the dispatcher writes it.

use crate::retrieval::types::{GraphPayload, VectorPayload};

/// Resolution state of one retrieval call for the active query
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    /// Call dispatched, no response yet
    Pending,
    /// 2xx response with a well-formed payload
    Success { payload: T, elapsed_ms: u64 },
    /// Non-2xx status, transport failure, or malformed body
    Failure { message: String },
}

impl<T> Outcome<T> {
    pub fn is_pending(&self) -> bool {
        matches!(self, Outcome::Pending)
    }

    /// Success or Failure — the side will not change again this query
    pub fn is_terminal(&self) -> bool {
        !self.is_pending()
    }
}

/// State of the currently active query and its two outcomes
///
/// `begin` replaces the whole session in one call: the presentation layer
/// can never observe the new query next to a stale outcome. The generation
/// counter tags each dispatched call pair so late results from a superseded
/// query are identifiable and discardable.
#[derive(Debug)]
pub struct Session {
    query: String,
    generation: u64,
    vector: Outcome<VectorPayload>,
    graph: Outcome<GraphPayload>,
}

impl Session {
    /// Idle session: no query yet, nothing in flight
    pub fn idle() -> Self {
        Session {
            query: String::new(),
            generation: 0,
            vector: Outcome::Pending,
            graph: Outcome::Pending,
        }
    }

    /// Atomically replace the session for a new query
    ///
    /// Sets the query, bumps the generation, and resets BOTH outcomes to
    /// Pending. Returns the new generation for tagging the call pair.
    pub fn begin(&mut self, query: &str) -> u64 {
        self.query = query.to_string();
        self.generation += 1;
        self.vector = Outcome::Pending;
        self.graph = Outcome::Pending;
        self.generation
    }

    /// Return to idle; bumps the generation so in-flight results die
    pub fn reset(&mut self) {
        self.query.clear();
        self.generation += 1;
        self.vector = Outcome::Pending;
        self.graph = Outcome::Pending;
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_idle(&self) -> bool {
        self.query.is_empty()
    }

    /// True exactly while at least one side is still pending for the
    /// current query
    pub fn is_loading(&self) -> bool {
        !self.is_idle() && (self.vector.is_pending() || self.graph.is_pending())
    }

    pub fn vector(&self) -> &Outcome<VectorPayload> {
        &self.vector
    }

    pub fn graph(&self) -> &Outcome<GraphPayload> {
        &self.graph
    }

    /// Resolve the vector side. Returns false if the side already reached
    /// a terminal outcome this generation (the write is refused).
    pub(crate) fn resolve_vector(&mut self, outcome: Outcome<VectorPayload>) -> bool {
        if self.vector.is_terminal() {
            return false;
        }
        self.vector = outcome;
        true
    }

    /// Resolve the graph side; same single-write rule as the vector side.
    pub(crate) fn resolve_graph(&mut self, outcome: Outcome<GraphPayload>) -> bool {
        if self.graph.is_terminal() {
            return false;
        }
        self.graph = outcome;
        true
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::idle()
    }
}
