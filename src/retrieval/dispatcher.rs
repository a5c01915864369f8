//! Dual retrieval dispatcher
//!
//! Owns the single live comparison session. On each submitted query the
//! session is replaced atomically (query set, both sides Pending, fresh
//! generation) and two independent workers are started. The main loop
//! calls `pump` every tick to drain completions without blocking; events
//! from a superseded generation are discarded so a slow response to an old
//! query can never clobber a newer query's displayed result.

use std::sync::mpsc;
use std::sync::Arc;

use crate::retrieval::client::RetrievalClient;
use crate::retrieval::events::{RetrievalEvent, RetrievalReceiver, RetrievalSender};
use crate::retrieval::outcome::{Outcome, Session};
use crate::retrieval::worker::spawn_retrieval_workers;

/// Dispatcher for the two retrieval backends
///
/// Single writer of the session; the presentation layer reads it via
/// `session()` and never mutates it.
pub struct Dispatcher {
    client: Arc<RetrievalClient>,
    session: Session,
    tx: RetrievalSender,
    rx: RetrievalReceiver,
}

impl Dispatcher {
    pub fn new(client: RetrievalClient) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            client: Arc::new(client),
            session: Session::idle(),
            tx,
            rx,
        }
    }

    /// Read-only view of the live session
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Replace the session and fan the query out to both backends
    ///
    /// Never blocks: workers run on their own threads and report back
    /// through the event channel.
    pub fn dispatch(&mut self, query: &str) {
        let generation = self.session.begin(query);
        tracing::info!(generation, query, "dispatching query to both backends");
        spawn_retrieval_workers(
            Arc::clone(&self.client),
            query.to_string(),
            generation,
            self.tx.clone(),
        );
    }

    /// Return to idle; any in-flight results become stale
    pub fn clear(&mut self) {
        self.session.reset();
    }

    /// Drain all available completion events without blocking
    ///
    /// Returns the number of events applied (stale events are drained but
    /// not counted).
    pub fn pump(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.rx.try_recv() {
            if self.apply_event(event) {
                applied += 1;
            }
        }
        applied
    }

    /// Apply one completion event to the session
    ///
    /// Stale guard: the event's generation must match the live session's,
    /// and the session must not have gone idle since dispatch. A side that
    /// already resolved this generation is never overwritten.
    pub fn apply_event(&mut self, event: RetrievalEvent) -> bool {
        if self.session.is_idle() || event.generation() != self.session.generation() {
            tracing::debug!(
                side = event.side().label(),
                event_generation = event.generation(),
                live_generation = self.session.generation(),
                "discarding stale retrieval event"
            );
            return false;
        }

        match event {
            RetrievalEvent::Vector {
                result, elapsed_ms, ..
            } => {
                let outcome = match result {
                    Ok(payload) => {
                        tracing::info!(elapsed_ms, "vector side resolved");
                        Outcome::Success {
                            payload,
                            elapsed_ms,
                        }
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "vector side failed");
                        Outcome::Failure {
                            message: e.to_string(),
                        }
                    }
                };
                self.session.resolve_vector(outcome)
            }
            RetrievalEvent::Graph {
                result, elapsed_ms, ..
            } => {
                let outcome = match result {
                    Ok(payload) => {
                        tracing::info!(elapsed_ms, "graph side resolved");
                        Outcome::Success {
                            payload,
                            elapsed_ms,
                        }
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "graph side failed");
                        Outcome::Failure {
                            message: e.to_string(),
                        }
                    }
                };
                self.session.resolve_graph(outcome)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::retrieval::client::RetrievalError;
    use crate::retrieval::transport::Transport;
    use crate::retrieval::transport_fake::FakeTransport;
    use crate::retrieval::types::VectorPayload;
    use std::time::{Duration, Instant};

    const VECTOR_BODY: &str = r#"{"query": "q", "summary": "v", "vectorResults": []}"#;
    const GRAPH_BODY: &str = r#"{
        "query": "q", "summary": "g", "cypherQuery": "MATCH (n) RETURN n",
        "cypherResultCount": 0, "cypherResults": [], "vectorResults": []
    }"#;

    fn dispatcher_with(transport: FakeTransport) -> Dispatcher {
        Dispatcher::new(RetrievalClient::new(
            Transport::Fake(transport),
            "http://test/vector-search".to_string(),
            "http://test/graphrag-search".to_string(),
        ))
    }

    fn routed_dispatcher() -> Dispatcher {
        dispatcher_with(
            FakeTransport::new("")
                .route("vector-search", VECTOR_BODY)
                .route("graphrag-search", GRAPH_BODY),
        )
    }

    /// Pump until the predicate holds or the timeout elapses
    fn pump_until<F: Fn(&Session) -> bool>(dispatcher: &mut Dispatcher, pred: F) {
        let deadline = Instant::now() + Duration::from_secs(5);
        while !pred(dispatcher.session()) {
            assert!(Instant::now() < deadline, "dispatcher never settled");
            dispatcher.pump();
            std::thread::sleep(Duration::from_millis(5));
        }
    }

    fn vector_event(generation: u64) -> RetrievalEvent {
        RetrievalEvent::Vector {
            generation,
            elapsed_ms: 50,
            result: Ok(VectorPayload {
                query: "q".to_string(),
                summary: "stale".to_string(),
                vector_results: vec![],
            }),
        }
    }

    #[test]
    fn test_dispatch_resets_query_and_both_outcomes_together() {
        let mut dispatcher = routed_dispatcher();
        dispatcher.dispatch("What is diabetes?");

        let session = dispatcher.session();
        assert_eq!(session.query(), "What is diabetes?");
        assert!(session.vector().is_pending());
        assert!(session.graph().is_pending());
        assert!(session.is_loading());
    }

    #[test]
    fn test_both_sides_eventually_resolve() {
        let mut dispatcher = routed_dispatcher();
        dispatcher.dispatch("q");
        pump_until(&mut dispatcher, |s| !s.is_loading());

        assert!(matches!(
            dispatcher.session().vector(),
            Outcome::Success { payload, .. } if payload.summary == "v"
        ));
        assert!(matches!(
            dispatcher.session().graph(),
            Outcome::Success { payload, .. } if payload.summary == "g"
        ));
    }

    #[test]
    fn test_stale_generation_event_is_discarded() {
        let mut dispatcher = routed_dispatcher();
        dispatcher.dispatch("first");
        let old_generation = dispatcher.session().generation();
        dispatcher.dispatch("second");

        // Late result from the superseded pair arrives after the new dispatch
        assert!(!dispatcher.apply_event(vector_event(old_generation)));
        assert_eq!(dispatcher.session().query(), "second");

        // The live generation's result still applies normally
        let live = dispatcher.session().generation();
        assert!(dispatcher.apply_event(vector_event(live)));
    }

    #[test]
    fn test_event_after_clear_is_discarded() {
        let mut dispatcher = routed_dispatcher();
        dispatcher.dispatch("q");
        let generation = dispatcher.session().generation();
        dispatcher.clear();

        assert!(!dispatcher.apply_event(vector_event(generation)));
        assert!(dispatcher.session().is_idle());
    }

    #[test]
    fn test_side_resolves_exactly_once_per_generation() {
        let mut dispatcher = routed_dispatcher();
        dispatcher.dispatch("q");
        let generation = dispatcher.session().generation();

        assert!(dispatcher.apply_event(RetrievalEvent::Vector {
            generation,
            elapsed_ms: 10,
            result: Err(RetrievalError::Api(500)),
        }));
        // A duplicate completion for the same side is refused
        assert!(!dispatcher.apply_event(vector_event(generation)));
        assert!(matches!(
            dispatcher.session().vector(),
            Outcome::Failure { message } if message.contains("500")
        ));
    }

    #[test]
    fn test_one_side_failing_leaves_the_other_unaffected() {
        // Graph endpoint returns 500-style failure, vector succeeds
        let transport = FakeTransport::new("")
            .route("vector-search", VECTOR_BODY)
            .route("graphrag-search", "not json");
        let mut dispatcher = dispatcher_with(transport);
        dispatcher.dispatch("q");
        pump_until(&mut dispatcher, |s| !s.is_loading());

        assert!(matches!(dispatcher.session().vector(), Outcome::Success { .. }));
        assert!(matches!(dispatcher.session().graph(), Outcome::Failure { .. }));
    }

    #[test]
    fn test_http_failure_message_contains_status() {
        let mut dispatcher = dispatcher_with(FakeTransport::with_status(500));
        dispatcher.dispatch("q");
        pump_until(&mut dispatcher, |s| !s.is_loading());

        assert!(matches!(
            dispatcher.session().graph(),
            Outcome::Failure { message } if message.contains("500")
        ));
        assert!(matches!(
            dispatcher.session().vector(),
            Outcome::Failure { message } if message.contains("500")
        ));
    }

    #[test]
    fn test_success_records_elapsed_ms() {
        let mut dispatcher = routed_dispatcher();
        dispatcher.dispatch("q");
        let generation = dispatcher.session().generation();
        dispatcher.apply_event(RetrievalEvent::Vector {
            generation,
            elapsed_ms: 50,
            result: Ok(VectorPayload {
                query: "q".to_string(),
                summary: "v".to_string(),
                vector_results: vec![],
            }),
        });

        assert!(matches!(
            dispatcher.session().vector(),
            Outcome::Success { elapsed_ms: 50, .. }
        ));
    }
}
