//! Retrieval worker threads
//!
//! Spawns one fire-and-forget thread per side. Each thread does ONLY
//! HTTP I/O and sends exactly one event back to the main thread; all state
//! lives on the main thread. Workers are never cancelled: a superseded
//! worker finishes on its own and its event dies at the dispatcher's
//! generation guard.

use std::sync::Arc;
use std::thread;
use std::time::Instant;

use crate::retrieval::client::RetrievalClient;
use crate::retrieval::events::{RetrievalEvent, RetrievalSender};

/// Spawn the two per-side workers for one dispatched query
///
/// Both threads start in the same synchronous turn; neither waits on the
/// other, and their completion order is unconstrained.
pub fn spawn_retrieval_workers(
    client: Arc<RetrievalClient>,
    query: String,
    generation: u64,
    tx: RetrievalSender,
) {
    {
        let client = Arc::clone(&client);
        let query = query.clone();
        let tx = tx.clone();
        thread::spawn(move || {
            let start = Instant::now();
            let result = client.fetch_vector(&query);
            let elapsed_ms = start.elapsed().as_millis() as u64;
            // Receiver gone means the app is shutting down; nothing to do
            let _ = tx.send(RetrievalEvent::Vector {
                generation,
                elapsed_ms,
                result,
            });
        });
    }

    thread::spawn(move || {
        let start = Instant::now();
        let result = client.fetch_graph(&query);
        let elapsed_ms = start.elapsed().as_millis() as u64;
        let _ = tx.send(RetrievalEvent::Graph {
            generation,
            elapsed_ms,
            result,
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::retrieval::transport::Transport;
    use crate::retrieval::transport_fake::FakeTransport;
    use std::sync::mpsc;
    use std::time::Duration;

    const VECTOR_BODY: &str = r#"{"query": "q", "summary": "v", "vectorResults": []}"#;
    const GRAPH_BODY: &str = r#"{
        "query": "q", "summary": "g", "cypherQuery": "MATCH (n) RETURN n",
        "cypherResultCount": 0, "cypherResults": [], "vectorResults": []
    }"#;

    #[test]
    fn test_workers_send_one_event_per_side() {
        let transport = FakeTransport::new("")
            .route("vector-search", VECTOR_BODY)
            .route("graphrag-search", GRAPH_BODY);
        let client = Arc::new(RetrievalClient::new(
            Transport::Fake(transport),
            "http://test/vector-search".to_string(),
            "http://test/graphrag-search".to_string(),
        ));
        let (tx, rx) = mpsc::channel();

        spawn_retrieval_workers(client, "q".to_string(), 1, tx);

        let first = rx.recv_timeout(Duration::from_secs(5)).unwrap();
        let second = rx.recv_timeout(Duration::from_secs(5)).unwrap();
        // One event per side, order unconstrained
        let mut sides = [first.side(), second.side()];
        sides.sort_by_key(|s| s.label());
        assert_eq!(sides[0].label(), "graph");
        assert_eq!(sides[1].label(), "vector");
        assert_eq!(first.generation(), 1);
        assert_eq!(second.generation(), 1);
        // No third event
        assert!(rx.recv_timeout(Duration::from_millis(100)).is_err());
    }
}
