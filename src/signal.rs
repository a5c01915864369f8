//! Query-submitted signal
//!
//! The one cross-component event: the submission surface broadcasts the
//! trimmed query text, and any number of listeners may observe it. In this
//! application exactly one listener (the dispatcher hook in the main loop)
//! is registered, but the mechanism is broadcast, not point-to-point.
//!
//! Listeners are mpsc channels, so a fault at emit time means a listener's
//! receiver is gone. The emitter reports that instead of unwinding, and the
//! submission surface keeps the user's input.

use std::sync::mpsc;

/// Payload of the query-submitted signal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuerySubmitted {
    pub query: String,
}

/// Channel sender for submitted queries
pub type SubmitSender = mpsc::Sender<QuerySubmitted>;
/// Channel receiver for submitted queries
pub type SubmitReceiver = mpsc::Receiver<QuerySubmitted>;

/// Signal emission errors
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SignalError {
    /// At least one registered listener is no longer receiving
    #[error("a query listener is no longer receiving")]
    ListenerGone,
}

/// Broadcast bus for the query-submitted signal
#[derive(Debug, Default)]
pub struct SubmitBus {
    listeners: Vec<SubmitSender>,
}

impl SubmitBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new listener and return its receiving end
    pub fn subscribe(&mut self) -> SubmitReceiver {
        let (tx, rx) = mpsc::channel();
        self.listeners.push(tx);
        rx
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Broadcast one submitted query to every listener
    ///
    /// Delivery is attempted to all listeners even if one faults; the
    /// error reports that at least one delivery failed.
    pub fn emit(&self, query: &str) -> Result<(), SignalError> {
        let mut faulted = false;
        for listener in &self.listeners {
            let sent = listener.send(QuerySubmitted {
                query: query.to_string(),
            });
            if sent.is_err() {
                faulted = true;
            }
        }
        if faulted {
            Err(SignalError::ListenerGone)
        } else {
            Ok(())
        }
    }
}
