use crate::formula::token::Token;
use crate::suggest::source::SuggestionSource;
use crate::suggest::filter_by_name;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::{self, JoinHandle};
use tracing::{debug, warn};

/// A debounced query stamped with a monotonic sequence number so late
/// responses from superseded requests can be discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub seq: u64,
    pub query: String,
}

/// Filtered lookup result for one request.
#[derive(Debug, Clone, PartialEq)]
pub struct SuggestionBatch {
    pub seq: u64,
    pub query: String,
    pub items: Vec<Token>,
}

/// Background thread servicing suggestion lookups so the event loop never
/// blocks on the network. A fetch failure is logged and degraded to an empty
/// batch; the input flow stays interactive.
pub struct SuggestionWorker {
    requests: Option<Sender<SearchRequest>>,
    batches: Receiver<SuggestionBatch>,
    handle: Option<JoinHandle<()>>,
}

impl SuggestionWorker {
    pub fn spawn<S>(source: S) -> Self
    where
        S: SuggestionSource + Send + 'static,
    {
        let (request_tx, request_rx) = mpsc::channel::<SearchRequest>();
        let (batch_tx, batch_rx) = mpsc::channel::<SuggestionBatch>();

        let handle = thread::spawn(move || {
            while let Ok(request) = request_rx.recv() {
                debug!(seq = request.seq, query = %request.query, "fetching suggestions");
                let items = match source.fetch() {
                    Ok(entities) => filter_by_name(entities, &request.query),
                    Err(err) => {
                        warn!(seq = request.seq, error = %err, "suggestion fetch failed");
                        Vec::new()
                    }
                };
                let batch = SuggestionBatch {
                    seq: request.seq,
                    query: request.query,
                    items,
                };
                if batch_tx.send(batch).is_err() {
                    break;
                }
            }
        });

        Self {
            requests: Some(request_tx),
            batches: batch_rx,
            handle: Some(handle),
        }
    }

    pub fn submit(&self, request: SearchRequest) {
        if let Some(tx) = &self.requests {
            if tx.send(request).is_err() {
                warn!("suggestion worker is gone; dropping request");
            }
        }
    }

    pub fn try_recv(&self) -> Option<SuggestionBatch> {
        self.batches.try_recv().ok()
    }

    /// Block for the next batch; used by tests that drive the worker
    /// without an event loop.
    pub fn recv_timeout(&self, timeout: std::time::Duration) -> Option<SuggestionBatch> {
        self.batches.recv_timeout(timeout).ok()
    }
}

impl Drop for SuggestionWorker {
    fn drop(&mut self) {
        // Closing the request channel lets the thread finish its loop.
        self.requests.take();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}
