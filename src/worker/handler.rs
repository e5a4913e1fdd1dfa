//! Persistence worker implementation.
//!
//! The worker owns the key-value backend and runs on a dedicated blocking thread,
//! draining an unbounded channel. Messages are handled strictly in the order they
//! were sent, so the last snapshot sent is the one left on disk.

use crate::domain::error::Result;
use crate::storage::backend::KeyValueStore;
use crate::storage::bookmarks::BOOKMARKS_KEY;
use crate::storage::models::BookmarkRecord;
use crate::worker::{WorkerMessage, WorkerResponse};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Background writer for the bookmark collection.
pub struct PersistenceWorker {
    storage: Box<dyn KeyValueStore>,
}

impl PersistenceWorker {
    #[must_use]
    pub fn new(storage: Box<dyn KeyValueStore>) -> Self {
        Self { storage }
    }

    /// Starts the worker on the blocking thread pool.
    ///
    /// The worker stops once every sender has been dropped and the queue is
    /// drained. Must be called from within a Tokio runtime.
    pub fn spawn(self) -> (mpsc::UnboundedSender<WorkerMessage>, JoinHandle<()>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let handle = tokio::task::spawn_blocking(move || self.run(receiver));
        (sender, handle)
    }

    fn run(mut self, mut receiver: mpsc::UnboundedReceiver<WorkerMessage>) {
        tracing::debug!("persistence worker started");

        while let Some(message) = receiver.blocking_recv() {
            match self.handle_message(message) {
                WorkerResponse::Error { message } => {
                    tracing::warn!(error = %message, "persistence failed");
                }
                response => tracing::trace!(?response, "persistence message handled"),
            }
        }

        tracing::debug!("persistence worker stopped");
    }

    /// Helper for handling storage results with consistent logging.
    fn handle_db_result<T, F>(operation: &str, result: Result<T>, on_success: F) -> WorkerResponse
    where
        F: FnOnce(T) -> WorkerResponse,
    {
        match result {
            Ok(value) => {
                tracing::debug!(operation = operation, "storage operation successful");
                on_success(value)
            }
            Err(e) => {
                tracing::debug!(operation = operation, error = %e, "storage operation failed");
                WorkerResponse::Error {
                    message: format!("{operation}: {e}"),
                }
            }
        }
    }

    fn handle_save_bookmarks(&mut self, bookmarks: Vec<BookmarkRecord>) -> WorkerResponse {
        let count = bookmarks.len();

        let result = serde_json::to_value(bookmarks)
            .map_err(|e| crate::MovieHubError::Storage(format!("failed to serialize bookmarks: {e}")))
            .and_then(|value| self.storage.set(BOOKMARKS_KEY, value));

        Self::handle_db_result("save bookmarks", result, |()| {
            WorkerResponse::BookmarksSaved { count }
        })
    }

    /// Attaches the parent trace context from a message to the current thread.
    ///
    /// Returns a context guard that must be held for the duration of the operation.
    fn attach_parent_trace_context(message: &WorkerMessage) -> Option<opentelemetry::ContextGuard> {
        use opentelemetry::trace::{SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState};

        let trace_context = message.trace_context()?;

        let trace_id = TraceId::from_hex(&trace_context.trace_id).ok()?;
        let span_id = SpanId::from_hex(&trace_context.parent_span_id).ok()?;

        let span_context = SpanContext::new(
            trace_id,
            span_id,
            TraceFlags::SAMPLED,
            true,
            TraceState::default(),
        );

        let otel_context = opentelemetry::Context::current().with_remote_span_context(span_context);

        Some(otel_context.attach())
    }

    /// Processes a worker message and returns the response.
    pub fn handle_message(&mut self, message: WorkerMessage) -> WorkerResponse {
        let _context_guard = Self::attach_parent_trace_context(&message);

        let span = tracing::debug_span!("worker_handle_message");
        let _guard = span.entered();

        match message {
            WorkerMessage::SaveBookmarks { bookmarks, .. } => self.handle_save_bookmarks(bookmarks),
            WorkerMessage::Flush { done, .. } => {
                // The receiver may have given up waiting; nothing to do then.
                let _ = done.send(());
                WorkerResponse::Flushed
            }
        }
    }
}
