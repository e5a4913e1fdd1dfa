//! Persistence worker message types.
//!
//! This module defines the request and response protocol between the bookmark
//! store and the background worker that writes to disk. It also carries the
//! distributed tracing context across the thread boundary.

use crate::storage::models::BookmarkRecord;
use tokio::sync::oneshot;

/// Distributed tracing context for cross-thread span propagation.
///
/// Captures the current trace and span IDs from OpenTelemetry so the write
/// performed on the worker thread is linked to the mutation that queued it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceContext {
    /// OpenTelemetry trace ID as a hex string.
    pub trace_id: String,

    /// Parent span ID for linking spans across threads.
    pub parent_span_id: String,
}

impl TraceContext {
    /// Creates a trace context from the current tracing span.
    ///
    /// Returns `None` if the current span context is invalid, which is the case
    /// whenever OpenTelemetry export is disabled.
    pub fn from_current() -> Option<Self> {
        use opentelemetry::trace::TraceContextExt;
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let span = tracing::Span::current();

        let otel_context = span.context();
        let span_ref = otel_context.span();
        let span_context = span_ref.span_context();

        if span_context.is_valid() {
            Some(Self {
                trace_id: format!("{:032x}", span_context.trace_id()),
                parent_span_id: format!("{:016x}", span_context.span_id()),
            })
        } else {
            None
        }
    }
}

/// Generates constructors that attach the current trace context.
macro_rules! worker_message_builders {
    (
        $(
            $builder_name:ident($variant:ident { $($field:ident: $ty:ty),* $(,)? })
        ),* $(,)?
    ) => {
        impl WorkerMessage {
            $(
                #[doc = concat!("Create a ", stringify!($variant), " message with current trace context")]
                pub fn $builder_name($($field: $ty),*) -> Self {
                    Self::$variant {
                        $($field,)*
                        trace_context: TraceContext::from_current(),
                    }
                }
            )*
        }
    };
}

worker_message_builders! {
    save_bookmarks(SaveBookmarks { bookmarks: Vec<BookmarkRecord> }),
    flush(Flush { done: oneshot::Sender<()> }),
}

/// Messages sent from the bookmark store to the worker.
#[derive(Debug)]
pub enum WorkerMessage {
    /// Replace the persisted collection with this snapshot.
    SaveBookmarks {
        /// Full collection in insertion order.
        bookmarks: Vec<BookmarkRecord>,

        /// Trace context for linking spans across threads.
        trace_context: Option<TraceContext>,
    },

    /// Signal `done` once every earlier message has been handled.
    Flush {
        done: oneshot::Sender<()>,

        /// Trace context for linking spans across threads.
        trace_context: Option<TraceContext>,
    },
}

impl WorkerMessage {
    /// Returns the trace context attached to the message, if any.
    #[must_use]
    pub fn trace_context(&self) -> Option<&TraceContext> {
        match self {
            Self::SaveBookmarks { trace_context, .. } | Self::Flush { trace_context, .. } => {
                trace_context.as_ref()
            }
        }
    }
}

/// Outcome of handling one [`WorkerMessage`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkerResponse {
    /// The collection was written.
    BookmarksSaved {
        /// Number of bookmarks in the written collection.
        count: usize,
    },

    /// All earlier messages have been handled.
    Flushed,

    /// An error occurred during the worker operation.
    Error {
        /// Human-readable error message.
        message: String,
    },
}
