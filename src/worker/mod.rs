//! Background worker for bookmark persistence.
//!
//! Mutations on the bookmark store are applied in memory immediately and then
//! handed to this worker, which rewrites the persisted collection off the async
//! runtime's core threads.
//!
//! # Architecture
//!
//! - `messages`: Request/response protocol types with trace context propagation
//! - `handler`: Worker implementation and message processing logic

pub mod handler;
pub mod messages;

pub use handler::PersistenceWorker;
pub use messages::{TraceContext, WorkerMessage, WorkerResponse};
