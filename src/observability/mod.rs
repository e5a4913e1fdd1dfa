//! Tracing setup with optional file-based OTLP export.
//!
//! Every layer of the crate emits `tracing` spans and events. This module
//! decides where they go:
//!
//! ```text
//! tracing macros ─┬─ EnvFilter ─ fmt layer ─────────────────────────────── stderr
//!                 └─ (trace_export) OpenTelemetryLayer ─ FileSpanExporter ─ moviehub-otlp.json
//! ```
//!
//! # Level Resolution
//!
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` config option
//! 3. Default: `"warn"`
//!
//! # Export File
//!
//! With `trace_export = true`, finished spans are appended as one OTLP JSON
//! document per line to `<data_dir>/moviehub-otlp.json`. The file rotates at
//! 5 MB and keeps three backups.
//!
//! # Usage
//!
//! ```rust,no_run
//! use moviehub::observability::{init_tracing, shutdown_tracing};
//! use moviehub::Config;
//!
//! init_tracing(&Config::default());
//! tracing::debug!("tracing is now active");
//! shutdown_tracing();
//! ```

mod exporter;
mod init;

pub use init::{init_tracing, shutdown_tracing};
