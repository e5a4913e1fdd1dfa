//! Subscriber installation and teardown.

use super::exporter;
use crate::infrastructure::TRACE_FILE_NAME;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Level used when neither `RUST_LOG` nor `trace_level` is set.
const DEFAULT_LEVEL: &str = "warn";

const SERVICE_NAME: &str = "MovieHub";

/// Installs the global tracing subscriber.
///
/// Idempotent: only the first call in a process takes effect. Failure to
/// prepare the export file disables export but keeps stderr logging.
pub fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(config.trace_level.as_deref().unwrap_or(DEFAULT_LEVEL))
    });

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let otel_layer = if config.trace_export {
        let data_dir = config.data_dir();
        match std::fs::create_dir_all(&data_dir) {
            Ok(()) => {
                let resource = Resource::new(vec![KeyValue::new("service.name", SERVICE_NAME)]);
                let provider =
                    exporter::create_tracer_provider(data_dir.join(TRACE_FILE_NAME), resource);
                let tracer = provider.tracer(SERVICE_NAME);
                opentelemetry::global::set_tracer_provider(provider);
                Some(OpenTelemetryLayer::new(tracer))
            }
            Err(e) => {
                eprintln!("moviehub: trace export disabled, cannot create {}: {e}", data_dir.display());
                None
            }
        }
    } else {
        None
    };

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .with(otel_layer)
        .try_init();
}

/// Flushes and shuts down span export. A no-op when export is disabled.
pub fn shutdown_tracing() {
    opentelemetry::global::shutdown_tracer_provider();
}
