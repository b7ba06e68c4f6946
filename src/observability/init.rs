//! Subscriber setup: `EnvFilter` plus an OpenTelemetry layer backed by the
//! OTLP file exporter.

use super::exporter;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Service name recorded on every exported span.
pub const SERVICE_NAME: &str = "world-cuisines";

/// File name of the active trace file inside the data directory.
pub const TRACE_FILE: &str = "world-cuisines-otlp.json";

/// Installs the global tracing subscriber.
///
/// Spans are filtered by `config.trace_level` (default `"info"`) and
/// exported to `<data dir>/world-cuisines-otlp.json`, rotated at 10 MB with
/// three backups.
///
/// Observability is best effort: if the data directory cannot be created
/// the function returns without installing anything, and a second call is a
/// no-op because the global subscriber is already set.
///
/// # Example
///
/// ```rust,no_run
/// use world_cuisines::observability::init_tracing;
/// use world_cuisines::Config;
///
/// init_tracing(&Config::default());
/// tracing::info!("tracing ready");
/// ```
pub fn init_tracing(config: &Config) {
    let directive = config.trace_level.as_deref().unwrap_or("info");

    let data_dir = crate::infrastructure::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![KeyValue::new("service.name", SERVICE_NAME)]);
    let provider = exporter::file_tracer_provider(data_dir.join(TRACE_FILE), resource);
    let tracer = provider.tracer(SERVICE_NAME);

    let _ = tracing_subscriber::registry()
        .with(EnvFilter::new(directive))
        .with(OpenTelemetryLayer::new(tracer))
        .try_init();
}
