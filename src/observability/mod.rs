//! OpenTelemetry tracing with file-based OTLP export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → opentelemetry_sdk → OtlpFileExporter → rotating JSON lines
//! ```
//!
//! - [`init`]: Subscriber installation (`init_tracing`)
//! - [`exporter`]: OTLP JSON span exporter and tracer provider
//! - [`file_writer`]: Size-rotated line writer
//! - [`context`]: Trace ids carried through web request contexts
//!
//! The trace level comes from the `trace_level` plugin option and defaults to
//! `"info"`. Traces land in `~/.local/share/zellij/world-cuisines/`.

pub mod context;
pub mod exporter;
pub mod file_writer;
pub mod init;

pub use context::TraceContext;
pub use init::init_tracing;
