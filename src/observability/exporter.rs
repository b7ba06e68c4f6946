//! OpenTelemetry span exporter that writes OTLP JSON lines to disk.
//!
//! Every exported batch becomes one line holding a complete
//! `{"resourceSpans": [...]}` document, so the file can be replayed into any
//! OTLP-aware viewer one line at a time.

use super::file_writer::RotatingWriter;
use futures_util::future::BoxFuture;
use opentelemetry::trace::{SpanId, SpanKind, Status, TraceError};
use opentelemetry::{KeyValue, Value};
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use serde_json::{json, Value as JsonValue};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

/// Instrumentation scope name recorded on every batch.
pub const SCOPE_NAME: &str = "world-cuisines";

/// Writes span batches as OTLP JSON lines.
pub struct OtlpFileExporter {
    writer: RotatingWriter,
    resource: Resource,
    stopped: bool,
}

impl OtlpFileExporter {
    pub fn new(writer: RotatingWriter, resource: Resource) -> Self {
        Self {
            writer,
            resource,
            stopped: false,
        }
    }

    /// Renders a batch as one OTLP JSON document.
    pub fn batch_document(&self, batch: &[SpanData]) -> JsonValue {
        json!({
            "resourceSpans": [{
                "resource": {
                    "attributes": self
                        .resource
                        .iter()
                        .map(|(key, value)| attribute(key.as_str(), value))
                        .collect::<Vec<_>>(),
                },
                "scopeSpans": [{
                    "scope": { "name": SCOPE_NAME },
                    "spans": batch.iter().map(span_document).collect::<Vec<_>>(),
                }],
            }],
        })
    }
}

impl SpanExporter for OtlpFileExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        let outcome = if self.stopped {
            Err(TraceError::from("exporter already shut down"))
        } else {
            let line = self.batch_document(&batch).to_string();
            self.writer
                .write_line(&line)
                .map_err(|e| TraceError::from(e.to_string()))
        };
        Box::pin(std::future::ready(outcome))
    }

    fn shutdown(&mut self) {
        self.stopped = true;
    }

    fn set_resource(&mut self, resource: &Resource) {
        self.resource = resource.clone();
    }
}

impl std::fmt::Debug for OtlpFileExporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OtlpFileExporter")
            .field("writer", &self.writer)
            .field("stopped", &self.stopped)
            .finish_non_exhaustive()
    }
}

/// Builds a tracer provider that exports every span synchronously to `path`.
pub fn file_tracer_provider(path: PathBuf, resource: Resource) -> TracerProvider {
    let exporter = OtlpFileExporter::new(RotatingWriter::new(path), resource.clone());

    TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}

fn unix_nanos(time: SystemTime) -> String {
    time.duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default()
        .to_string()
}

fn span_document(span: &SpanData) -> JsonValue {
    let parent = if span.parent_span_id == SpanId::INVALID {
        String::new()
    } else {
        format!("{:016x}", span.parent_span_id)
    };
    let (code, message) = match &span.status {
        Status::Unset => (0, String::new()),
        Status::Ok => (1, String::new()),
        Status::Error { description } => (2, description.to_string()),
    };
    let kind = match span.span_kind {
        SpanKind::Internal => 1,
        SpanKind::Server => 2,
        SpanKind::Client => 3,
        SpanKind::Producer => 4,
        SpanKind::Consumer => 5,
    };

    json!({
        "traceId": format!("{:032x}", span.span_context.trace_id()),
        "spanId": format!("{:016x}", span.span_context.span_id()),
        "parentSpanId": parent,
        "name": span.name,
        "kind": kind,
        "startTimeUnixNano": unix_nanos(span.start_time),
        "endTimeUnixNano": unix_nanos(span.end_time),
        "attributes": attributes(&span.attributes),
        "events": span.events.iter().map(|event| json!({
            "timeUnixNano": unix_nanos(event.timestamp),
            "name": event.name,
            "attributes": attributes(&event.attributes),
        })).collect::<Vec<_>>(),
        "links": span.links.iter().map(|link| json!({
            "traceId": format!("{:032x}", link.span_context.trace_id()),
            "spanId": format!("{:016x}", link.span_context.span_id()),
            "attributes": attributes(&link.attributes),
        })).collect::<Vec<_>>(),
        "status": { "code": code, "message": message },
    })
}

fn attributes(pairs: &[KeyValue]) -> Vec<JsonValue> {
    pairs
        .iter()
        .map(|kv| attribute(kv.key.as_str(), &kv.value))
        .collect()
}

fn attribute(key: &str, value: &Value) -> JsonValue {
    let value = match value {
        Value::Bool(b) => json!({ "boolValue": b }),
        Value::I64(i) => json!({ "intValue": i.to_string() }),
        Value::F64(f) => json!({ "doubleValue": f }),
        Value::String(s) => json!({ "stringValue": s.as_str() }),
        Value::Array(_) => json!({ "stringValue": value.to_string() }),
    };
    json!({ "key": key, "value": value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_batch_carries_resource_and_scope() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = OtlpFileExporter::new(
            RotatingWriter::new(dir.path().join("t.json")),
            Resource::new(vec![KeyValue::new("service.name", "world-cuisines")]),
        );

        let doc = exporter.batch_document(&[]);
        let resource_spans = &doc["resourceSpans"][0];

        assert_eq!(resource_spans["scopeSpans"][0]["scope"]["name"], SCOPE_NAME);
        assert!(resource_spans["resource"]["attributes"]
            .as_array()
            .unwrap()
            .iter()
            .any(|a| a["key"] == "service.name" && a["value"]["stringValue"] == "world-cuisines"));
    }

    #[test]
    fn attribute_values_use_otlp_shapes() {
        assert_eq!(
            attribute("count", &Value::I64(3)),
            json!({ "key": "count", "value": { "intValue": "3" } })
        );
        assert_eq!(
            attribute("ok", &Value::Bool(true)),
            json!({ "key": "ok", "value": { "boolValue": true } })
        );
    }
}
