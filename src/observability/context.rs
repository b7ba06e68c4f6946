//! Trace context carried across the host round trip.
//!
//! A web request leaves the plugin inside one `update` call and its reply
//! arrives in a later one. The trace and span ids of the dispatching span ride
//! along in the request context so reply handling can be parented to it.

use serde::{Deserialize, Serialize};

/// OpenTelemetry ids of the span that dispatched a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceContext {
    /// Trace id as 32 hex characters.
    pub trace_id: String,
    /// Span id as 16 hex characters.
    pub parent_span_id: String,
}

impl TraceContext {
    /// Captures the ids of the current `tracing` span.
    ///
    /// Returns `None` when no OpenTelemetry layer is installed or the span is
    /// not sampled.
    pub fn from_current() -> Option<Self> {
        use opentelemetry::trace::TraceContextExt;
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let context = tracing::Span::current().context();
        let span = context.span();
        let span_context = span.span_context();

        if !span_context.is_valid() {
            return None;
        }

        Some(Self {
            trace_id: format!("{:032x}", span_context.trace_id()),
            parent_span_id: format!("{:016x}", span_context.span_id()),
        })
    }

    /// Makes `span` a child of the captured remote span.
    ///
    /// Malformed ids are ignored and `span` keeps its local parent.
    pub fn adopt(&self, span: &tracing::Span) {
        use opentelemetry::trace::{SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState};
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let (Ok(trace_id), Ok(span_id)) = (
            TraceId::from_hex(&self.trace_id),
            SpanId::from_hex(&self.parent_span_id),
        ) else {
            tracing::debug!(trace_id = %self.trace_id, "ignoring malformed trace context");
            return;
        };

        let remote = SpanContext::new(trace_id, span_id, TraceFlags::SAMPLED, true, TraceState::default());
        span.set_parent(opentelemetry::Context::new().with_remote_span_context(remote));
    }
}
