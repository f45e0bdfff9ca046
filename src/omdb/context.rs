//! Request context round-tripped through Zellij's web request API.
//!
//! Zellij echoes an arbitrary `BTreeMap<String, String>` back with every
//! `WebRequestResult`. We use it to carry which view issued the lookup, its
//! sequence number, and the OpenTelemetry ids of the span that issued it, so
//! the response handler can parent its span to the request.

use std::collections::BTreeMap;

const KEY_KIND: &str = "kind";
const KEY_VIEW: &str = "view";
const KEY_SEQ: &str = "seq";
const KEY_QUERY: &str = "query";
const KEY_ID: &str = "id";
const KEY_TRACE_ID: &str = "trace_id";
const KEY_PARENT_SPAN_ID: &str = "parent_span_id";

/// Which lookup a request was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupKind {
    /// Title-substring search for the suggestion list.
    Search { query: String },
    /// Full record for the details view.
    Details { id: String },
}

/// Tracing ids captured when a request is issued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceContext {
    /// OpenTelemetry trace id, 32 hex chars.
    pub trace_id: String,
    /// Span id of the issuing span, 16 hex chars.
    pub parent_span_id: String,
}

impl TraceContext {
    /// Captures the ids of the current tracing span.
    ///
    /// Returns `None` when no OpenTelemetry layer is installed or the span is
    /// not sampled.
    #[must_use]
    pub fn from_current() -> Option<Self> {
        use opentelemetry::trace::TraceContextExt;
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let otel_context = tracing::Span::current().context();
        let span_ref = otel_context.span();
        let span_context = span_ref.span_context();

        span_context.is_valid().then(|| Self {
            trace_id: format!("{:032x}", span_context.trace_id()),
            parent_span_id: format!("{:016x}", span_context.span_id()),
        })
    }

    /// Makes the issuing span the parent of everything under the returned guard.
    ///
    /// Returns `None` if the stored ids do not parse.
    #[must_use]
    pub fn attach(&self) -> Option<opentelemetry::ContextGuard> {
        use opentelemetry::trace::{
            SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState,
        };

        let trace_id = TraceId::from_hex(&self.trace_id).ok()?;
        let span_id = SpanId::from_hex(&self.parent_span_id).ok()?;
        let remote = SpanContext::new(trace_id, span_id, TraceFlags::SAMPLED, true, TraceState::default());

        Some(opentelemetry::Context::current().with_remote_span_context(remote).attach())
    }
}

/// Everything needed to route a response back to the view that asked for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    pub kind: LookupKind,
    /// Instance id of the issuing view.
    pub view: u64,
    /// Per-view sequence number; always 0 for details lookups.
    pub seq: u64,
    pub trace: Option<TraceContext>,
}

impl RequestContext {
    /// Flattens the context into the map Zellij echoes back.
    #[must_use]
    pub fn to_map(&self) -> BTreeMap<String, String> {
        let mut map = BTreeMap::new();
        match &self.kind {
            LookupKind::Search { query } => {
                map.insert(KEY_KIND.to_string(), "search".to_string());
                map.insert(KEY_QUERY.to_string(), query.clone());
            }
            LookupKind::Details { id } => {
                map.insert(KEY_KIND.to_string(), "details".to_string());
                map.insert(KEY_ID.to_string(), id.clone());
            }
        }
        map.insert(KEY_VIEW.to_string(), self.view.to_string());
        map.insert(KEY_SEQ.to_string(), self.seq.to_string());
        if let Some(trace) = &self.trace {
            map.insert(KEY_TRACE_ID.to_string(), trace.trace_id.clone());
            map.insert(KEY_PARENT_SPAN_ID.to_string(), trace.parent_span_id.clone());
        }
        map
    }

    /// Rebuilds a context from an echoed map.
    ///
    /// Returns `None` for maps that did not originate from [`to_map`](Self::to_map),
    /// such as responses to requests some other code path issued.
    #[must_use]
    pub fn from_map(map: &BTreeMap<String, String>) -> Option<Self> {
        let kind = match map.get(KEY_KIND)?.as_str() {
            "search" => LookupKind::Search { query: map.get(KEY_QUERY)?.clone() },
            "details" => LookupKind::Details { id: map.get(KEY_ID)?.clone() },
            _ => return None,
        };
        let view = map.get(KEY_VIEW)?.parse().ok()?;
        let seq = map.get(KEY_SEQ)?.parse().ok()?;
        let trace = match (map.get(KEY_TRACE_ID), map.get(KEY_PARENT_SPAN_ID)) {
            (Some(trace_id), Some(parent_span_id)) => Some(TraceContext {
                trace_id: trace_id.clone(),
                parent_span_id: parent_span_id.clone(),
            }),
            _ => None,
        };

        Some(Self { kind, view, seq, trace })
    }
}
