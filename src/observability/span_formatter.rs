//! Flat JSON rendering of finished spans.
//!
//! Each span becomes one [`SpanRecord`] line in the span log, small enough to
//! grep and to load with `jq -s`.

use opentelemetry::trace::{SpanId, Status};
use opentelemetry::{KeyValue, Value};
use opentelemetry_sdk::export::trace::SpanData;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;
use std::time::{SystemTime, UNIX_EPOCH};

/// One exported span.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpanRecord {
    pub service: String,
    pub trace_id: String,
    pub span_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_span_id: Option<String>,
    pub name: String,
    pub start_unix_nanos: u64,
    pub duration_micros: u64,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, JsonValue>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<EventRecord>,
    pub status: String,
}

/// A log event recorded inside a span.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    pub name: String,
    pub offset_micros: u64,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, JsonValue>,
}

impl SpanRecord {
    /// Flattens SDK span data.
    pub fn from_span(span: &SpanData, service: &str) -> Self {
        let start = unix_nanos(span.start_time);
        let events = span
            .events
            .iter()
            .map(|event| EventRecord {
                name: event.name.to_string(),
                offset_micros: unix_nanos(event.timestamp).saturating_sub(start) / 1_000,
                attributes: attributes_to_map(&event.attributes),
            })
            .collect();

        Self {
            service: service.to_string(),
            trace_id: format!("{:032x}", span.span_context.trace_id()),
            span_id: format!("{:016x}", span.span_context.span_id()),
            parent_span_id: (span.parent_span_id != SpanId::INVALID).then(|| format!("{:016x}", span.parent_span_id)),
            name: span.name.to_string(),
            start_unix_nanos: start,
            duration_micros: unix_nanos(span.end_time).saturating_sub(start) / 1_000,
            attributes: attributes_to_map(&span.attributes),
            events,
            status: status_label(&span.status),
        }
    }
}

fn unix_nanos(time: SystemTime) -> u64 {
    time.duration_since(UNIX_EPOCH)
        .map_or(0, |d| u64::try_from(d.as_nanos()).unwrap_or(u64::MAX))
}

fn status_label(status: &Status) -> String {
    match status {
        Status::Unset => "unset".to_string(),
        Status::Ok => "ok".to_string(),
        Status::Error { description } => format!("error: {description}"),
    }
}

/// Converts attribute lists to a JSON map; later duplicates win.
pub fn attributes_to_map(attributes: &[KeyValue]) -> BTreeMap<String, JsonValue> {
    attributes
        .iter()
        .map(|kv| (kv.key.to_string(), attribute_value(&kv.value)))
        .collect()
}

fn attribute_value(value: &Value) -> JsonValue {
    match value {
        Value::Bool(b) => JsonValue::Bool(*b),
        Value::I64(i) => JsonValue::from(*i),
        Value::F64(f) => JsonValue::from(*f),
        Value::String(s) => JsonValue::String(s.to_string()),
        Value::Array(_) => JsonValue::String(value.to_string()),
    }
}
