//! OpenTelemetry-based observability with file-based span export.
//!
//! ```text
//! tracing → tracing-opentelemetry → OpenTelemetry SDK → FileSpanExporter → JSON lines
//! ```
//!
//! Spans land in `/data/moviesearch-spans.jsonl`, one JSON object per line,
//! rotated at 5 MB with three timestamped backups. Lookups carry their span ids
//! through the web request context, so the span handling a response is parented
//! to the span that issued the request.
//!
//! # Modules
//!
//! - `init`: Subscriber setup
//! - `tracer`: Tracer provider with the file exporter
//! - `span_formatter`: Span to JSON record conversion
//! - `file_writer`: Rotating line writer

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::{init_tracing, SERVICE_NAME};
pub use span_formatter::SpanRecord;
