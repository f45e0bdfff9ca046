//! OpenTelemetry tracer provider with a file-backed span exporter.
//!
//! Plugins run sandboxed without a collector to talk to, so finished spans are
//! written as JSON lines to the plugin data directory instead.

use super::file_writer::FileWriter;
use super::span_formatter::SpanRecord;
use futures_util::future::BoxFuture;
use opentelemetry::trace::TraceError;
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

/// Writes each exported span as one [`SpanRecord`] line.
struct FileSpanExporter {
    writer: FileWriter,
    service: String,
    is_shutdown: AtomicBool,
}

impl FileSpanExporter {
    const fn new(file_path: PathBuf, service: String) -> Self {
        Self {
            writer: FileWriter::new(file_path),
            service,
            is_shutdown: AtomicBool::new(false),
        }
    }

    fn write_batch(&self, batch: &[SpanData]) -> Result<(), TraceError> {
        for span in batch {
            let record = SpanRecord::from_span(span, &self.service);
            let line = serde_json::to_string(&record).map_err(|e| TraceError::from(e.to_string()))?;
            self.writer.write_line(&line).map_err(|e| TraceError::from(e.to_string()))?;
        }
        Ok(())
    }
}

impl SpanExporter for FileSpanExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        if self.is_shutdown.load(Ordering::SeqCst) {
            return Box::pin(std::future::ready(Err(TraceError::from("exporter is shut down"))));
        }
        Box::pin(std::future::ready(self.write_batch(&batch)))
    }

    fn shutdown(&mut self) {
        self.is_shutdown.store(true, Ordering::SeqCst);
    }
}

impl std::fmt::Debug for FileSpanExporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileSpanExporter")
            .field("writer", &self.writer)
            .field("service", &self.service)
            .field("is_shutdown", &self.is_shutdown)
            .finish()
    }
}

/// Builds a provider that exports every span synchronously to `file_path`.
pub fn create_tracer_provider(file_path: PathBuf, service: &str) -> TracerProvider {
    let resource = Resource::new(vec![opentelemetry::KeyValue::new("service.name", service.to_string())]);
    let exporter = FileSpanExporter::new(file_path, service.to_string());

    TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}
