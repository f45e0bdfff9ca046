//! Tracing initialization and subscriber setup.

use super::tracer;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Service name stamped on every exported span.
pub const SERVICE_NAME: &str = "MovieSearch";

/// Installs the global subscriber: level filter, then OpenTelemetry export to
/// the span log in the plugin data directory.
///
/// The filter comes from `trace_level` (any `EnvFilter` directive, default
/// `info`). If the data directory cannot be created, tracing stays off. Only
/// the first call takes effect.
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or("info");

    let data_dir = crate::infrastructure::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let provider = tracer::create_tracer_provider(crate::infrastructure::span_file(), SERVICE_NAME);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    let _ = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(otel_layer)
        .try_init();
}
