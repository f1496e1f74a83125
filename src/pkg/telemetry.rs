use opentelemetry::KeyValue;
use opentelemetry::trace::{TraceError, TracerProvider as _};
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::{Resource, runtime, trace as sdktrace};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use super::conf::Settings;
use crate::prelude::{Result, coded};

/// Handle returned by [`init_tracing`]; flushes pending spans on shutdown.
pub struct Telemetry {
    otlp: bool,
}

impl Telemetry {
    pub fn shutdown(self) {
        if self.otlp {
            opentelemetry::global::shutdown_tracer_provider();
        }
    }
}

/// Installs the console subscriber, plus the OTLP layer when `settings` asks
/// for it. With no settings (they failed to load) only the console is set up,
/// so the load error can still be reported.
pub fn init_tracing(settings: Option<&Settings>) -> Result<Telemetry> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let (tracer, failure) = match settings.filter(|s| s.use_telemetry).map(otlp_tracer) {
        Some(Ok(tracer)) => (Some(tracer), None),
        Some(Err(err)) => (None, Some(err)),
        None => (None, None),
    };
    let otlp = tracer.is_some();

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .with(tracer.map(|t| tracing_opentelemetry::layer().with_tracer(t)))
        .init();

    // reported only now that the console subscriber is up
    if let Some(err) = failure {
        return Err(coded("ERR-TELEMETRY")(err));
    }
    if let Some(settings) = settings.filter(|_| otlp) {
        tracing::info!(endpoint = %settings.otlp_endpoint(), "otlp export enabled");
    }

    Ok(Telemetry { otlp })
}

fn otlp_tracer(settings: &Settings) -> core::result::Result<sdktrace::Tracer, TraceError> {
    let provider = opentelemetry_otlp::new_pipeline()
        .tracing()
        .with_exporter(
            opentelemetry_otlp::new_exporter()
                .tonic()
                .with_endpoint(settings.otlp_endpoint()),
        )
        .with_trace_config(sdktrace::Config::default().with_resource(Resource::new(vec![
            KeyValue::new("service.name", settings.service_name.clone()),
        ])))
        .install_batch(runtime::Tokio)?;
    let tracer = provider.tracer(settings.service_name.clone());
    opentelemetry::global::set_tracer_provider(provider);
    Ok(tracer)
}
