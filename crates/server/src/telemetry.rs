use axum::{body::Body, http::Request, response::Response};
use opentelemetry::{
    global,
    trace::{SpanKind, TraceContextExt, Tracer},
    Context, KeyValue,
};
use opentelemetry_otlp::{WithExportConfig, WithTonicConfig};
use std::{
    future::Future,
    pin::Pin,
    sync::OnceLock,
    task::{Context as TaskContext, Poll},
};
use tower::{Layer, Service};

use crate::auth::middleware::SessionToken;

const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
const TRACER_NAME: &str = "rideshare";

/// Keeps the LoggerProvider alive for the process lifetime.
static LOGGER_PROVIDER: OnceLock<opentelemetry_sdk::logs::SdkLoggerProvider> = OnceLock::new();

/// Runtime for the OTLP gRPC exporters. Tonic's `connect_lazy()` spawns
/// onto the current Tokio runtime, which may not be entered yet when the
/// `dioxus::serve` closure runs.
static OTEL_RUNTIME: OnceLock<tokio::runtime::Runtime> = OnceLock::new();

/// Install the OTLP trace and log exporters.
///
/// Dioxus owns the `tracing` subscriber; this only registers the global
/// tracer provider used by [`OtelTraceLayer`] and bridges the `log` crate.
///
/// Environment:
///   - `OTEL_EXPORTER_OTLP_ENDPOINT`: collector gRPC address. Unset disables export.
///   - `OTEL_SERVICE_NAME`: defaults to `rideshare-web`.
///   - `DEPLOY_ENV`: defaults to `development`.
pub fn init_telemetry() {
    let Ok(endpoint) = std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT") else {
        tracing::info!("OTEL_EXPORTER_OTLP_ENDPOINT not set, skipping OTLP export");
        return;
    };

    let service_name =
        std::env::var("OTEL_SERVICE_NAME").unwrap_or_else(|_| "rideshare-web".to_string());
    let environment = std::env::var("DEPLOY_ENV").unwrap_or_else(|_| "development".to_string());

    if OTEL_RUNTIME.get().is_none() {
        match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .worker_threads(1)
            .build()
        {
            Ok(rt) => {
                let _ = OTEL_RUNTIME.set(rt);
            }
            Err(e) => {
                tracing::error!(error = %e, "cannot start telemetry runtime");
                return;
            }
        }
    }
    let Some(rt) = OTEL_RUNTIME.get() else {
        return;
    };
    let _guard = rt.enter();

    let mut span_builder = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .with_endpoint(&endpoint);
    let mut log_builder = opentelemetry_otlp::LogExporter::builder()
        .with_tonic()
        .with_endpoint(&endpoint);
    if endpoint.starts_with("https://") {
        let tls = opentelemetry_otlp::tonic_types::transport::ClientTlsConfig::new()
            .with_native_roots();
        span_builder = span_builder.with_tls_config(tls.clone());
        log_builder = log_builder.with_tls_config(tls);
    }

    let span_exporter = match span_builder.build() {
        Ok(exporter) => exporter,
        Err(e) => {
            tracing::error!(error = %e, "failed to create OTLP span exporter");
            return;
        }
    };

    let resource = opentelemetry_sdk::Resource::builder()
        .with_service_name(service_name)
        .with_attribute(KeyValue::new("service.version", APP_VERSION))
        .with_attribute(KeyValue::new("deployment.environment", environment))
        .build();

    let provider = opentelemetry_sdk::trace::SdkTracerProvider::builder()
        .with_batch_exporter(span_exporter)
        .with_resource(resource.clone())
        .build();
    global::set_tracer_provider(provider);

    match log_builder.build() {
        Ok(log_exporter) => {
            let logger_provider = LOGGER_PROVIDER.get_or_init(|| {
                opentelemetry_sdk::logs::SdkLoggerProvider::builder()
                    .with_batch_exporter(log_exporter)
                    .with_resource(resource)
                    .build()
            });
            let bridge = opentelemetry_appender_log::OpenTelemetryLogBridge::new(logger_provider);
            if log::set_boxed_logger(Box::new(bridge)).is_ok() {
                log::set_max_level(log::LevelFilter::Info);
            } else {
                tracing::warn!("log crate logger already set, OTLP log bridge skipped");
            }
        }
        Err(e) => tracing::error!(error = %e, "failed to create OTLP log exporter"),
    }

    tracing::info!(%endpoint, version = APP_VERSION, "telemetry initialised");
}

/// Collapse a request path into a low-cardinality span name component.
///
/// Dashboard sub-pages and server-function hashes would otherwise create
/// one span name per URL.
pub fn route_group(path: &str) -> &'static str {
    let first = path
        .trim_start_matches('/')
        .split('/')
        .next()
        .unwrap_or_default();
    match first {
        "" => "/",
        "rider" => "/rider/*",
        "driver" => "/driver/*",
        "admin" => "/admin/*",
        "api" => "/api/*",
        "login" => "/login",
        "register" => "/register",
        "unauthorized" => "/unauthorized",
        "health" => "/health",
        "assets" | "_dioxus" | "wasm" => "/assets/*",
        "about" | "features" | "contact" | "faq" => "/public/*",
        _ => "/other",
    }
}

/// Tower layer that opens an OpenTelemetry span for every HTTP request.
///
/// Records method, route group, request id, response status and whether
/// the request carried a session.
#[derive(Clone)]
pub struct OtelTraceLayer;

impl<S> Layer<S> for OtelTraceLayer {
    type Service = OtelTraceService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        OtelTraceService { inner }
    }
}

#[derive(Clone)]
pub struct OtelTraceService<S> {
    inner: S,
}

impl<S> Service<Request<Body>> for OtelTraceService<S>
where
    S: Service<Request<Body>, Response = Response> + Send + Clone + 'static,
    S::Future: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut TaskContext<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let tracer = global::tracer(TRACER_NAME);
        let method = req.method().to_string();
        let path = req.uri().path().to_string();
        let group = route_group(&path);

        let request_id = req
            .headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();
        let session = if req.extensions().get::<SessionToken>().is_some() {
            "present"
        } else {
            "none"
        };

        let span = tracer
            .span_builder(format!("{method} {group}"))
            .with_kind(SpanKind::Server)
            .with_attributes(vec![
                KeyValue::new("http.method", method),
                KeyValue::new("http.target", path),
                KeyValue::new("http.route", group),
                KeyValue::new("http.request_id", request_id),
                KeyValue::new("session", session),
            ])
            .start(&tracer);

        let cx = Context::current_with_span(span);
        let mut inner = self.inner.clone();

        let guard = cx.clone().attach();
        let future = inner.call(req);
        drop(guard);

        Box::pin(async move {
            let response = future.await?;

            let span = cx.span();
            let status = response.status();
            span.set_attribute(KeyValue::new("http.status_code", status.as_u16() as i64));
            if status.is_server_error() {
                span.set_status(opentelemetry::trace::Status::error(status.to_string()));
            }

            Ok(response)
        })
    }
}
