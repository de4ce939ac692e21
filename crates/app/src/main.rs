use dioxus::prelude::*;
use shared_types::FeatureFlags;

mod auth;
mod components;
mod format_helpers;
mod routes;
use auth::AuthState;
use routes::Route;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        let config = server::config::load_config();

        if config.features.telemetry {
            server::telemetry::init_telemetry();
        }
        server::health::record_start_time();

        let backend = server::backend::BackendClient::from_settings(&config.backend)?;
        server::backend::init_shared(backend.clone());
        tracing::info!(api = %backend.base_url(), "RideShare API client ready");

        let mut router = dioxus::server::router(App)
            .merge(server::health::health_router(backend.clone()));

        if config.features.telemetry {
            router = router.layer(server::telemetry::OtelTraceLayer);
        }

        let router = router
            .layer(axum::middleware::from_fn_with_state(
                backend,
                server::auth::session_middleware,
            ))
            .layer(tower_http::request_id::PropagateRequestIdLayer::x_request_id())
            .layer(tower_http::request_id::SetRequestIdLayer::x_request_id(
                tower_http::request_id::MakeRequestUuid,
            ));
        Ok(router)
    });

    #[cfg(not(feature = "server"))]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Fetch feature flags once and provide via context (defaults on error)
    let flags_resource =
        use_server_future(move || async move { server::api::get_feature_flags().await })?;

    let flags = flags_resource
        .read()
        .as_ref()
        .cloned()
        .unwrap_or(Ok(FeatureFlags::default()))
        .unwrap_or_default();

    use_context_provider(|| flags);
    use_context_provider(AuthState::new);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        shared_ui::ToastProvider {
            SuspenseBoundary {
                fallback: |_| rsx! {
                    div { class: "auth-guard-loading",
                        div { class: "spinner" }
                        p { "Loading..." }
                    }
                },
                Router::<Route> {}
            }
        }
    }
}
