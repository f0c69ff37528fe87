use anyhow::Result;
use arc_swap::ArcSwap;
use axum::{extract::DefaultBodyLimit, routing::get, routing::post, Router};
use metrics_exporter_prometheus::PrometheusHandle;
use std::{net::SocketAddr, path::PathBuf, sync::Arc};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use crate::{
    config::Config,
    handlers::{self, AppState},
    metrics,
    signals::setup_signal_handlers,
};

/// Start the landing page API server
///
/// This function:
/// 1. Initializes metrics (when enabled)
/// 2. Sets up signal handlers for graceful shutdown and config reload
/// 3. Creates the Axum application
/// 4. Binds to the configured address
/// 5. Serves requests with graceful shutdown support
pub async fn start_server(config: Config, config_path: PathBuf) -> Result<()> {
    let metrics_handle = if config.metrics.enabled {
        info!("Initializing Prometheus metrics...");
        Some(Arc::new(metrics::init_metrics()))
    } else {
        None
    };

    // Wrap config in ArcSwap for atomic reload support
    let config_swap = Arc::new(ArcSwap::from_pointee(config.clone()));

    // Setup signal handlers (SIGTERM, SIGINT for shutdown; SIGHUP for reload)
    let (shutdown_tx, signal_handle) = setup_signal_handlers(config_swap.clone(), config_path);
    let mut shutdown_rx = shutdown_tx.subscribe();

    let app = create_router(&config, AppState::new(config_swap), metrics_handle);

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    info!("Starting Move landing API on {}", addr);
    info!(
        default_currency = %config.pricing.default_currency,
        chat_delay_ms = config.chat.reply_delay_ms,
        contact_delay_ms = config.forms.contact_delay_ms,
        newsletter_delay_ms = config.forms.newsletter_delay_ms,
        "Configuration loaded"
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = shutdown_rx.recv().await;
            info!("Shutdown signal received, draining connections...");
        })
        .await?;

    signal_handle.await?;
    info!("Server stopped gracefully");

    Ok(())
}

/// Create the Axum router with all routes and middleware
pub fn create_router(
    config: &Config,
    app_state: AppState,
    metrics_handle: Option<Arc<PrometheusHandle>>,
) -> Router {
    let api_routes = Router::new()
        .route("/ready", get(handlers::health::readiness_check))
        .route("/api/pricing/currencies", get(handlers::pricing::list_currencies))
        .route("/api/pricing/modules", get(handlers::pricing::catalog))
        .route("/api/pricing/quote", post(handlers::pricing::quote))
        .route(
            "/api/chat",
            get(handlers::chat::greeting).post(handlers::chat::reply),
        )
        .route("/api/contact", post(handlers::forms::submit_contact))
        .route("/api/newsletter", post(handlers::forms::subscribe_newsletter))
        .with_state(app_state);

    let mut app = Router::new()
        .route("/health", get(handlers::health::health_check))
        .merge(api_routes);

    if let Some(handle) = metrics_handle {
        let metrics_routes = Router::new()
            .route(
                &config.metrics.endpoint,
                get(handlers::metrics_handler::metrics),
            )
            .with_state(handle);
        app = app.merge(metrics_routes);
    }

    app
        // Form and chat payloads are small
        .layer(DefaultBodyLimit::max(64 * 1024))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn create_test_app(config: Config) -> Router {
        let state = AppState::new(Arc::new(ArcSwap::from_pointee(config.clone())));
        let recorder = metrics_exporter_prometheus::PrometheusBuilder::new().build_recorder();
        create_router(&config, state, Some(Arc::new(recorder.handle())))
    }

    async fn post_json(app: Router, uri: &str, body: &str) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(
                Request::post(uri)
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health_route() {
        let app = create_test_app(Config::default());
        let response = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_metrics_route_uses_configured_endpoint() {
        let mut config = Config::default();
        config.metrics.endpoint = "/internal/metrics".to_string();
        let app = create_test_app(config);

        let response = app
            .clone()
            .oneshot(Request::get("/internal/metrics").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(Request::get("/metrics").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_quote_route() {
        let app = create_test_app(Config::default());
        let (status, body) = post_json(
            app,
            "/api/pricing/quote",
            r#"{"currency": "USD", "modules": ["CRM"]}"#,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        // (199 + 540) * 3.28 = 2423.92
        assert_eq!(body["total_yearly_price"], "$ 2423.92");
        assert_eq!(body["base_price"], "$ 652.72");
    }

    #[tokio::test]
    async fn test_quote_route_unknown_module() {
        let app = create_test_app(Config::default());
        let (status, body) =
            post_json(app, "/api/pricing/quote", r#"{"modules": ["Sauna"]}"#).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["type"], "unknown_module");
    }

    #[tokio::test]
    async fn test_quote_route_rejects_malformed_body_as_json() {
        let app = create_test_app(Config::default());
        let response = app
            .oneshot(
                Request::post("/api/pricing/quote")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"modules": "CRM"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(response.headers()["content-type"], "application/json");

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"]["type"], "bad_request");
    }

    #[tokio::test]
    async fn test_contact_route_rejects_non_json_body() {
        let app = create_test_app(Config::default());
        let response = app
            .oneshot(
                Request::post("/api/contact")
                    .body(Body::from("first_name=Ana"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"]["type"], "bad_request");
    }

    #[tokio::test(start_paused = true)]
    async fn test_chat_route() {
        let app = create_test_app(Config::default());
        let (status, body) = post_json(app, "/api/chat", r#"{"message": "free trial?"}"#).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["topic"], "trial");
    }

    #[tokio::test(start_paused = true)]
    async fn test_newsletter_route_validation() {
        let app = create_test_app(Config::default());
        let (status, body) = post_json(app, "/api/newsletter", r#"{"email": "x"}"#).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["type"], "validation_error");
    }
}
