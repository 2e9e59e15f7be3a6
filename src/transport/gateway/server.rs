use super::handlers::{handle_generate, handle_health};
use super::{AppState, REQUEST_TIMEOUT_GRACE_SECS};

use crate::config::{Config, GatewayConfig};
use crate::llm::{OpenAiBackend, ResponseFormat, StructuredBackend};
use crate::pipeline::{GenerationInvoker, Pipeline};
use anyhow::{Context, Result};
use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method, StatusCode, header},
    routing::{get, post},
};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;

/// Wire the OpenAI backend, the manifest schema and the pipeline together.
///
/// Fails when the backend credential is missing; callers treat that as fatal.
pub fn build_state(config: &Config) -> Result<AppState> {
    let api_key = config.backend.require_api_key()?;
    let backend: Arc<dyn StructuredBackend> = Arc::new(OpenAiBackend::new(
        api_key,
        &config.backend.base_url,
        config.backend.timeout(),
    ));

    let invoker = GenerationInvoker::new(
        backend,
        ResponseFormat::agent_manifest(),
        config.backend.model.clone(),
    )
    .with_reasoning_effort(Some(config.backend.reasoning_effort.clone()));

    let pipeline = Pipeline::new(invoker).context("compile generation schemas")?;
    Ok(AppState {
        pipeline: Arc::new(pipeline),
    })
}

/// Run the HTTP gateway on `gateway.host:gateway.port`.
///
/// The credential is checked before the socket is bound.
pub async fn run_gateway(config: Arc<Config>) -> Result<()> {
    config.backend.require_api_key()?;
    let addr: SocketAddr = format!("{}:{}", config.gateway.host, config.gateway.port)
        .parse()
        .context("parse gateway bind address")?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("bind gateway socket")?;

    run_gateway_with_listener(listener, config).await
}

/// Run the HTTP gateway from a pre-bound listener.
pub async fn run_gateway_with_listener(
    listener: tokio::net::TcpListener,
    config: Arc<Config>,
) -> Result<()> {
    let state = build_state(&config)?;
    let local_addr = listener
        .local_addr()
        .context("get gateway listener local address")?;

    tracing::info!(
        addr = %local_addr,
        model = %config.backend.model,
        "agent factory listening"
    );
    println!("Agent factory listening on {local_addr}");
    println!("  GET  /healthz");
    println!("  POST /generate");

    let request_timeout =
        Duration::from_secs(config.backend.timeout_secs + REQUEST_TIMEOUT_GRACE_SECS);
    let app = build_app(state, &config.gateway, request_timeout);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serve HTTP gateway")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::warn!(%error, "failed to install ctrl-c handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}

fn cors_layer(gateway: &GatewayConfig) -> CorsLayer {
    let origin = match gateway.cors_origins() {
        None => AllowOrigin::any(),
        Some(origins) => {
            let parsed: Vec<HeaderValue> = origins
                .iter()
                .filter_map(|origin| match origin.parse() {
                    Ok(value) => Some(value),
                    Err(_) => {
                        tracing::warn!(origin = %origin, "ignoring unparseable CORS origin");
                        None
                    }
                })
                .collect();
            AllowOrigin::list(parsed)
        }
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
}

pub fn build_app(state: AppState, gateway: &GatewayConfig, request_timeout: Duration) -> Router {
    Router::new()
        .route("/healthz", get(handle_health))
        .route("/generate", post(handle_generate))
        .with_state(state)
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(gateway.max_body_bytes))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .layer(cors_layer(gateway))
}
