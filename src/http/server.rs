//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the catch-all gateway handler
//! - Wire up middleware (request ID, tracing)
//! - Bind server to listener
//! - Hold the shared upstream client

use axum::{routing::any, Router};
use tokio::net::TcpListener;
use tower::ServiceBuilder;

use crate::config::GatewayConfig;
use crate::http::handler::gateway_handler;
use crate::http::request::{request_id_layer, trace_layer};
use crate::upstream::UpstreamClient;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub upstream: UpstreamClient,
}

impl AppState {
    /// Build state for the given configuration.
    pub fn new(config: &GatewayConfig) -> Result<Self, reqwest::Error> {
        Ok(Self {
            upstream: UpstreamClient::new(&config.upstream)?,
        })
    }
}

/// HTTP server for the gateway.
pub struct HttpServer {
    router: Router,
    config: GatewayConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: GatewayConfig) -> Result<Self, reqwest::Error> {
        let state = AppState::new(&config)?;
        let router = Self::build_router(state);
        Ok(Self { router, config })
    }

    /// Build the Axum router: every method on every path goes to the gateway handler.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/{*path}", any(gateway_handler))
            .route("/", any(gateway_handler))
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(request_id_layer())
                    .layer(trace_layer()),
            )
    }

    /// Run the server, accepting connections on the given listener.
    ///
    /// Serves until the process exits; each connection is handled on its own task.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        tracing::info!(
            upstream = %self.config.upstream.url,
            timeout_secs = ?self.config.upstream.timeout_secs,
            "HTTP server starting"
        );

        axum::serve(listener, self.router).await
    }

    /// The router, for driving the gateway without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }
}
