//! HTTP surface of the host report service.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use tokio::net::TcpListener;
use tower::ServiceBuilder;

use crate::hostinfo::report::{collect, HostCommands};
use crate::http::request::{request_id_layer, trace_layer};

/// Build the router: `GET /` returns the report.
pub fn router(commands: HostCommands) -> Router {
    Router::new()
        .route("/", get(get_info))
        .with_state(Arc::new(commands))
        .layer(
            ServiceBuilder::new()
                .layer(request_id_layer())
                .layer(trace_layer()),
        )
}

/// Serve the report on `listener` until the process exits.
pub async fn run(listener: TcpListener, commands: HostCommands) -> Result<(), std::io::Error> {
    tracing::info!("Host report service starting");
    axum::serve(listener, router(commands)).await
}

async fn get_info(State(commands): State<Arc<HostCommands>>) -> Response {
    match collect(&commands).await {
        Ok(info) => Json(info).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "Failed to collect host report");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
