//! The gateway handler.
//!
//! Every inbound request, whatever its method or path, triggers exactly one
//! GET to the configured upstream:
//!
//! ```text
//! AwaitingUpstream ──ok──▶ ReadingBody ──ok──▶ Forwarding (200)
//!        │                      │
//!        └──err──▶ Failed ◀─err─┘   (500, diagnostic logged)
//! ```

use axum::extract::State;
use axum::response::Response;

use crate::http::response;
use crate::http::server::AppState;

/// Catch-all handler. The inbound request is accepted without inspection.
pub async fn gateway_handler(State(state): State<AppState>) -> Response {
    forward(&state).await
}

/// Fetch the upstream once and shape the caller's response.
pub async fn forward(state: &AppState) -> Response {
    match state.upstream.fetch().await {
        Ok(body) => {
            tracing::debug!(
                upstream = %state.upstream.url(),
                bytes = body.len(),
                "Relaying upstream body"
            );
            response::relay(body)
        }
        Err(err) => {
            tracing::error!(
                upstream = %err.url(),
                stage = err.stage(),
                "{}",
                err.report()
            );
            response::failure(&err)
        }
    }
}
