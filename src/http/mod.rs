//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, catch-all route, middleware)
//!     → request.rs (request ID + per-request span)
//!     → handler.rs (one GET to the upstream, buffer body)
//!     → response.rs (fixed JSON content type, 200 or 500)
//!     → Send to client
//! ```

pub mod handler;
pub mod request;
pub mod response;
pub mod server;

pub use request::{RequestSpan, X_REQUEST_ID};
pub use response::JSON_CONTENT_TYPE;
pub use server::{AppState, HttpServer};
