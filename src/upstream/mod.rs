//! Upstream subsystem.
//!
//! # Data Flow
//! ```text
//! inbound request (contents ignored)
//!     → client.rs (GET configured url)         → UpstreamError::Unreachable
//!     → client.rs (buffer full response body)  → UpstreamError::BodyRead
//!     → Bytes handed back to the HTTP layer
//! ```
//!
//! # Design Decisions
//! - One shared client per server; connections are pooled
//! - Exactly one outbound GET per call, never retried
//! - No timeout unless one is configured

pub mod client;
pub mod error;

pub use client::UpstreamClient;
pub use error::UpstreamError;
