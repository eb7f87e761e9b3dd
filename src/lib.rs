//! HTTP gateway that relays every request to a single upstream.
//!
//! Any method on any path triggers one GET to the configured upstream; the
//! upstream body comes back verbatim as `application/json`, and any failure
//! becomes a `500` plus a diagnostic on stdout.
//!
//! On Linux the crate also ships the default upstream itself, a host report
//! service (`hostinfo`, binary `sysinfo-server`).

pub mod cli;
pub mod config;
#[cfg(target_os = "linux")]
pub mod hostinfo;
pub mod http;
pub mod observability;
pub mod upstream;

pub use config::schema::GatewayConfig;
pub use http::HttpServer;
pub use upstream::{UpstreamClient, UpstreamError};
