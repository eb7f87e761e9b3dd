//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! handlers, server, startup
//!     → tracing events (request spans carry the request ID)
//!     → logging.rs (EnvFilter + fmt layer)
//!     → stdout (the diagnostic stream)
//! ```
//!
//! # Design Decisions
//! - Human-readable output; one event per diagnostic line
//! - `RUST_LOG` wins over the configured level

pub mod logging;

pub use logging::init_logging;
