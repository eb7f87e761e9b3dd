//! Host report service (the default upstream).
//!
//! # Data Flow
//! ```text
//! GET /
//!     → report.rs (interfaces, uptime, `ps`, `df` → ReturnedInfo)
//!     → server.rs (serialize as JSON, or 500 on any collection failure)
//! ```
//!
//! # Design Decisions
//! - Linux only: interface and uptime commands are Linux syscalls
//! - A failed collection fails the request, never the process
//! - The two command commands run concurrently

pub mod report;
pub mod server;

pub use report::{collect, CommandSpec, HostCommands, ReportError, ReturnedInfo};
pub use server::{router, run};
