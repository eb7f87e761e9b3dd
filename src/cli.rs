//! Command-line interface.
//!
//! Every flag is optional and may also come from the environment; anything
//! left unset falls back to the config file, then to built-in defaults.

use std::path::PathBuf;

use clap::Parser;

use crate::config::ConfigOverrides;

#[derive(Debug, Parser)]
#[command(name = "info-gateway", version)]
#[command(about = "Relay every request to a single upstream and return its body as JSON", long_about = None)]
pub struct Cli {
    /// Optional TOML configuration file.
    #[arg(short, long, env = "GATEWAY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Address to listen on (default 0.0.0.0:8199).
    #[arg(long, env = "GATEWAY_BIND_ADDRESS")]
    pub bind_address: Option<String>,

    /// Upstream URL fetched for every request (default http://server_rs:8198/).
    #[arg(long, env = "GATEWAY_UPSTREAM_URL")]
    pub upstream_url: Option<String>,

    /// Give up on the upstream after this many seconds (default: wait forever).
    #[arg(long, env = "GATEWAY_UPSTREAM_TIMEOUT_SECS")]
    pub upstream_timeout_secs: Option<u64>,

    /// Log level when RUST_LOG is unset.
    #[arg(long, env = "GATEWAY_LOG_LEVEL")]
    pub log_level: Option<String>,
}

impl Cli {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            bind_address: self.bind_address.clone(),
            upstream_url: self.upstream_url.clone(),
            upstream_timeout_secs: self.upstream_timeout_secs,
            log_level: self.log_level.clone(),
        }
    }
}
