//! Host report service: the upstream the gateway relays by default.

#[cfg(target_os = "linux")]
use std::net::SocketAddr;

#[cfg(target_os = "linux")]
use clap::Parser;

#[cfg(target_os = "linux")]
#[derive(Debug, Parser)]
#[command(name = "sysinfo-server", version)]
#[command(about = "Serve interfaces, uptime, processes and disk usage as JSON", long_about = None)]
struct Args {
    /// Address to listen on.
    #[arg(long, env = "SYSINFO_BIND_ADDRESS", default_value = "0.0.0.0:8198")]
    bind_address: SocketAddr,

    /// Log level when RUST_LOG is unset.
    #[arg(long, env = "SYSINFO_LOG_LEVEL", default_value = "info")]
    log_level: String,
}

#[cfg(target_os = "linux")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use info_gateway::config::ObservabilityConfig;
    use info_gateway::hostinfo::{self, HostCommands};
    use info_gateway::observability::init_logging;
    use tokio::net::TcpListener;

    let args = Args::parse();
    init_logging(&ObservabilityConfig {
        log_level: args.log_level,
    })?;

    let listener = TcpListener::bind(args.bind_address).await?;
    tracing::info!(
        address = %listener.local_addr()?,
        "Listening for connections"
    );

    hostinfo::run(listener, HostCommands::default()).await?;

    Ok(())
}

#[cfg(not(target_os = "linux"))]
fn main() {
    eprintln!("sysinfo-server only runs on Linux");
    std::process::exit(1);
}
