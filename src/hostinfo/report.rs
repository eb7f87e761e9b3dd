//! Host report collection.
//!
//! # Responsibilities
//! - List interface addresses (IPv4 and IPv6 only)
//! - Read system uptime
//! - Capture `ps` and `df` output as a header line plus one entry per row

use std::net::IpAddr;
use std::string::FromUtf8Error;
use std::time::Duration;

use nix::ifaddrs;
use nix::sys::socket::SockaddrStorage;
use nix::sys::sysinfo;
use serde::Serialize;
use thiserror::Error;
use tokio::process::Command;

/// The JSON document served on `GET /`.
#[derive(Debug, Serialize)]
pub struct ReturnedInfo {
    pub ip_addresses: Vec<InterfaceAddress>,
    pub uptime: Duration,
    pub processes: ProcessesInfo,
    pub disk_space: DisksInfo,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct InterfaceAddress {
    pub name: String,
    pub ip: IpAddr,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProcessesInfo {
    pub header: String,
    pub processes: Vec<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DisksInfo {
    pub header: String,
    pub disks: Vec<String>,
}

/// Why a report could not be built.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to list interface addresses: {0}")]
    Interfaces(#[source] nix::Error),

    #[error("failed to read system uptime: {0}")]
    Uptime(#[source] nix::Error),

    #[error("failed to run `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{program}` produced non-UTF-8 output")]
    Utf8 {
        program: String,
        #[source]
        source: FromUtf8Error,
    },

    #[error("`{program}` produced no output")]
    Empty { program: String },
}

/// An external command whose stdout is a table with a header line.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandSpec {
    pub fn new(program: &str, args: &[&str]) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }

    /// Run the command and split its output into header and rows.
    ///
    /// A non-zero exit is tolerated as long as output was produced; `df`
    /// exits 1 when a single mount cannot be read.
    pub async fn table(&self) -> Result<(String, Vec<String>), ReportError> {
        let output = Command::new(&self.program)
            .args(&self.args)
            .output()
            .await
            .map_err(|source| ReportError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            tracing::warn!(
                program = %self.program,
                status = %output.status,
                "Report command exited unsuccessfully"
            );
        }

        let stdout = String::from_utf8(output.stdout).map_err(|source| ReportError::Utf8 {
            program: self.program.clone(),
            source,
        })?;

        split_table(&stdout).ok_or_else(|| ReportError::Empty {
            program: self.program.clone(),
        })
    }
}

/// The commands a report runs.
#[derive(Debug, Clone, PartialEq)]
pub struct HostCommands {
    pub ps: CommandSpec,
    pub df: CommandSpec,
}

impl Default for HostCommands {
    fn default() -> Self {
        Self {
            ps: CommandSpec::new("ps", &["ax", "-o", "pid,time,command"]),
            df: CommandSpec::new("df", &["-h"]),
        }
    }
}

/// First line is the header; every following line is one row.
fn split_table(output: &str) -> Option<(String, Vec<String>)> {
    let mut lines = output.lines().map(str::to_owned);
    let header = lines.next()?;
    Some((header, lines.collect()))
}

fn ip_of(address: &SockaddrStorage) -> Option<IpAddr> {
    if let Some(v4) = address.as_sockaddr_in() {
        Some(IpAddr::V4(v4.ip()))
    } else {
        address.as_sockaddr_in6().map(|v6| IpAddr::V6(v6.ip()))
    }
}

/// Every IPv4/IPv6 address bound to a local interface.
pub fn interface_addresses() -> Result<Vec<InterfaceAddress>, ReportError> {
    let addrs = ifaddrs::getifaddrs().map_err(ReportError::Interfaces)?;

    Ok(addrs
        .filter_map(|ifaddr| match ifaddr.address {
            Some(address) => ip_of(&address).map(|ip| InterfaceAddress {
                name: ifaddr.interface_name,
                ip,
            }),
            None => {
                tracing::debug!(
                    interface = %ifaddr.interface_name,
                    "Interface with unsupported address family"
                );
                None
            }
        })
        .collect())
}

/// Time since boot.
pub fn uptime() -> Result<Duration, ReportError> {
    sysinfo::sysinfo()
        .map(|info| info.uptime())
        .map_err(ReportError::Uptime)
}

/// Build a full report.
pub async fn collect(commands: &HostCommands) -> Result<ReturnedInfo, ReportError> {
    let ip_addresses = interface_addresses()?;
    let uptime = uptime()?;

    let ((ps_header, processes), (df_header, disks)) =
        tokio::try_join!(commands.ps.table(), commands.df.table())?;

    Ok(ReturnedInfo {
        ip_addresses,
        uptime,
        processes: ProcessesInfo {
            header: ps_header,
            processes,
        },
        disk_space: DisksInfo {
            header: df_header,
            disks,
        },
    })
}
