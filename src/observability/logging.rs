//! Logging initialization.
//!
//! # Responsibilities
//! - Install the global tracing subscriber
//! - Resolve the filter from `RUST_LOG` or the configured level

use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::ObservabilityConfig;

/// Install the global subscriber writing to stdout.
///
/// Fails if a global subscriber is already set.
pub fn init_logging(config: &ObservabilityConfig) -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(config)))
        .with(tracing_subscriber::fmt::layer())
        .try_init()
}

/// Filter used when `RUST_LOG` is unset.
pub fn default_filter(config: &ObservabilityConfig) -> EnvFilter {
    let level = config.log_level.to_ascii_lowercase();
    EnvFilter::new(format!(
        "info_gateway={level},sysinfo_server={level},tower_http={level}"
    ))
}

/// In-memory log sink for asserting on diagnostics in tests.
#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct LogCapture(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

#[cfg(test)]
impl LogCapture {
    /// Route this thread's events into the capture until the guard drops.
    pub(crate) fn set_default(&self) -> tracing::subscriber::DefaultGuard {
        let writer = self.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    pub(crate) fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

#[cfg(test)]
impl std::io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_targets_crate_and_tower_http() {
        let config = ObservabilityConfig {
            log_level: "WARN".to_string(),
        };
        let filter = default_filter(&config).to_string();
        assert!(filter.contains("info_gateway=warn"));
        assert!(filter.contains("sysinfo_server=warn"));
        assert!(filter.contains("tower_http=warn"));
    }
}
