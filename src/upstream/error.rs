//! Upstream failure taxonomy.

use std::error::Error as _;

use thiserror::Error;

/// Why a relay attempt failed. Both variants map to a 500 for the caller.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// The GET itself failed: DNS, refused connection, send failure, timeout.
    #[error("error making request to {url}: {source}")]
    Unreachable {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The upstream answered but the body could not be read in full.
    #[error("error reading response from {url}: {source}")]
    BodyRead {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl UpstreamError {
    /// The upstream URL the failed call targeted.
    pub fn url(&self) -> &str {
        match self {
            UpstreamError::Unreachable { url, .. } | UpstreamError::BodyRead { url, .. } => url,
        }
    }

    /// Short stage label used as a log field.
    pub fn stage(&self) -> &'static str {
        match self {
            UpstreamError::Unreachable { .. } => "request",
            UpstreamError::BodyRead { .. } => "body",
        }
    }

    /// Render this error followed by its full source chain, `: `-separated.
    pub fn report(&self) -> String {
        let mut out = self.to_string();
        let mut source = self.source().and_then(|s| s.source());
        while let Some(err) = source {
            out.push_str(": ");
            out.push_str(&err.to_string());
            source = err.source();
        }
        out
    }

    /// Whether the failure happened after response headers arrived.
    pub fn is_body_read(&self) -> bool {
        matches!(self, UpstreamError::BodyRead { .. })
    }
}
