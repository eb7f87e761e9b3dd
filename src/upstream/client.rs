//! Outbound client for the configured upstream.
//!
//! # Responsibilities
//! - Issue exactly one GET to the upstream URL per call
//! - Buffer the complete response body
//! - Classify failures as request-stage or body-stage

use std::time::Duration;

use axum::body::Bytes;
use reqwest::redirect::Policy;

use crate::config::UpstreamConfig;
use crate::upstream::error::UpstreamError;

/// Redirect hops followed before giving up.
const MAX_REDIRECTS: usize = 10;

/// Shared handle to the upstream. Cheap to clone.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    client: reqwest::Client,
    url: String,
}

impl UpstreamClient {
    /// Build a pooled client for the configured upstream.
    pub fn new(config: &UpstreamConfig) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder()
            .redirect(Policy::limited(MAX_REDIRECTS))
            .no_proxy();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
            url: config.url.clone(),
        })
    }

    /// The URL every call targets.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// GET the upstream and return its whole body.
    ///
    /// The upstream status code is not inspected; any response whose body
    /// reads cleanly is a success.
    pub async fn fetch(&self) -> Result<Bytes, UpstreamError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|source| UpstreamError::Unreachable {
                url: self.url.clone(),
                source,
            })?;

        tracing::debug!(
            upstream = %self.url,
            status = %response.status(),
            "Upstream responded"
        );

        response
            .bytes()
            .await
            .map_err(|source| UpstreamError::BodyRead {
                url: self.url.clone(),
                source,
            })
    }
}
