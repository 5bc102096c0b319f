//! Blocking HTTP page source built on `ureq`.

use std::time::Duration;

use tracing::debug;

use crate::accumulate::Accumulator;
use crate::error::{IngestError, IngestResult};
use crate::io::json::decode_page;
use crate::io::source::RecordSource;
use crate::record::{Page, Record};

/// Global per-request timeout used by [`HttpSource::new`].
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Issues one GET to a fixed endpoint per page.
///
/// Non-2xx responses count as transport failures.
#[derive(Clone)]
pub struct HttpSource {
    endpoint: String,
    agent: ureq::Agent,
}

impl HttpSource {
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_timeout(endpoint, DEFAULT_TIMEOUT)
    }

    #[must_use]
    pub fn with_timeout(endpoint: impl Into<String>, timeout: Duration) -> Self {
        let config = ureq::Agent::config_builder()
            .timeout_global(Some(timeout))
            .build();
        Self {
            endpoint: endpoint.into(),
            agent: config.into(),
        }
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn fetch_failed(&self, reason: String) -> IngestError {
        IngestError::FetchFailed {
            endpoint: self.endpoint.clone(),
            reason,
        }
    }
}

impl RecordSource for HttpSource {
    fn fetch_page(&self) -> IngestResult<Page> {
        let response = self
            .agent
            .get(&self.endpoint)
            .call()
            .map_err(|err| self.fetch_failed(format!("request failed: {err}")))?;
        let body = response
            .into_body()
            .read_to_vec()
            .map_err(|err| self.fetch_failed(format!("reading response body failed: {err}")))?;
        debug!(endpoint = %self.endpoint, bytes = body.len(), "received page body");
        decode_page(&body, &self.endpoint)
    }
}

/// Collect exactly `target` records from `endpoint` with default settings.
///
/// # Errors
/// See [`Accumulator::fetch`].
pub fn fetch(endpoint: &str, target: usize) -> IngestResult<Vec<Record>> {
    Accumulator::new(HttpSource::new(endpoint))
        .fetch(target)
        .map(|acc| acc.records)
}
