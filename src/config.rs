use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::accumulate::DEFAULT_MAX_PAGES;
use crate::error::{IngestError, IngestResult};

/// Endpoint used when no other is configured.
pub const DEFAULT_ENDPOINT: &str =
    "https://randomapi.com/api/6de6abfedb24f889e0b5f675edc50deb?fmt=prettyjson&sole";

/// Settings for one ingest run.
///
/// Missing keys in a JSON config file fall back to [`IngestConfig::default`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestConfig {
    pub endpoint: String,
    pub target_count: usize,
    pub output_dir: PathBuf,
    pub max_pages: usize,
    pub timeout_secs: u64,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            target_count: 100,
            output_dir: PathBuf::from("."),
            max_pages: DEFAULT_MAX_PAGES,
            timeout_secs: 30,
        }
    }
}

impl IngestConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a JSON config file.
    ///
    /// # Errors
    /// [`IngestError::Config`] if the file cannot be read or parsed.
    pub fn from_json_file(path: impl AsRef<Path>) -> IngestResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|err| IngestError::Config(format!("read {}: {err}", path.display())))?;
        serde_json::from_str(&text)
            .map_err(|err| IngestError::Config(format!("parse {}: {err}", path.display())))
    }

    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    #[must_use]
    pub const fn with_target_count(mut self, target_count: usize) -> Self {
        self.target_count = target_count;
        self
    }

    #[must_use]
    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    #[must_use]
    pub const fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = max_pages;
        self
    }

    #[must_use]
    pub const fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Reject settings no run could succeed with.
    ///
    /// # Errors
    /// [`IngestError::InvalidArgument`] for a zero target count,
    /// [`IngestError::Config`] for anything else.
    pub fn validate(&self) -> IngestResult<()> {
        if self.target_count == 0 {
            return Err(IngestError::InvalidArgument(
                "target record count must be positive".to_string(),
            ));
        }
        if self.endpoint.trim().is_empty() {
            return Err(IngestError::Config("endpoint is empty".to_string()));
        }
        if self.max_pages == 0 {
            return Err(IngestError::Config("max_pages must be positive".to_string()));
        }
        if self.timeout_secs == 0 {
            return Err(IngestError::Config("timeout_secs must be positive".to_string()));
        }
        Ok(())
    }
}
