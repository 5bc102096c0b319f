//! Accumulation stage: pull pages until an exact record count is reached.
//!
//! The loop has two states, accumulating and done, plus a failure exit:
//!
//! 1. `target == 0` fails up front, before any request
//! 2. each iteration requests one page and appends all of its records,
//!    duplicates included
//! 3. overflow is cut back to the first `target` records in arrival order
//! 4. the loop stops as soon as the buffer holds `target` records
//!
//! A source that keeps returning short or empty pages would spin forever, so
//! the number of requests is capped (see [`Accumulator::with_max_pages`]).

use tracing::{debug, info};

use crate::error::{IngestError, IngestResult};
use crate::io::source::RecordSource;
use crate::record::Record;

/// Request cap applied when none is configured.
pub const DEFAULT_MAX_PAGES: usize = 10_000;

/// Records collected by one [`Accumulator::fetch`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccumulatedRecords {
    /// Exactly `target` records, in arrival order.
    pub records: Vec<Record>,
    /// Number of pages requested.
    pub pages: usize,
}

/// Drives a [`RecordSource`] until a target count is met.
#[derive(Debug, Clone)]
pub struct Accumulator<S> {
    source: S,
    max_pages: usize,
}

impl<S: RecordSource> Accumulator<S> {
    #[must_use]
    pub const fn new(source: S) -> Self {
        Self {
            source,
            max_pages: DEFAULT_MAX_PAGES,
        }
    }

    /// Cap the number of page requests per [`fetch`](Self::fetch).
    #[must_use]
    pub const fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = max_pages;
        self
    }

    #[must_use]
    pub const fn max_pages(&self) -> usize {
        self.max_pages
    }

    #[must_use]
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Collect exactly `target` records.
    ///
    /// # Errors
    /// - [`IngestError::InvalidArgument`] if `target` or the page cap is zero
    /// - [`IngestError::FetchFailed`] / [`IngestError::DecodeFailed`] from the source
    /// - [`IngestError::PageLimitReached`] if the cap is hit first
    ///
    /// No partial result is returned on error.
    pub fn fetch(&self, target: usize) -> IngestResult<AccumulatedRecords> {
        if target == 0 {
            return Err(IngestError::InvalidArgument(
                "target record count must be positive".to_string(),
            ));
        }
        if self.max_pages == 0 {
            return Err(IngestError::InvalidArgument(
                "page limit must be positive".to_string(),
            ));
        }

        let mut records: Vec<Record> = Vec::with_capacity(target);
        let mut pages = 0usize;
        while records.len() < target {
            if pages == self.max_pages {
                return Err(IngestError::PageLimitReached {
                    pages,
                    collected: records.len(),
                    target,
                });
            }
            let page = self.source.fetch_page()?;
            pages += 1;
            debug!(page = pages, received = page.len(), collected = records.len(), "fetched page");

            records.extend(page.results);
            if records.len() > target {
                debug!(dropped = records.len() - target, "truncating overflow");
                records.truncate(target);
            }
        }

        info!(records = records.len(), pages, "accumulation complete");
        Ok(AccumulatedRecords { records, pages })
    }
}
