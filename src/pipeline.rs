//! Sequencing of the four stages: accumulate, dedupe, group, write.
//!
//! Each stage takes ownership of the previous stage's full output. Nothing
//! overlaps and nothing is kept between runs.

use tracing::info;

use crate::accumulate::Accumulator;
use crate::combiners::distinct::dedupe;
use crate::error::IngestResult;
use crate::group::group;
use crate::io::sink::{GroupSink, RenderedGroup, write_groups};
use crate::io::source::RecordSource;

/// Counts and outputs from one completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub pages: usize,
    pub fetched: usize,
    pub unique: usize,
    pub groups: usize,
    /// Rendered documents in the order they were persisted (ascending key).
    pub documents: Vec<RenderedGroup>,
}

/// A source and a sink wired into the full ingest pipeline.
#[derive(Debug, Clone)]
pub struct IngestPipeline<S, W> {
    accumulator: Accumulator<S>,
    sink: W,
}

impl<S: RecordSource, W: GroupSink> IngestPipeline<S, W> {
    #[must_use]
    pub const fn new(source: S, sink: W) -> Self {
        Self {
            accumulator: Accumulator::new(source),
            sink,
        }
    }

    #[must_use]
    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.accumulator = self.accumulator.with_max_pages(max_pages);
        self
    }

    #[must_use]
    pub const fn sink(&self) -> &W {
        &self.sink
    }

    /// Fetch `target` records, drop duplicates, group and persist them.
    ///
    /// # Errors
    /// Any stage's error, unchanged. Documents persisted before the failing
    /// stage are not removed.
    pub fn run(&self, target: usize) -> IngestResult<RunSummary> {
        let fetched = self.accumulator.fetch(target)?;
        let pages = fetched.pages;
        let fetched_count = fetched.records.len();

        let unique = dedupe(fetched.records);
        let unique_count = unique.len();
        info!(fetched = fetched_count, unique = unique_count, "removed duplicates");

        let groups = group(unique)?;
        let group_count = groups.len();
        info!(groups = group_count, keys = ?groups.sorted_keys(), "grouped records");

        let documents = write_groups(groups, &self.sink)?;

        Ok(RunSummary {
            pages,
            fetched: fetched_count,
            unique: unique_count,
            groups: group_count,
            documents,
        })
    }
}

/// Run the pipeline against an HTTP endpoint, writing files to a directory.
///
/// # Errors
/// Invalid configuration, or any stage's error.
#[cfg(feature = "http")]
pub fn run_config(config: &crate::IngestConfig) -> IngestResult<RunSummary> {
    use crate::io::http::HttpSource;
    use crate::io::sink::FsSink;

    config.validate()?;
    info!(
        endpoint = %config.endpoint,
        target = config.target_count,
        output_dir = %config.output_dir.display(),
        "starting ingest run"
    );
    IngestPipeline::new(
        HttpSource::with_timeout(&config.endpoint, config.timeout()),
        FsSink::new(&config.output_dir),
    )
    .with_max_pages(config.max_pages)
    .run(config.target_count)
}
