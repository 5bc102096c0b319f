//! # letterbeam
//!
//! A small **batch ingest pipeline**: pull person records from a paginated JSON
//! endpoint, drop exact duplicates, bucket the survivors by the first letter of
//! their first name, and write one JSON document per bucket.
//!
//! ## Key Features
//!
//! - **Exact-count accumulation** - keep requesting pages until precisely `N` records are held
//! - **Structural dedupe** - two records are the same only if all six fields match
//! - **Deterministic output** - one `<KEY>.json` per initial, written in key order
//! - **Pluggable edges** - [`RecordSource`] and [`GroupSink`] traits, with HTTP and filesystem implementations
//! - **Fail fast** - every failure is a typed [`IngestError`]; nothing is retried
//!
//! ## Quick Start
//!
//! ```no_run
//! use letterbeam::*;
//! # fn main() -> anyhow::Result<()> {
//! let config = IngestConfig::default()
//!     .with_target_count(100)
//!     .with_output_dir("out");
//!
//! let summary = run_config(&config)?;
//! println!("{} unique records in {} files", summary.unique, summary.groups);
//! # Ok(())
//! # }
//! ```
//!
//! ## Core Concepts
//!
//! ### Stages
//!
//! A run is four stages, each consuming the whole output of the previous one:
//!
//! 1. [`Accumulator::fetch`] - request pages from a [`RecordSource`], append every
//!    record, cut the overflow so exactly `N` records remain (first `N` in arrival order)
//! 2. [`dedupe`] - collapse to distinct records (order is lost here)
//! 3. [`group()`] - partition by [`group_key`], the literal first character of `first_name`
//! 4. [`write_groups`] - render each [`Group`] and hand it to a [`GroupSink`]
//!
//! [`IngestPipeline`] wires the four together and returns a [`RunSummary`].
//!
//! ### Combiners
//!
//! Dedupe and grouping are both folds: the [`combiners`] module defines
//! [`CombineFn`] (`create`, `add_input`, `finish`) and the two combiners the
//! stages use, [`DistinctSet`] and [`GroupByKey`].
//!
//! ### Group documents
//!
//! Each file is pretty-printed JSON with this field order:
//!
//! ```text
//! {
//!     "index": "A",
//!     "records": [ ... ],
//!     "totalRecords": 1
//! }
//! ```
//!
//! `totalRecords` always equals the length of `records`; [`decode_group`]
//! refuses documents where it does not.
//!
//! ## Testing
//!
//! The [`testing`] module ships a scripted source, in-memory sinks, fixtures,
//! and partition assertions:
//!
//! ```
//! use letterbeam::*;
//! use letterbeam::testing::*;
//!
//! let source = ScriptedSource::new(vec![Page::new(mixed_records())]);
//! let sink = MemorySink::new();
//! let summary = IngestPipeline::new(&source, &sink).run(5).unwrap();
//! assert_eq!(summary.unique, 4);
//! assert_eq!(sink.names(), vec!["A.json", "B.json", "J.json", "M.json"]);
//! ```
//!
//! ## Feature Flags
//!
//! - `http` - [`HttpSource`], [`fetch`] and [`run_config`] (blocking `ureq` client)
//! - `cli` - the `letterbeam` binary
//!
//! ## Module Overview
//!
//! - [`accumulate`] - the fetch loop
//! - [`combiners`] - fold primitives behind dedupe and grouping
//! - [`group`] - `Group`, `GroupCollection`, key derivation
//! - [`io`] - sources, sinks and JSON encoding
//! - [`pipeline`] - stage sequencing
//! - [`config`] - run settings
//! - [`testing`] - fakes and assertions

pub mod accumulate;
pub mod combiners;
pub mod config;
pub mod error;
pub mod group;
pub mod io;
pub mod pipeline;
pub mod record;
pub mod testing;

// General re-exports
pub use accumulate::{AccumulatedRecords, Accumulator, DEFAULT_MAX_PAGES};
pub use combiners::distinct::dedupe;
pub use combiners::{CombineFn, DistinctSet, GroupByKey, combine_all};
pub use config::{DEFAULT_ENDPOINT, IngestConfig};
pub use error::{ErrorKind, IngestError, IngestResult};
pub use group::{Group, GroupCollection, group, group_key};
pub use io::json::{decode_group, decode_page, file_name, render_group};
pub use io::sink::{FsSink, GroupSink, RenderedGroup, write_groups};
pub use io::source::RecordSource;
pub use pipeline::{IngestPipeline, RunSummary};
pub use record::{Page, Record};

// Gated re-exports
#[cfg(feature = "http")]
pub use io::http::{HttpSource, fetch};

#[cfg(feature = "http")]
pub use pipeline::run_config;
