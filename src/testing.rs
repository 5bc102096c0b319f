//! Testing utilities for letterbeam runs.
//!
//! Everything here stands in for the network or the filesystem so pipeline
//! behavior can be checked deterministically:
//!
//! - **Fixtures**: ready-made [`Record`](crate::Record)s and pages
//! - **Mock I/O**: [`ScriptedSource`], [`MemorySink`], [`FailingSink`]
//! - **Assertions**: [`assert_no_duplicates`], [`assert_partition`]
//!
//! # Quick Start
//!
//! ```
//! use letterbeam::IngestPipeline;
//! use letterbeam::testing::*;
//!
//! let source = ScriptedSource::repeating(sample_page());
//! let sink = MemorySink::new();
//! let summary = IngestPipeline::new(&source, &sink).run(3).unwrap();
//!
//! assert_eq!(summary.fetched, 3);
//! assert_eq!(source.calls(), 1);
//! assert!(sink.contains("J.json"));
//! ```

pub mod assertions;
pub mod fixtures;
pub mod mock_io;

pub use assertions::*;
pub use fixtures::*;
pub use mock_io::*;
