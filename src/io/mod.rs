//! Edges of the pipeline: where pages come from and where groups go.
//!
//! - [`source`] -- the [`RecordSource`](source::RecordSource) seam
//! - [`http`] -- blocking HTTP implementation of it (feature `http`)
//! - [`json`] -- page decoding and group document rendering
//! - [`sink`] -- the [`GroupSink`](sink::GroupSink) seam, the filesystem sink, and [`write_groups`](sink::write_groups)

pub mod json;
pub mod sink;
pub mod source;

#[cfg_attr(docsrs, doc(cfg(feature = "http")))]
#[cfg(feature = "http")]
pub mod http;
