use std::io;

use thiserror::Error;

/// Error type for every stage of an ingest run.
///
/// All variants are terminal: nothing in the crate retries. Files persisted
/// before a failure stay on disk.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("fetching a page from '{endpoint}' failed: {reason}")]
    FetchFailed { endpoint: String, reason: String },
    #[error("could not decode {origin}: {reason}")]
    DecodeFailed { origin: String, reason: String },
    #[error("malformed record: {0}")]
    MalformedRecord(String),
    #[error("rendering group '{key}' failed: {reason}")]
    SerializationFailed { key: String, reason: String },
    #[error("persisting group '{key}' failed: {source}")]
    PersistFailed {
        key: String,
        #[source]
        source: io::Error,
    },
    #[error("page limit of {pages} reached with {collected} of {target} records collected")]
    PageLimitReached {
        pages: usize,
        collected: usize,
        target: usize,
    },
    #[error("configuration error: {0}")]
    Config(String),
}

/// Fieldless mirror of [`IngestError`] for matching without destructuring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidArgument,
    FetchFailed,
    DecodeFailed,
    MalformedRecord,
    SerializationFailed,
    PersistFailed,
    PageLimitReached,
    Config,
}

impl IngestError {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Self::FetchFailed { .. } => ErrorKind::FetchFailed,
            Self::DecodeFailed { .. } => ErrorKind::DecodeFailed,
            Self::MalformedRecord(_) => ErrorKind::MalformedRecord,
            Self::SerializationFailed { .. } => ErrorKind::SerializationFailed,
            Self::PersistFailed { .. } => ErrorKind::PersistFailed,
            Self::PageLimitReached { .. } => ErrorKind::PageLimitReached,
            Self::Config(_) => ErrorKind::Config,
        }
    }
}

pub type IngestResult<T> = Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_matches_variant() {
        let err = IngestError::PersistFailed {
            key: "A".into(),
            source: io::Error::other("disk full"),
        };
        assert_eq!(err.kind(), ErrorKind::PersistFailed);
        assert!(err.to_string().contains("'A'"));

        let err = IngestError::PageLimitReached {
            pages: 3,
            collected: 0,
            target: 5,
        };
        assert_eq!(err.kind(), ErrorKind::PageLimitReached);
        assert_eq!(
            err.to_string(),
            "page limit of 3 reached with 0 of 5 records collected"
        );
    }
}
