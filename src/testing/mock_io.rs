//! In-memory stand-ins for the page source and the group sink.

use std::collections::{HashMap, VecDeque};
use std::io;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use tempfile::TempDir;

use crate::error::{IngestError, IngestResult};
use crate::io::sink::{FsSink, GroupSink};
use crate::io::source::RecordSource;
use crate::record::Page;

/// A [`RecordSource`] that replays a fixed script of responses.
///
/// Once the script runs out it either repeats a fallback page forever (see
/// [`ScriptedSource::repeating`]) or fails with
/// [`IngestError::FetchFailed`].
pub struct ScriptedSource {
    script: Mutex<VecDeque<IngestResult<Page>>>,
    fallback: Option<Page>,
    calls: AtomicUsize,
}

impl ScriptedSource {
    /// Serve `pages` in order, then fail.
    #[must_use]
    pub fn new(pages: Vec<Page>) -> Self {
        Self::from_responses(pages.into_iter().map(Ok).collect())
    }

    /// Serve the given successes and failures in order, then fail.
    #[must_use]
    pub fn from_responses(responses: Vec<IngestResult<Page>>) -> Self {
        Self {
            script: Mutex::new(responses.into()),
            fallback: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// Serve the same page on every call.
    #[must_use]
    pub fn repeating(page: Page) -> Self {
        Self::new(Vec::new()).then_repeat(page)
    }

    /// After the script runs out, keep serving `page`.
    #[must_use]
    pub fn then_repeat(mut self, page: Page) -> Self {
        self.fallback = Some(page);
        self
    }

    /// Number of `fetch_page` calls so far.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl RecordSource for ScriptedSource {
    fn fetch_page(&self) -> IngestResult<Page> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let next = self.script.lock().expect("script mutex poisoned").pop_front();
        match (next, &self.fallback) {
            (Some(response), _) => response,
            (None, Some(page)) => Ok(page.clone()),
            (None, None) => Err(IngestError::FetchFailed {
                endpoint: "scripted".to_string(),
                reason: "script exhausted".to_string(),
            }),
        }
    }
}

/// A [`GroupSink`] that keeps documents in memory by name.
#[derive(Default)]
pub struct MemorySink {
    files: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<Vec<u8>> {
        self.files.lock().expect("sink mutex poisoned").get(name).cloned()
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.files.lock().expect("sink mutex poisoned").contains_key(name)
    }

    /// Stored names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .files
            .lock()
            .expect("sink mutex poisoned")
            .keys()
            .cloned()
            .collect();
        names.sort();
        names
    }
}

impl GroupSink for MemorySink {
    fn persist(&self, name: &str, bytes: &[u8]) -> io::Result<()> {
        self.files
            .lock()
            .expect("sink mutex poisoned")
            .insert(name.to_string(), bytes.to_vec());
        Ok(())
    }
}

/// A [`GroupSink`] that stores documents like [`MemorySink`] but rejects one name.
pub struct FailingSink {
    fail_on: String,
    inner: MemorySink,
}

impl FailingSink {
    #[must_use]
    pub fn new(fail_on: impl Into<String>) -> Self {
        Self {
            fail_on: fail_on.into(),
            inner: MemorySink::new(),
        }
    }

    /// Documents stored before (or besides) the failing one.
    #[must_use]
    pub const fn stored(&self) -> &MemorySink {
        &self.inner
    }
}

impl GroupSink for FailingSink {
    fn persist(&self, name: &str, bytes: &[u8]) -> io::Result<()> {
        if name == self.fail_on {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("refusing to write {name}"),
            ));
        }
        self.inner.persist(name, bytes)
    }
}

/// An [`FsSink`] rooted in a fresh temporary directory.
///
/// The directory is removed when the returned [`TempDir`] is dropped, so keep
/// it alive for as long as the sink is in use.
///
/// # Errors
///
/// Returns an error if the temporary directory cannot be created.
pub fn temp_fs_sink() -> io::Result<(TempDir, FsSink)> {
    let dir = TempDir::new()?;
    let sink = FsSink::new(dir.path());
    Ok((dir, sink))
}
