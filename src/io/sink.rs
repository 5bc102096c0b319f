//! Persisting rendered groups.
//!
//! [`write_groups`] renders every group with
//! [`render_group`](crate::io::json::render_group) and hands the bytes to a
//! [`GroupSink`] under `<KEY>.json`. The first failure stops the write; files
//! already persisted stay where they are.

use std::fs::{self, create_dir_all};
use std::io;
use std::path::{Component, Path, PathBuf};

use tracing::info;

use crate::error::{IngestError, IngestResult};
use crate::group::GroupCollection;
use crate::io::json::{file_name, render_group};

/// Destination for rendered group documents.
pub trait GroupSink {
    /// Store `bytes` under `name`, replacing anything already there.
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes cannot be stored.
    fn persist(&self, name: &str, bytes: &[u8]) -> io::Result<()>;
}

impl<W: GroupSink + ?Sized> GroupSink for &W {
    fn persist(&self, name: &str, bytes: &[u8]) -> io::Result<()> {
        (**self).persist(name, bytes)
    }
}

/// Writes each document as a file under a root directory.
///
/// Bytes go to `<name>.part` first and are renamed into place, so a crash
/// mid-write never leaves a truncated document behind. `name` must be a single
/// plain file name; anything that would resolve outside the root (`/.json`,
/// `../x.json`, `a/b.json`) is rejected with [`io::ErrorKind::InvalidInput`].
#[derive(Debug, Clone)]
pub struct FsSink {
    root: PathBuf,
}

impl FsSink {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl GroupSink for FsSink {
    fn persist(&self, name: &str, bytes: &[u8]) -> io::Result<()> {
        check_file_name(name)?;
        if !self.root.as_os_str().is_empty() {
            create_dir_all(&self.root)?;
        }
        let target = self.root.join(name);
        let temp = self.root.join(format!("{name}.part"));
        fs::write(&temp, bytes)?;
        fs::rename(&temp, &target).inspect_err(|_| {
            let _ = fs::remove_file(&temp);
        })
    }
}

fn check_file_name(name: &str) -> io::Result<()> {
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("'{name}' is not a plain file name"),
        )),
    }
}

/// One group as it was handed to the sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedGroup {
    pub key: String,
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Render and persist every group, in ascending key order.
///
/// Returns the rendered documents in the same order.
///
/// # Errors
/// - [`IngestError::SerializationFailed`] if a group cannot be rendered
/// - [`IngestError::PersistFailed`] if the sink rejects a document
pub fn write_groups<W: GroupSink + ?Sized>(
    groups: GroupCollection,
    sink: &W,
) -> IngestResult<Vec<RenderedGroup>> {
    let mut out = Vec::with_capacity(groups.len());
    for group in groups.into_sorted_vec() {
        let bytes = render_group(&group)?;
        let name = file_name(group.index());
        sink.persist(&name, &bytes)
            .map_err(|source| IngestError::PersistFailed {
                key: group.index().to_string(),
                source,
            })?;
        info!(key = group.index(), records = group.total_records(), file = %name, "wrote group");
        out.push(RenderedGroup {
            key: group.index().to_string(),
            file_name: name,
            bytes,
        });
    }
    Ok(out)
}
