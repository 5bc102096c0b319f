//! JSON encoding at both ends of the pipeline.
//!
//! - [`decode_page`] parses one response body into a [`Page`]
//! - [`render_group`] produces the pretty-printed `<KEY>.json` document
//! - [`decode_group`] reads such a document back
//!
//! Group documents have the shape
//! `{ "index": <KEY>, "records": [...], "totalRecords": <int> }` in that field
//! order, indented with four spaces.

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::error::{IngestError, IngestResult};
use crate::group::Group;
use crate::record::Page;

/// File name for a group key.
#[must_use]
pub fn file_name(key: &str) -> String {
    format!("{key}.json")
}

/// Parse a response body. `origin` names the body in error messages.
///
/// Unknown top-level fields are ignored; a missing `results` array, a record
/// missing any of its six fields, or bytes that are not UTF-8 are errors.
///
/// # Errors
/// [`IngestError::DecodeFailed`] if the body is not a page.
pub fn decode_page(body: &[u8], origin: &str) -> IngestResult<Page> {
    serde_json::from_slice(body).map_err(|err| IngestError::DecodeFailed {
        origin: format!("page from '{origin}'"),
        reason: err.to_string(),
    })
}

/// Render a group as a pretty-printed JSON document.
///
/// # Errors
/// [`IngestError::SerializationFailed`] if encoding fails, or if the group's
/// count disagrees with its records. Public constructors and [`decode_group`]
/// keep the count in step, so only a group built inside the crate can hit the
/// second case.
pub fn render_group(group: &Group) -> IngestResult<Vec<u8>> {
    if !group.is_consistent() {
        return Err(IngestError::SerializationFailed {
            key: group.index().to_string(),
            reason: format!(
                "totalRecords {} does not match {} records",
                group.total_records(),
                group.records().len()
            ),
        });
    }
    let mut out = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(b"    "));
    group
        .serialize(&mut ser)
        .map_err(|err| IngestError::SerializationFailed {
            key: group.index().to_string(),
            reason: err.to_string(),
        })?;
    Ok(out)
}

/// Decode a document produced by [`render_group`].
///
/// # Errors
/// [`IngestError::DecodeFailed`] on malformed JSON or a count mismatch.
pub fn decode_group(bytes: &[u8]) -> IngestResult<Group> {
    serde_json::from_slice(bytes).map_err(|err| IngestError::DecodeFailed {
        origin: "group document".to_string(),
        reason: err.to_string(),
    })
}
