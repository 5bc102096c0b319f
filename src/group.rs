//! Grouping stage: [`Group`], [`GroupCollection`] and [`group`].
//!
//! Records are bucketed by the first character of `first_name`, taken
//! literally (no case folding). A record with an empty first name has no key
//! and is rejected with [`IngestError::MalformedRecord`].

use std::collections::HashMap;
use std::collections::hash_map;

use serde::{Deserialize, Serialize};

use crate::combiners::{GroupByKey, combine_all};
use crate::error::{IngestError, IngestResult};
use crate::Record;

/// A bucket of records sharing one initial.
///
/// `total_records` is fixed when the group is built. Fields are private so the
/// record list cannot change behind the count's back, and decoding a document
/// whose count disagrees with its records fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "GroupDocument")]
pub struct Group {
    index: String,
    records: Vec<Record>,
    total_records: usize,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GroupDocument {
    index: String,
    records: Vec<Record>,
    total_records: usize,
}

impl TryFrom<GroupDocument> for Group {
    type Error = String;

    fn try_from(doc: GroupDocument) -> Result<Self, Self::Error> {
        let group = Self {
            index: doc.index,
            records: doc.records,
            total_records: doc.total_records,
        };
        if group.is_consistent() {
            Ok(group)
        } else {
            Err(format!(
                "group '{}' declares totalRecords {} but holds {} records",
                group.index,
                group.total_records,
                group.records.len()
            ))
        }
    }
}

impl Group {
    #[must_use]
    pub fn new(index: impl Into<String>, records: Vec<Record>) -> Self {
        let total_records = records.len();
        Self {
            index: index.into(),
            records,
            total_records,
        }
    }

    #[must_use]
    pub fn index(&self) -> &str {
        &self.index
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[must_use]
    pub const fn total_records(&self) -> usize {
        self.total_records
    }

    /// True when the stored count equals the number of records.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.total_records == self.records.len()
    }

    #[must_use]
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    #[cfg(test)]
    pub(crate) fn with_total_records(mut self, total_records: usize) -> Self {
        self.total_records = total_records;
        self
    }
}

/// Groups keyed by their index. Only keys that occur are present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupCollection {
    groups: HashMap<String, Group>,
}

impl GroupCollection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Group> {
        self.groups.get(key)
    }

    /// Keys in ascending order, for output that must not depend on hashing.
    #[must_use]
    pub fn sorted_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.groups.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// Iterate groups in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &Group> {
        self.groups.values()
    }

    /// Sum of every group's count.
    #[must_use]
    pub fn total_records(&self) -> usize {
        self.groups.values().map(Group::total_records).sum()
    }

    /// Consume the collection, returning groups sorted by key.
    #[must_use]
    pub fn into_sorted_vec(self) -> Vec<Group> {
        let mut groups: Vec<Group> = self.groups.into_values().collect();
        groups.sort_unstable_by(|a, b| a.index.cmp(&b.index));
        groups
    }
}

impl FromIterator<Group> for GroupCollection {
    /// A later group with an already-seen key replaces the earlier one.
    fn from_iter<I: IntoIterator<Item = Group>>(iter: I) -> Self {
        Self {
            groups: iter
                .into_iter()
                .map(|g| (g.index.clone(), g))
                .collect(),
        }
    }
}

impl IntoIterator for GroupCollection {
    type Item = (String, Group);
    type IntoIter = hash_map::IntoIter<String, Group>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

/// Derive the grouping key: the first character of `first_name`, as written.
///
/// # Errors
/// [`IngestError::MalformedRecord`] when `first_name` is empty.
pub fn group_key(record: &Record) -> IngestResult<String> {
    record
        .first_name
        .chars()
        .next()
        .map(String::from)
        .ok_or_else(|| {
            IngestError::MalformedRecord(format!(
                "record with email '{}' has an empty first name",
                record.email
            ))
        })
}

/// Partition `records` by [`group_key`].
///
/// Every input record lands in exactly one group. The first record without a
/// key aborts the whole stage.
///
/// # Errors
/// [`IngestError::MalformedRecord`] if any record has an empty first name.
pub fn group(records: Vec<Record>) -> IngestResult<GroupCollection> {
    let keyed = records
        .into_iter()
        .map(|r| group_key(&r).map(|k| (k, r)))
        .collect::<IngestResult<Vec<(String, Record)>>>()?;
    Ok(combine_all(&GroupByKey, keyed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn named(first: &str) -> Record {
        Record::new(first, "Doe", "d@x", "1 Main St", "2022-01-01", "$1")
    }

    #[test]
    fn key_is_first_char_without_folding() {
        assert_eq!(group_key(&named("john")).unwrap(), "j");
        assert_eq!(group_key(&named("John")).unwrap(), "J");
        assert_eq!(group_key(&named("Ægir")).unwrap(), "Æ");
    }

    #[test]
    fn empty_first_name_is_rejected() {
        let err = group(vec![named("Ann"), named("")]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedRecord);
        assert!(err.to_string().contains("d@x"));
    }

    #[test]
    fn sorted_keys_are_ascending() {
        let groups = group(vec![named("Zed"), named("Bo"), named("Al")]).unwrap();
        assert_eq!(groups.sorted_keys(), vec!["A", "B", "Z"]);
        let indexes: Vec<String> = groups
            .into_sorted_vec()
            .into_iter()
            .map(|g| g.index().to_string())
            .collect();
        assert_eq!(indexes, vec!["A", "B", "Z"]);
    }

    #[test]
    fn decoding_rejects_count_mismatch() {
        let doc = r#"{"index":"A","records":[],"totalRecords":2}"#;
        let err = serde_json::from_str::<Group>(doc).unwrap_err();
        assert!(err.to_string().contains("totalRecords 2"));
    }
}
