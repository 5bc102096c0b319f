//! `GroupByKey`: bucket keyed records into a [`GroupCollection`].

use std::collections::HashMap;

use super::CombineFn;
use crate::group::{Group, GroupCollection};
use crate::Record;

/// Collects `(key, Record)` pairs into per-key buckets.
///
/// Records inside a bucket keep the order in which they were added. Each
/// [`Group`] is built in `finish`, so its count is taken from the final bucket.
#[derive(Clone, Copy, Debug, Default)]
pub struct GroupByKey;

impl CombineFn<(String, Record), HashMap<String, Vec<Record>>, GroupCollection> for GroupByKey {
    fn create(&self) -> HashMap<String, Vec<Record>> {
        HashMap::new()
    }

    fn add_input(&self, acc: &mut HashMap<String, Vec<Record>>, (key, record): (String, Record)) {
        acc.entry(key).or_default().push(record);
    }

    fn finish(&self, acc: HashMap<String, Vec<Record>>) -> GroupCollection {
        acc.into_iter()
            .map(|(key, records)| Group::new(key, records))
            .collect()
    }
}
