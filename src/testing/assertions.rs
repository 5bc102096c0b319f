//! Assertion functions for stage outputs.

use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

use crate::group::{GroupCollection, group_key};
use crate::record::Record;

/// Assert that no two elements of `items` are equal.
///
/// # Panics
///
/// Panics naming the first repeated element.
///
/// # Example
///
/// ```
/// use letterbeam::testing::assert_no_duplicates;
///
/// assert_no_duplicates(&[1, 2, 3]);
/// ```
pub fn assert_no_duplicates<T: Debug + Eq + Hash>(items: &[T]) {
    let mut seen = HashSet::with_capacity(items.len());
    for item in items {
        assert!(seen.insert(item), "duplicate element: {item:?}");
    }
}

/// Assert that `groups` is an exact partition of `records` by initial.
///
/// Checks that every group's count matches its records, that every record
/// sits under its own key, and that the multiset union of all groups equals
/// `records`.
///
/// # Panics
///
/// Panics on the first violated property.
pub fn assert_partition(groups: &GroupCollection, records: &[Record]) {
    let mut grouped: Vec<&Record> = Vec::with_capacity(records.len());
    for group in groups.iter() {
        assert!(
            group.is_consistent(),
            "group '{}' count {} != {} records",
            group.index(),
            group.total_records(),
            group.records().len()
        );
        for record in group.records() {
            let key = group_key(record).expect("grouped record must have a key");
            assert_eq!(key, group.index(), "record {record:?} filed under wrong key");
            grouped.push(record);
        }
    }

    let mut expected: Vec<&Record> = records.iter().collect();
    let order = |a: &&Record, b: &&Record| {
        (&a.first_name, &a.last_name, &a.email, &a.address, &a.created_date, &a.balance).cmp(&(
            &b.first_name,
            &b.last_name,
            &b.email,
            &b.address,
            &b.created_date,
            &b.balance,
        ))
    };
    grouped.sort_by(order);
    expected.sort_by(order);
    assert_eq!(grouped, expected, "groups do not partition the input");
}
