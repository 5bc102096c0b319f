//! Exact distinct: `DistinctSet` and the [`dedupe`] helper built on it.

use std::collections::HashSet;
use std::hash::Hash;
use std::marker::PhantomData;

use super::{CombineFn, combine_all};

/// Get the distinct elements over a stream: accumulates a `HashSet<T>` and outputs a `Vec<T>`.
///
/// Output order is the set's iteration order, which is unspecified.
#[derive(Clone, Copy, Debug)]
pub struct DistinctSet<T>(pub PhantomData<T>);

impl<T> DistinctSet<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for DistinctSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> CombineFn<T, HashSet<T>, Vec<T>> for DistinctSet<T>
where
    T: Eq + Hash,
{
    fn create(&self) -> HashSet<T> {
        HashSet::new()
    }
    fn add_input(&self, acc: &mut HashSet<T>, v: T) {
        acc.insert(v);
    }
    fn finish(&self, acc: HashSet<T>) -> Vec<T> {
        acc.into_iter().collect()
    }
}

/// Collapse `items` to one copy of each distinct value.
///
/// Equality is the type's own `Eq`/`Hash`; for [`Record`](crate::Record) that
/// means all six fields, compared exactly. The result carries no ordering.
///
/// # Example
/// ```
/// use letterbeam::dedupe;
///
/// let mut v = dedupe(vec!["b", "a", "b", "b"]);
/// v.sort();
/// assert_eq!(v, vec!["a", "b"]);
/// ```
#[must_use]
pub fn dedupe<T: Eq + Hash>(items: Vec<T>) -> Vec<T> {
    combine_all(&DistinctSet::<T>::new(), items)
}
