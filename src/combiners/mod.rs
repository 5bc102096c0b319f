//! Combiners used by the dedupe and grouping stages.
//!
//! A combiner folds a stream of values into an accumulator and then turns the
//! accumulator into an output:
//!
//! - [`DistinctSet<T>`] -- exact set of distinct values, emitted as `Vec<T>`.
//! - [`GroupByKey`] -- `(key, Record)` pairs into a [`GroupCollection`](crate::GroupCollection).
//!
//! Both run through [`combine_all`], which drives one combiner over a whole
//! input in a single sequential pass.
//!
//! # Examples
//! ```
//! use letterbeam::combiners::{combine_all, DistinctSet};
//!
//! let mut v = combine_all(&DistinctSet::<u32>::new(), vec![3, 1, 3, 2, 1]);
//! v.sort();
//! assert_eq!(v, vec![1, 2, 3]);
//! ```

pub mod distinct;
pub mod group;

pub use distinct::DistinctSet;
pub use group::GroupByKey;

/// Accumulate-then-finish aggregation over values of type `V`.
///
/// `A` is the accumulator, `O` the finished output.
pub trait CombineFn<V, A, O> {
    fn create(&self) -> A;
    fn add_input(&self, acc: &mut A, v: V);
    fn finish(&self, acc: A) -> O;
}

/// Run `comb` over every value of `input` and return the finished output.
///
/// Empty input yields `finish(create())`.
pub fn combine_all<V, A, O, C, I>(comb: &C, input: I) -> O
where
    C: CombineFn<V, A, O> + ?Sized,
    I: IntoIterator<Item = V>,
{
    let mut acc = comb.create();
    for v in input {
        comb.add_input(&mut acc, v);
    }
    comb.finish(acc)
}
