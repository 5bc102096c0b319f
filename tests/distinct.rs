use letterbeam::testing::*;
use letterbeam::*;
use std::collections::HashSet;

fn as_set(v: Vec<Record>) -> HashSet<Record> {
    v.into_iter().collect()
}

#[test]
fn duplicates_removed() {
    let input = vec![
        Record::new("John", "Doe", "john@example.com", "123 Main St", "01/01/2021", "$100"),
        Record::new("John", "Doe", "john@example.com", "123 Main St", "01/01/2021", "$100"),
        Record::new("Maria", "Maria", "maria@example.com", "456 Main St", "01/02/2021", "$200"),
        Record::new("Ion", "Jon", "ion@example.com", "456 Main St", "01/02/2021", "$200"),
    ];
    let out = dedupe(input.clone());
    assert_eq!(out.len(), 3);
    assert_no_duplicates(&out);
    assert_eq!(as_set(out), as_set(input));
}

#[test]
fn distinct_input_unchanged_as_set() {
    let input = sample_records();
    let out = dedupe(input.clone());
    assert_eq!(out.len(), input.len());
    assert_eq!(as_set(out), as_set(input));
}

#[test]
fn idempotent() {
    let once = dedupe(mixed_records());
    let twice = dedupe(once.clone());
    assert_eq!(as_set(once), as_set(twice));
}

#[test]
fn every_output_comes_from_input() {
    let input = mixed_records();
    let out = dedupe(input.clone());
    assert_no_duplicates(&out);
    for r in &out {
        assert!(input.contains(r), "{r:?} not in input");
    }
}

#[test]
fn works_through_combine_all() {
    let mut v = combine_all(&DistinctSet::<&str>::new(), ["x", "y", "x"]);
    v.sort_unstable();
    assert_eq!(v, vec!["x", "y"]);
}
