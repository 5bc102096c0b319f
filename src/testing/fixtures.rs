//! Pre-built records and pages.

use crate::record::{Page, Record};

/// A record whose other fields are derived from `first` and `last`.
///
/// # Example
///
/// ```
/// use letterbeam::testing::person;
///
/// let r = person("Ada", "Lovelace");
/// assert_eq!(r.email, "ada.lovelace@example.com");
/// ```
#[must_use]
pub fn person(first: &str, last: &str) -> Record {
    Record::new(
        first,
        last,
        format!("{}.{}@example.com", first.to_lowercase(), last.to_lowercase()),
        format!("{} Main St", first.len() + last.len()),
        "2022-01-01",
        "$100.00",
    )
}

/// Three distinct records that all group under `"J"`.
#[must_use]
pub fn sample_records() -> Vec<Record> {
    vec![
        Record::new("John", "Doe", "johndoe@example.com", "1 Main St", "2022-01-01", "$100.00"),
        Record::new("Jane", "Doe", "janedoe@example.com", "2 Main St", "2022-01-02", "$200.00"),
        Record::new("Jim", "Smith", "jimsmith@example.com", "3 Main St", "2022-01-03", "$300.00"),
    ]
}

/// [`sample_records`] as one page.
#[must_use]
pub fn sample_page() -> Page {
    Page::new(sample_records())
}

/// Records spread over several initials, with one exact duplicate.
///
/// Five entries, four distinct, keys `A`, `B`, `J`, `M`.
#[must_use]
pub fn mixed_records() -> Vec<Record> {
    vec![
        person("John", "Doe"),
        person("Maria", "Ionescu"),
        person("John", "Doe"),
        person("Adam", "Smith"),
        person("Bob", "Johnson"),
    ]
}
