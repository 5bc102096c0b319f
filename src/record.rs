//! Wire types for the remote source: [`Record`] and [`Page`].

use serde::{Deserialize, Serialize};

/// One person/account row as served by the remote endpoint.
///
/// Every field is an opaque string. Nothing is trimmed, parsed or case-folded,
/// so two records are equal only when all six fields match byte for byte.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "first")]
    pub first_name: String,
    #[serde(rename = "last")]
    pub last_name: String,
    pub email: String,
    pub address: String,
    #[serde(rename = "created")]
    pub created_date: String,
    pub balance: String,
}

impl Record {
    #[must_use]
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        address: impl Into<String>,
        created_date: impl Into<String>,
        balance: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            address: address.into(),
            created_date: created_date.into(),
            balance: balance.into(),
        }
    }
}

/// Decoded body of one response: `{"results": [...]}`.
///
/// The protocol has no cursor. Each request returns a fresh page that may
/// overlap with earlier ones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub results: Vec<Record>,
}

impl Page {
    #[must_use]
    pub const fn new(results: Vec<Record>) -> Self {
        Self { results }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

impl From<Vec<Record>> for Page {
    fn from(results: Vec<Record>) -> Self {
        Self::new(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_are_short() {
        let r = Record::new("John", "Doe", "j@x", "1 Main St", "2022-01-01", "$1.00");
        let v = serde_json::to_value(&r).unwrap();
        let obj = v.as_object().unwrap();
        let mut keys: Vec<_> = obj.keys().cloned().collect();
        keys.sort();
        assert_eq!(
            keys,
            vec!["address", "balance", "created", "email", "first", "last"]
        );
    }

    #[test]
    fn equality_is_exact() {
        let a = Record::new("John", "Doe", "j@x", "1 Main St", "2022-01-01", "$1.00");
        let mut b = a.clone();
        assert_eq!(a, b);
        b.created_date = "2022-01-01 ".into();
        assert_ne!(a, b);
    }
}
