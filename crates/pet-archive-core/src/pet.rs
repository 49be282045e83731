//! Pet record: one CSV row keyed by the header row.
//!
//! Column contract, applied by [`Pet::from_row`]:
//! - cell `i` of a row is stored under header `i`;
//! - a row shorter than the header has no entry for the missing columns;
//! - cells past the last header column are dropped;
//! - a repeated header name keeps the last cell for that name.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One pet from the archive, as a column name -> cell value mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pet(BTreeMap<String, String>);

impl Pet {
    /// Builds a pet from a header row and one data row.
    ///
    /// Returns the pet and the number of cells dropped because the row was
    /// longer than the header.
    pub fn from_row<'h, 'r, H, R>(headers: H, row: R) -> (Self, usize)
    where
        H: IntoIterator<Item = &'h str>,
        R: IntoIterator<Item = &'r str>,
    {
        let mut columns = BTreeMap::new();
        let mut headers = headers.into_iter();
        let mut dropped = 0;
        for cell in row {
            match headers.next() {
                Some(name) => {
                    columns.insert(name.to_string(), cell.to_string());
                }
                None => dropped += 1,
            }
        }
        (Pet(columns), dropped)
    }

    /// Value of `column`, if this row had a cell for it.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.0.get(column).map(String::as_str)
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> BTreeMap<String, String> {
        self.0
    }
}

impl From<BTreeMap<String, String>> for Pet {
    fn from(columns: BTreeMap<String, String>) -> Self {
        Pet(columns)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Pet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Pet(iter
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect())
    }
}
