use std::collections::{BTreeSet, HashSet};

use super::store::Catalog;
use crate::record::CheckerRecord;

/// Read-only, case-insensitive lookup over a [`Catalog`].
#[derive(Debug, Clone, Copy)]
pub struct CheckerIndex<'a> {
    catalog: &'a Catalog,
}

impl<'a> CheckerIndex<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Records whose id matches any of `ids`, ignoring case.
    ///
    /// Walks the catalog rather than the input: unknown ids are dropped,
    /// a record is returned at most once however many inputs match it, and
    /// results come back in catalog order.
    pub fn get_info_list<S: AsRef<str>>(&self, ids: &[S]) -> Vec<&'a CheckerRecord> {
        if ids.is_empty() {
            return Vec::new();
        }
        let wanted: HashSet<String> = ids.iter().map(|id| normalize(id.as_ref())).collect();
        self.catalog
            .iter()
            .filter(|(key, _)| wanted.contains(&normalize(key)))
            .map(|(_, record)| record)
            .collect()
    }

    /// Every stored checker id.
    ///
    /// Diagnostic accessor for tooling and tests; not a stable part of the API
    /// and may be removed.
    pub fn all_checker_ids(&self) -> BTreeSet<&'a str> {
        self.catalog.iter().map(|(key, _)| key.as_str()).collect()
    }
}

fn normalize(id: &str) -> String {
    id.to_uppercase()
}
