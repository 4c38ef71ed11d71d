use std::collections::btree_map;
use std::collections::BTreeMap;

use super::lookup::CheckerIndex;
use crate::record::CheckerRecord;
use crate::report::LoadReport;

/// Checker records keyed by id, with the id's casing as it appeared in the resource.
/// Iteration follows byte-wise id order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    records: BTreeMap<String, CheckerRecord>,
    report: LoadReport,
}

impl Catalog {
    pub const fn empty() -> Self {
        Self {
            records: BTreeMap::new(),
            report: LoadReport::empty(),
        }
    }

    pub(crate) fn with_report(report: LoadReport) -> Self {
        Self {
            records: BTreeMap::new(),
            report,
        }
    }

    /// Build a catalog from records directly; later records win on id collision.
    pub fn from_records(records: impl IntoIterator<Item = CheckerRecord>) -> Self {
        let mut catalog = Self::empty();
        for record in records {
            catalog.insert(record);
        }
        catalog
    }

    /// Insert a record, returning the one it replaced.
    pub(crate) fn insert(&mut self, record: CheckerRecord) -> Option<CheckerRecord> {
        self.records.insert(record.id().to_string(), record)
    }

    pub(crate) fn report_mut(&mut self) -> &mut LoadReport {
        &mut self.report
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Exact, case-sensitive fetch by stored id
    pub fn get(&self, id: &str) -> Option<&CheckerRecord> {
        self.records.get(id)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, CheckerRecord> {
        self.records.iter()
    }

    pub fn records(&self) -> impl Iterator<Item = &CheckerRecord> {
        self.records.values()
    }

    /// How the catalog was built
    pub fn report(&self) -> &LoadReport {
        &self.report
    }

    /// Case-insensitive lookup view over this catalog.
    pub fn index(&self) -> CheckerIndex<'_> {
        CheckerIndex::new(self)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = (&'a String, &'a CheckerRecord);
    type IntoIter = btree_map::Iter<'a, String, CheckerRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
