use serde::Serialize;

use crate::error::CatalogError;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LoadedResource {
    pub name: String,
    pub records: usize,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SkippedResource {
    pub name: String,
    pub reason: String,
}

/// What happened while a catalog was built: which resources contributed,
/// which were dropped and why.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LoadReport {
    pub location: String,
    pub discovery_error: Option<String>,
    pub loaded: Vec<LoadedResource>,
    pub skipped: Vec<SkippedResource>,
    /// Listed resources without a `.json` suffix
    pub ignored: Vec<String>,
    /// Records that replaced an earlier record with the same id
    pub overwritten: usize,
}

impl LoadReport {
    pub const fn empty() -> Self {
        Self {
            location: String::new(),
            discovery_error: None,
            loaded: Vec::new(),
            skipped: Vec::new(),
            ignored: Vec::new(),
            overwritten: 0,
        }
    }

    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            ..Self::empty()
        }
    }

    pub fn record_loaded(&mut self, name: &str, records: usize) {
        self.loaded.push(LoadedResource {
            name: name.to_string(),
            records,
        });
    }

    pub fn record_skipped(&mut self, name: &str, err: &CatalogError) {
        self.skipped.push(SkippedResource {
            name: name.to_string(),
            reason: err.to_string(),
        });
    }

    /// Records parsed across all loaded resources, before id collisions
    pub fn records_parsed(&self) -> usize {
        self.loaded.iter().map(|r| r.records).sum()
    }

    /// True when every listed JSON resource made it into the catalog.
    pub fn is_clean(&self) -> bool {
        self.discovery_error.is_none() && self.skipped.is_empty()
    }
}

impl Default for LoadReport {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_and_cleanliness() {
        let mut report = LoadReport::new("mem");
        report.record_loaded("a.json", 3);
        report.record_loaded("b.json", 2);
        assert_eq!(report.records_parsed(), 5);
        assert!(report.is_clean());

        let err = CatalogError::Structural {
            resource: "c.json".to_string(),
            reason: "missing 'dacg' root object".to_string(),
        };
        report.record_skipped("c.json", &err);
        assert!(!report.is_clean());
        assert!(report.skipped[0].reason.contains("'dacg'"));
    }
}
