use rayon::prelude::*;
use serde::Deserialize;
use tracing::{debug, error, info, warn};

use super::parser::parse_document;
use crate::catalog::Catalog;
use crate::error::{CatalogError, Result};
use crate::record::CheckerRecord;
use crate::report::LoadReport;
use crate::resource::ResourceSource;

/// What the loader does when a resource (or the resource root) cannot be used.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OnParseError {
    /// Log the problem, leave the resource out and keep going.
    #[default]
    SkipFile,
    /// Stop at the first problem and return it.
    Abort,
}

/// Turns the JSON resources of a [`ResourceSource`] into a [`Catalog`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CatalogLoader {
    policy: OnParseError,
}

impl CatalogLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: OnParseError) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> OnParseError {
        self.policy
    }

    /// Build a catalog, never failing.
    ///
    /// Under `Abort` an error still ends the load early, but it is logged and
    /// an empty catalog carrying the failure in its report comes back instead.
    pub fn load(&self, source: &dyn ResourceSource) -> Catalog {
        match self.try_load(source) {
            Ok(catalog) => catalog,
            Err(err) => {
                error!(location = %source.location(), error = %err, "DACG catalog load aborted");
                let mut report = LoadReport::new(source.location());
                match &err {
                    CatalogError::Discovery { .. } => report.discovery_error = Some(err.to_string()),
                    _ => report.record_skipped(err.resource().unwrap_or_default(), &err),
                }
                Catalog::with_report(report)
            }
        }
    }

    /// Build a catalog from every `.json` resource in `source`.
    ///
    /// Files are parsed in parallel but merged one after another in listing
    /// order, so a later file overwrites ids defined by an earlier one.
    /// With `SkipFile` this only returns `Ok`.
    pub fn try_load(&self, source: &dyn ResourceSource) -> Result<Catalog> {
        let location = source.location();
        let mut catalog = Catalog::with_report(LoadReport::new(&location));

        let names = match source.list() {
            Ok(names) => names,
            Err(err) => {
                if self.policy == OnParseError::Abort {
                    return Err(err);
                }
                error!(location = %location, error = %err, "Failed to enumerate DACG resources");
                catalog.report_mut().discovery_error = Some(err.to_string());
                return Ok(catalog);
            }
        };

        let (json, other): (Vec<String>, Vec<String>) =
            names.into_iter().partition(|name| is_json_resource(name));
        catalog.report_mut().ignored = other;

        let parsed: Vec<(String, Result<Vec<CheckerRecord>>)> = json
            .into_par_iter()
            .map(|name| {
                let outcome = read_resource(source, &name);
                (name, outcome)
            })
            .collect();

        for (name, outcome) in parsed {
            match outcome {
                Ok(records) => {
                    debug!(resource = %name, records = records.len(), "Loaded DACG resource");
                    catalog.report_mut().record_loaded(&name, records.len());
                    for record in records {
                        if let Some(previous) = catalog.insert(record) {
                            debug!(resource = %name, id = %previous.id(), "Checker id redefined");
                            catalog.report_mut().overwritten += 1;
                        }
                    }
                }
                Err(err) => {
                    if self.policy == OnParseError::Abort {
                        return Err(err);
                    }
                    log_skipped(&name, &err);
                    catalog.report_mut().record_skipped(&name, &err);
                }
            }
        }

        info!(
            location = %location,
            checkers = catalog.len(),
            skipped = catalog.report().skipped.len(),
            "DACG catalog loaded"
        );
        Ok(catalog)
    }
}

/// Build a catalog with the default best-effort policy.
pub fn load(source: &dyn ResourceSource) -> Catalog {
    CatalogLoader::new().load(source)
}

/// Case-insensitive `.json` suffix check
pub fn is_json_resource(name: &str) -> bool {
    name.to_lowercase().ends_with(".json")
}

fn read_resource(source: &dyn ResourceSource, name: &str) -> Result<Vec<CheckerRecord>> {
    let reader = source.open(name)?;
    parse_document(name, reader)
}

fn log_skipped(name: &str, err: &CatalogError) {
    match err {
        CatalogError::Stream { .. } | CatalogError::Discovery { .. } => {
            warn!(resource = %name, error = %err, "Invalid stream of DACG resource, skipping")
        }
        CatalogError::Validation { .. } | CatalogError::Structural { .. } => {
            error!(resource = %name, error = %err, "Invalid DACG JSON resource, skipping")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::EmbeddedSource;

    const EMPTY_DOC: &str = r#"{"dacg":{"npm":{"checker_meta_data":[]},"wp":{"checker_meta_data":[]},"iis":{"checker_meta_data":[]},"technote":{"checker_meta_data":[]},"zeroboard":{"checker_meta_data":[]}}}"#;

    #[test]
    fn test_json_suffix_is_case_insensitive() {
        assert!(is_json_resource("dacg_info.json"));
        assert!(is_json_resource("nested/DACG.JSON"));
        assert!(!is_json_resource("dacg.json.bak"));
        assert!(!is_json_resource("readme.md"));
    }

    #[test]
    fn test_non_json_resources_are_ignored() {
        let source = EmbeddedSource::new("mem")
            .with_resource("a.json", EMPTY_DOC)
            .with_resource("notes.txt", "not json at all");
        let catalog = load(&source);
        assert!(catalog.is_empty());
        assert!(catalog.report().is_clean());
        assert_eq!(catalog.report().ignored, vec!["notes.txt"]);
        assert_eq!(catalog.report().loaded.len(), 1);
    }

    #[test]
    fn test_policy_parses_from_config_value() {
        #[derive(Deserialize)]
        struct Wrapper {
            policy: OnParseError,
        }
        let w: Wrapper = toml::from_str("policy = \"abort\"").unwrap();
        assert_eq!(w.policy, OnParseError::Abort);
        let w: Wrapper = toml::from_str("policy = \"skip-file\"").unwrap();
        assert_eq!(w.policy, OnParseError::SkipFile);
    }

    #[test]
    fn test_abort_returns_first_error_in_listing_order() {
        let source = EmbeddedSource::new("mem")
            .with_resource("a.json", EMPTY_DOC)
            .with_resource("b.json", "{}")
            .with_resource("c.json", "[");
        let err = CatalogLoader::with_policy(OnParseError::Abort)
            .try_load(&source)
            .unwrap_err();
        assert_eq!(err.resource(), Some("b.json"));
    }

    #[test]
    fn test_abort_load_degrades_to_empty_catalog() {
        let source = EmbeddedSource::new("mem").with_resource("b.json", "{}");
        let catalog = CatalogLoader::with_policy(OnParseError::Abort).load(&source);
        assert!(catalog.is_empty());
        assert_eq!(catalog.report().skipped.len(), 1);
        assert_eq!(catalog.report().skipped[0].name, "b.json");
    }
}
