use std::io::{self, Read};

use serde_json::{Map, Value};

use crate::error::{CatalogError, Result};
use crate::record::{Category, CheckerRecord, NamedRecord, NpmRecord, TargetedRecord};

/// Name of the root object in every DACG resource
pub const ROOT_KEY: &str = "dacg";
/// Name of the record array inside each category object
pub const RECORDS_KEY: &str = "checker_meta_data";

/// Parse one DACG resource into its records.
///
/// The whole document is rejected on the first problem: no records are
/// returned for a file with one bad entry. Records come back in category
/// order (npm, wp, iis, technote, zeroboard), then array order.
pub fn parse_document(resource: &str, reader: impl Read) -> Result<Vec<CheckerRecord>> {
    let doc: Value = serde_json::from_reader(reader).map_err(|e| {
        if e.is_io() {
            CatalogError::Stream {
                resource: resource.to_string(),
                source: io::Error::from(e),
            }
        } else {
            structural(resource, format!("malformed JSON: {e}"))
        }
    })?;

    let root = doc
        .get(ROOT_KEY)
        .and_then(Value::as_object)
        .ok_or_else(|| structural(resource, format!("missing '{ROOT_KEY}' root object")))?;

    let mut records = Vec::new();
    for category in Category::ALL {
        let entries = category_entries(resource, root, category)?;
        for (index, entry) in entries.iter().enumerate() {
            records.push(parse_record(resource, category, index, entry)?);
        }
    }
    Ok(records)
}

/// Parse a DACG document held in a string (useful for testing)
pub fn parse_str(resource: &str, json: &str) -> Result<Vec<CheckerRecord>> {
    parse_document(resource, json.as_bytes())
}

fn category_entries<'a>(
    resource: &str,
    root: &'a Map<String, Value>,
    category: Category,
) -> Result<&'a Vec<Value>> {
    let section = root
        .get(category.key())
        .and_then(Value::as_object)
        .ok_or_else(|| {
            structural(
                resource,
                format!("missing '{}' category object", category.key()),
            )
        })?;
    section
        .get(RECORDS_KEY)
        .and_then(Value::as_array)
        .ok_or_else(|| {
            structural(
                resource,
                format!("'{}' has no '{RECORDS_KEY}' array", category.key()),
            )
        })
}

fn parse_record(
    resource: &str,
    category: Category,
    index: usize,
    entry: &Value,
) -> Result<CheckerRecord> {
    let object = entry.as_object().ok_or_else(|| {
        structural(
            resource,
            format!("{category} record #{index} is not an object"),
        )
    })?;

    let field = |name: &'static str| required_string(resource, category, index, object, name);

    let record = match category {
        Category::Npm => CheckerRecord::Npm(NpmRecord {
            library: field("library")?,
            version_interval: field("versionInterval")?,
            vulnerability: field("vulnerability")?,
            id: field("id")?,
        }),
        Category::Wp | Category::Iis => {
            let payload = TargetedRecord {
                target: field("target")?,
                name: field("name")?,
                vulnerability: field("vulnerability")?,
                version_interval: field("versionInterval")?,
                id: field("id")?,
            };
            if category == Category::Wp {
                CheckerRecord::Wp(payload)
            } else {
                CheckerRecord::Iis(payload)
            }
        }
        Category::Technote | Category::Zeroboard => {
            let payload = NamedRecord {
                name: field("name")?,
                vulnerability: field("vulnerability")?,
                version_interval: field("versionInterval")?,
                id: field("id")?,
            };
            if category == Category::Technote {
                CheckerRecord::Technote(payload)
            } else {
                CheckerRecord::Zeroboard(payload)
            }
        }
    };
    Ok(record)
}

/// A required field must be present and a non-empty string.
/// `null` counts as missing; any other non-string type breaks the document shape.
fn required_string(
    resource: &str,
    category: Category,
    index: usize,
    object: &Map<String, Value>,
    field: &'static str,
) -> Result<String> {
    match object.get(field) {
        Some(Value::String(s)) if !s.is_empty() => Ok(s.clone()),
        None | Some(Value::Null) | Some(Value::String(_)) => Err(CatalogError::Validation {
            resource: resource.to_string(),
            category,
            index,
            field,
        }),
        Some(_) => Err(structural(
            resource,
            format!("{category} record #{index}: field '{field}' is not a string"),
        )),
    }
}

fn structural(resource: &str, reason: impl Into<String>) -> CatalogError {
    CatalogError::Structural {
        resource: resource.to_string(),
        reason: reason.into(),
    }
}
