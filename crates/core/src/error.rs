use std::io;

use thiserror::Error;

use crate::record::Category;

/// Everything that can go wrong while building a catalog.
///
/// Under the default [`OnParseError::SkipFile`](crate::loader::OnParseError)
/// policy none of these reach the caller; they are logged and the offending
/// root or resource is left out of the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The resource root could not be resolved or listed.
    #[error("cannot enumerate resources under {root}: {reason}")]
    Discovery { root: String, reason: String },

    /// A listed resource could not be opened or read.
    #[error("cannot read resource {resource}: {source}")]
    Stream {
        resource: String,
        #[source]
        source: io::Error,
    },

    /// A record lacks one of its category's required fields, or it is empty.
    #[error("{resource}: {category} record #{index} has no value for required field '{field}'")]
    Validation {
        resource: String,
        category: Category,
        index: usize,
        field: &'static str,
    },

    /// The document does not have the `dacg` / category / `checker_meta_data` shape.
    #[error("{resource}: invalid DACG document: {reason}")]
    Structural { resource: String, reason: String },
}

impl CatalogError {
    /// Name of the resource the error is attached to, if it concerns a single file.
    pub fn resource(&self) -> Option<&str> {
        match self {
            CatalogError::Discovery { .. } => None,
            CatalogError::Stream { resource, .. }
            | CatalogError::Validation { resource, .. }
            | CatalogError::Structural { resource, .. } => Some(resource),
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_names_field() {
        let err = CatalogError::Validation {
            resource: "dacg_info.json".to_string(),
            category: Category::Npm,
            index: 2,
            field: "id",
        };
        let msg = err.to_string();
        assert!(msg.contains("npm record #2"), "{msg}");
        assert!(msg.contains("'id'"), "{msg}");
        assert_eq!(err.resource(), Some("dacg_info.json"));
    }

    #[test]
    fn test_discovery_has_no_resource() {
        let err = CatalogError::Discovery {
            root: "/missing".to_string(),
            reason: "not found".to_string(),
        };
        assert!(err.resource().is_none());
    }
}
