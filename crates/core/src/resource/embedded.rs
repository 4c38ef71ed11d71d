use std::borrow::Cow;
use std::io::{self, Cursor, Read};

use super::traits::ResourceSource;
use crate::error::{CatalogError, Result};

/// Catalog resources shipped inside the crate
const BUNDLED: &[(&str, &str)] = &[(
    "dacg_info.json",
    include_str!("../../resources/dacg/dacg_info.json"),
)];

/// Resources held in memory, listed in the order they were added.
#[derive(Debug, Clone, Default)]
pub struct EmbeddedSource {
    label: String,
    entries: Vec<(String, Cow<'static, str>)>,
}

impl EmbeddedSource {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            entries: Vec::new(),
        }
    }

    /// The catalog compiled into this crate.
    pub fn bundled() -> Self {
        let mut source = Self::new("bundled:dacg");
        for (name, contents) in BUNDLED {
            source
                .entries
                .push((name.to_string(), Cow::Borrowed(*contents)));
        }
        source
    }

    /// Add a resource; it is listed after every resource added before it.
    pub fn with_resource(mut self, name: impl Into<String>, contents: impl Into<String>) -> Self {
        self.entries
            .push((name.into(), Cow::Owned(contents.into())));
        self
    }
}

impl ResourceSource for EmbeddedSource {
    fn location(&self) -> String {
        self.label.clone()
    }

    fn list(&self) -> Result<Vec<String>> {
        Ok(self.entries.iter().map(|(name, _)| name.clone()).collect())
    }

    fn open(&self, name: &str) -> Result<Box<dyn Read + Send + '_>> {
        let (_, contents) = self
            .entries
            .iter()
            .find(|(n, _)| n == name)
            .ok_or_else(|| CatalogError::Stream {
                resource: name.to_string(),
                source: io::Error::new(io::ErrorKind::NotFound, "no such embedded resource"),
            })?;
        Ok(Box::new(Cursor::new(contents.as_bytes())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_keeps_insertion_order() {
        let source = EmbeddedSource::new("test")
            .with_resource("z.json", "{}")
            .with_resource("a.json", "{}");
        assert_eq!(source.list().unwrap(), vec!["z.json", "a.json"]);
    }

    #[test]
    fn test_bundled_lists_catalog() {
        let source = EmbeddedSource::bundled();
        let names = source.list().unwrap();
        assert!(names.iter().any(|n| n == "dacg_info.json"));
    }

    #[test]
    fn test_open_unknown_is_stream_error() {
        let source = EmbeddedSource::new("test");
        let err = source.open("nope.json").err().unwrap();
        assert!(matches!(err, CatalogError::Stream { .. }));
    }
}
