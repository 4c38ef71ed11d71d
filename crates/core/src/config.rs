use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

use crate::catalog::SharedCatalog;
use crate::loader::{CatalogLoader, OnParseError};
use crate::resource::{DirectorySource, EmbeddedSource};

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = ".dacg.toml";

/// Project-level configuration loaded from `.dacg.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub catalog: CatalogConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Directory of DACG JSON resources; the bundled catalog when unset
    pub resource_root: Option<PathBuf>,
    pub on_parse_error: OnParseError,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Load config from a TOML file path. Returns default config if file doesn't exist.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;
        Ok(config)
    }

    pub fn loader(&self) -> CatalogLoader {
        CatalogLoader::with_policy(self.catalog.on_parse_error)
    }

    /// A lazily built catalog over the configured resources.
    /// A relative `resource_root` is resolved against `base_dir`.
    pub fn catalog(&self, base_dir: &Path) -> SharedCatalog {
        match &self.catalog.resource_root {
            Some(root) => SharedCatalog::with_loader(
                DirectorySource::new(base_dir.join(root)),
                self.loader(),
            ),
            None => SharedCatalog::with_loader(EmbeddedSource::bundled(), self.loader()),
        }
    }

    /// Generate default config file content.
    pub fn default_toml() -> &'static str {
        r#"# dacg configuration

[catalog]
# Directory holding DACG *.json resources. Unset: use the bundled catalog.
# resource_root = "resources/dacg"
# What to do with a resource that cannot be read or parsed:
# "skip-file" (log and leave it out) or "abort" (fail the whole load)
on_parse_error = "skip-file"

[logging]
# Default log level when RUST_LOG is not set
level = "warn"
"#
    }
}
