use std::io::Read;

use crate::error::Result;

/// A place DACG resources can be listed and read from.
/// Implementors only enumerate; picking `.json` entries is the loader's job.
pub trait ResourceSource: Send + Sync {
    /// Human-readable location of the resource root, used in logs and errors
    fn location(&self) -> String;

    /// Names of every resource under the root, in load order.
    /// Fails with `CatalogError::Discovery` when the root cannot be resolved or read.
    fn list(&self) -> Result<Vec<String>>;

    /// Open one listed resource as a byte stream.
    /// Fails with `CatalogError::Stream` when the resource cannot be opened.
    fn open(&self, name: &str) -> Result<Box<dyn Read + Send + '_>>;
}
