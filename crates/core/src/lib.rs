//! Loader and lookup index for the DACG checker metadata catalog.
//!
//! JSON resources are enumerated from a [`resource::ResourceSource`], parsed
//! into typed [`record::CheckerRecord`]s and merged into a
//! [`catalog::Catalog`] keyed by checker id. Consumers query it through
//! [`catalog::CheckerIndex`], usually via a once-built
//! [`catalog::SharedCatalog`].

pub mod catalog;
pub mod config;
pub mod error;
pub mod loader;
pub mod record;
pub mod report;
pub mod resource;

pub use catalog::{Catalog, CheckerIndex, SharedCatalog};
pub use error::{CatalogError, Result};
pub use record::{Category, CheckerRecord};
