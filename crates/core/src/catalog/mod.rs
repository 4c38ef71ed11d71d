//! The built catalog and the read-only views over it.
//!
//! `Catalog` owns every record; `CheckerIndex` borrows it for case-insensitive
//! lookups, and `SharedCatalog` builds it exactly once on first use.

pub mod lookup;
pub mod shared;
pub mod store;

pub use lookup::CheckerIndex;
pub use shared::SharedCatalog;
pub use store::Catalog;
