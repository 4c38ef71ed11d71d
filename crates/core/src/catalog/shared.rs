use std::collections::BTreeSet;
use std::sync::OnceLock;

use super::store::Catalog;
use crate::loader::CatalogLoader;
use crate::record::CheckerRecord;
use crate::resource::{EmbeddedSource, ResourceSource};

/// A catalog that is built from its source the first time anyone asks for it.
///
/// Concurrent first calls block on a single build and all observe the same
/// catalog. Owned by whatever wires the application together and handed to
/// consumers by reference.
pub struct SharedCatalog {
    source: Box<dyn ResourceSource>,
    loader: CatalogLoader,
    cell: OnceLock<Catalog>,
}

impl SharedCatalog {
    pub fn new(source: impl ResourceSource + 'static) -> Self {
        Self::with_loader(source, CatalogLoader::new())
    }

    pub fn with_loader(source: impl ResourceSource + 'static, loader: CatalogLoader) -> Self {
        Self {
            source: Box::new(source),
            loader,
            cell: OnceLock::new(),
        }
    }

    /// The catalog compiled into this crate.
    pub fn bundled() -> Self {
        Self::new(EmbeddedSource::bundled())
    }

    /// The catalog, building it on first access.
    pub fn get(&self) -> &Catalog {
        self.cell
            .get_or_init(|| self.loader.load(self.source.as_ref()))
    }

    pub fn is_loaded(&self) -> bool {
        self.cell.get().is_some()
    }

    /// Records matching any of `ids`, ignoring case. See [`CheckerIndex::get_info_list`](super::CheckerIndex::get_info_list).
    pub fn get_info_list<S: AsRef<str>>(&self, ids: &[S]) -> Vec<&CheckerRecord> {
        self.get().index().get_info_list(ids)
    }

    /// Every stored checker id. Diagnostic only; may be removed.
    pub fn all_checker_ids(&self) -> BTreeSet<&str> {
        self.get().index().all_checker_ids()
    }
}

impl std::fmt::Debug for SharedCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedCatalog")
            .field("location", &self.source.location())
            .field("loader", &self.loader)
            .field("loaded", &self.is_loaded())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::thread;

    use crate::error::Result;

    /// Wraps a source and counts how many times it was enumerated.
    struct CountingSource {
        inner: EmbeddedSource,
        lists: Arc<AtomicUsize>,
    }

    impl ResourceSource for CountingSource {
        fn location(&self) -> String {
            self.inner.location()
        }

        fn list(&self) -> Result<Vec<String>> {
            self.lists.fetch_add(1, Ordering::SeqCst);
            self.inner.list()
        }

        fn open(&self, name: &str) -> Result<Box<dyn Read + Send + '_>> {
            self.inner.open(name)
        }
    }

    #[test]
    fn test_loads_lazily() {
        let shared = SharedCatalog::bundled();
        assert!(!shared.is_loaded());
        assert!(!shared.get().is_empty());
        assert!(shared.is_loaded());
    }

    #[test]
    fn test_concurrent_first_access_builds_once() {
        let lists = Arc::new(AtomicUsize::new(0));
        let shared = SharedCatalog::new(CountingSource {
            inner: EmbeddedSource::bundled(),
            lists: Arc::clone(&lists),
        });

        let shared_ref = &shared;
        let addresses: Vec<usize> = thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| scope.spawn(move || shared_ref.get() as *const Catalog as usize))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert_eq!(lists.load(Ordering::SeqCst), 1);
        assert!(addresses.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn test_lookup_through_shared_catalog() {
        let shared = SharedCatalog::bundled();
        let found = shared.get_info_list(&["dacg.npm.jquery_xss"]);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id(), "DACG.NPM.JQUERY_XSS");
        assert!(shared.all_checker_ids().contains("DACG.IIS.WEBDAV_BUFFER_OVERFLOW"));
    }
}
