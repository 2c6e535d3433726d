//! Catalog Cache - Load-once holder for the food catalog
//!
//! The first successful load is shared by every later caller without copying.
//! Concurrent first calls wait for a single load instead of racing. A failed
//! load is not remembered, so the next call tries again.

use crate::data::FoodCatalog;
use crate::error::CatalogError;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

/// Lazily-populated, thread-safe food catalog holder
pub struct CatalogCache {
    path: PathBuf,
    catalog: OnceLock<Arc<FoodCatalog>>,
    load_lock: Mutex<()>,
}

impl CatalogCache {
    /// Cache for the catalog at `path`; nothing is read until first use
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            catalog: OnceLock::new(),
            load_lock: Mutex::new(()),
        }
    }

    /// Cache that is already populated (tests, embedded catalogs)
    pub fn with_catalog(path: impl Into<PathBuf>, catalog: FoodCatalog) -> Self {
        let cache = Self::new(path);
        let _ = cache.catalog.set(Arc::new(catalog));
        cache
    }

    /// Shared catalog, loading it on first call
    pub fn get_or_load(&self) -> Result<Arc<FoodCatalog>, CatalogError> {
        if let Some(catalog) = self.catalog.get() {
            return Ok(Arc::clone(catalog));
        }

        let _guard = self.load_lock.lock().unwrap_or_else(PoisonError::into_inner);

        // Another caller may have finished loading while we waited
        if let Some(catalog) = self.catalog.get() {
            return Ok(Arc::clone(catalog));
        }

        let catalog = Arc::new(FoodCatalog::load(&self.path)?);
        let _ = self.catalog.set(Arc::clone(&catalog));
        Ok(catalog)
    }

    /// Catalog if it has already been loaded
    pub fn get(&self) -> Option<Arc<FoodCatalog>> {
        self.catalog.get().cloned()
    }

    pub fn is_loaded(&self) -> bool {
        self.catalog.get().is_some()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::thread;

    #[test]
    fn test_loads_once_and_shares() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dataset.csv");
        fs::write(&path, "fdc_id,description,Iron\n1,\"Lentils, boiled\",3.3\n").unwrap();

        let cache = Arc::new(CatalogCache::new(&path));
        assert!(!cache.is_loaded());

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let cache = Arc::clone(&cache);
                thread::spawn(move || cache.get_or_load().unwrap())
            })
            .collect();
        let loaded: Vec<Arc<FoodCatalog>> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        for catalog in &loaded[1..] {
            assert!(Arc::ptr_eq(&loaded[0], catalog));
        }
        assert_eq!(loaded[0].foods()[0].description, "Lentils, boiled");

        // Later file changes are not observed
        fs::remove_file(&path).unwrap();
        assert!(cache.get_or_load().is_ok());
    }

    #[test]
    fn test_failed_load_is_retried() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dataset.csv");
        fs::write(&path, "fdc_id,description,Iron\n").unwrap();

        let cache = CatalogCache::new(&path);
        assert!(cache.get_or_load().is_err());
        assert!(!cache.is_loaded());

        fs::write(&path, "fdc_id,description,Iron\n7,Spinach,2.7\n").unwrap();
        assert_eq!(cache.get_or_load().unwrap().len(), 1);
    }
}
