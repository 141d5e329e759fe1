//! Business rules on top of a [`CatalogStore`].
//!
//! The service owns the id allocator, so every record it creates or loads
//! gets an id that was never handed out before in this service's lifetime.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, warn};

use super::store::{CatalogStore, InMemoryStore};
use crate::codec::{
    decode_record, ensure_catalog_path, read_catalog_file, write_catalog_file, SkippedLine,
};
use crate::domain::{Content, ContentId, ContentKind, IdAllocator};
use crate::error::{CatalogError, Result};

/// Outcome of a successful [`CatalogService::load`]
#[derive(Debug)]
pub struct LoadSummary {
    /// Records now in the catalog
    pub loaded: usize,

    /// Lines that were rejected while decoding
    pub skipped: Vec<SkippedLine>,
}

/// Totals over the whole catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogStatistics {
    pub total: usize,
    pub by_kind: BTreeMap<ContentKind, usize>,
}

impl fmt::Display for CatalogStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Catalog statistics ===")?;
        writeln!(f, "Total records: {}", self.total)?;
        for (kind, count) in &self.by_kind {
            writeln!(f, "{}: {}", kind, count)?;
        }
        Ok(())
    }
}

/// Catalog operations with duplicate prevention and file persistence
#[derive(Debug)]
pub struct CatalogService<S: CatalogStore = InMemoryStore> {
    store: S,
    ids: IdAllocator,
    default_path: PathBuf,
}

impl CatalogService<InMemoryStore> {
    /// Empty in-memory catalog backed by `default_path`
    pub fn new(default_path: impl Into<PathBuf>) -> Self {
        Self::with_store(InMemoryStore::new(), IdAllocator::new(), default_path)
    }
}

impl<S: CatalogStore> CatalogService<S> {
    pub fn with_store(store: S, ids: IdAllocator, default_path: impl Into<PathBuf>) -> Self {
        Self {
            store,
            ids,
            default_path: default_path.into(),
        }
    }

    /// Path used by [`load_default`](Self::load_default) and [`save_default`](Self::save_default)
    pub fn default_path(&self) -> &Path {
        &self.default_path
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Allocate an id for a record about to be built
    pub fn next_id(&mut self) -> ContentId {
        self.ids.next_id()
    }

    /// Decode a single record line with an id from this service
    pub fn parse_record(&mut self, line: &str) -> Result<Content> {
        decode_record(line, &mut self.ids)
    }

    /// Add a new record.
    ///
    /// Fails if the id is already taken, or if a record of the same kind
    /// already has the same title, compared case-insensitively.
    pub fn add(&mut self, record: Content) -> Result<ContentId> {
        record.validate()?;

        let id = record.id();
        if self.store.contains(id) {
            return Err(CatalogError::IdInUse(id));
        }

        let title = record.title().to_lowercase();
        let clash = self
            .store
            .all()
            .into_iter()
            .any(|c| c.kind() == record.kind() && c.title().to_lowercase() == title);
        if clash {
            return Err(CatalogError::Duplicate {
                kind: record.kind(),
                title: record.title().to_string(),
            });
        }

        self.ids.observe(id);
        self.store.put(record);
        debug!(%id, "Added record");
        Ok(id)
    }

    /// Replace an existing record with the same id
    pub fn update(&mut self, record: Content) -> Result<()> {
        record.validate()?;
        let id = record.id();
        if !self.store.contains(id) {
            return Err(CatalogError::NotFound(id));
        }
        self.store.put(record);
        debug!(%id, "Updated record");
        Ok(())
    }

    pub fn remove(&mut self, id: ContentId) -> Result<Content> {
        self.store.delete(id)
    }

    pub fn get(&self, id: ContentId) -> Option<&Content> {
        self.store.get(id)
    }

    pub fn all(&self) -> Vec<&Content> {
        self.store.all()
    }

    pub fn search_by_title(&self, text: &str) -> Vec<&Content> {
        self.store.find_by_title(text)
    }

    pub fn filter_by_genre(&self, text: &str) -> Vec<&Content> {
        self.store.find_by_genre(text)
    }

    /// Records with a duration in `min..=max`
    pub fn filter_by_duration(&self, min: u32, max: u32) -> Result<Vec<&Content>> {
        if min > max {
            return Err(CatalogError::InvalidRange { min, max });
        }
        Ok(self.store.find_by_duration_range(min, max))
    }

    pub fn sorted_by_title(&self) -> Vec<&Content> {
        self.store.sorted_by_title()
    }

    pub fn sorted_by_duration(&self) -> Vec<&Content> {
        self.store.sorted_by_duration()
    }

    pub fn total_count(&self) -> usize {
        self.store.len()
    }

    pub fn statistics(&self) -> CatalogStatistics {
        CatalogStatistics {
            total: self.store.len(),
            by_kind: self.store.counts_by_kind(),
        }
    }

    /// Replace the catalog with the records in `path`.
    ///
    /// On error the catalog is left untouched.
    pub fn load(&mut self, path: &Path) -> Result<LoadSummary> {
        let report = read_catalog_file(path, &mut self.ids)?;
        let loaded = report.records.len();
        self.store.replace_all(report.records);

        info!(path = %path.display(), loaded, "Loaded catalog");
        Ok(LoadSummary {
            loaded,
            skipped: report.skipped,
        })
    }

    /// Load the default file; any failure yields an empty catalog.
    ///
    /// Returns the number of records loaded.
    pub fn load_default(&mut self) -> usize {
        let path = self.default_path.clone();
        match self.load(&path) {
            Ok(summary) => summary.loaded,
            Err(e) => {
                warn!(path = %path.display(), "Starting with an empty catalog: {}", e);
                self.store.clear();
                0
            }
        }
    }

    /// Write every record to `path`, creating parent directories as needed
    pub fn save(&self, path: &Path) -> Result<usize> {
        ensure_catalog_path(path)?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| CatalogError::io(parent, e))?;
        }

        let written = write_catalog_file(path, self.store.all())?;
        info!(path = %path.display(), written, "Saved catalog");
        Ok(written)
    }

    pub fn save_default(&self) -> Result<usize> {
        self.save(&self.default_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ContentBase, Documentary, Movie};
    use tempfile::TempDir;

    fn service() -> CatalogService {
        CatalogService::new("catalog.csv")
    }

    fn movie(service: &mut CatalogService, title: &str, minutes: u32) -> Content {
        let base = ContentBase::new(service.next_id(), title, minutes, "Drama").unwrap();
        Movie::new(base, "Studio").unwrap().into()
    }

    #[test]
    fn test_add_rejects_same_kind_same_title() {
        let mut service = service();
        let first = movie(&mut service, "Avatar", 162);
        service.add(first).unwrap();

        let second = movie(&mut service, "AVATAR", 100);
        let err = service.add(second).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::Duplicate { kind: ContentKind::Movie, .. }
        ));
        assert_eq!(service.total_count(), 1);
    }

    #[test]
    fn test_add_allows_same_title_across_kinds() {
        let mut service = service();
        let m = movie(&mut service, "Avatar", 162);
        service.add(m).unwrap();

        let base = ContentBase::new(service.next_id(), "Avatar", 90, "Science").unwrap();
        service.add(Documentary::new(base, "Filmmaking").unwrap().into()).unwrap();

        assert_eq!(service.total_count(), 2);
    }

    #[test]
    fn test_update_never_creates() {
        let mut service = service();
        let m = movie(&mut service, "Avatar", 162);
        let err = service.update(m).unwrap_err();
        assert!(matches!(err, CatalogError::NotFound(_)));
        assert_eq!(service.total_count(), 0);
    }

    #[test]
    fn test_update_replaces_fields() {
        let mut service = service();
        let m = movie(&mut service, "Avatar", 162);
        let id = service.add(m).unwrap();

        let mut changed = service.get(id).unwrap().clone();
        changed.base_mut().set_duration_minutes(170).unwrap();
        service.update(changed).unwrap();

        assert_eq!(service.get(id).unwrap().duration_minutes(), 170);
    }

    #[test]
    fn test_add_never_overwrites_by_id() {
        let mut service = service();
        let first = movie(&mut service, "Avatar", 162);
        let id = service.add(first.clone()).unwrap();

        let base = ContentBase::new(id, "Cosmos", 45, "Science").unwrap();
        let err = service
            .add(Documentary::new(base, "Astronomy").unwrap().into())
            .unwrap_err();
        assert!(matches!(err, CatalogError::IdInUse(taken) if taken == id));
        assert_eq!(service.get(id), Some(&first));
    }

    #[test]
    fn test_add_keeps_allocator_ahead_of_foreign_ids() {
        let mut service = service();
        let base = ContentBase::new(ContentId::new(9).unwrap(), "Imported", 90, "Drama").unwrap();
        service.add(Movie::new(base, "Studio").unwrap().into()).unwrap();

        assert_eq!(service.next_id().get(), 10);
    }

    #[test]
    fn test_filter_by_duration_rejects_inverted_range() {
        let service = service();
        let err = service.filter_by_duration(120, 30).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidRange { min: 120, max: 30 }));
    }

    #[test]
    fn test_statistics_display() {
        let mut service = service();
        for title in ["A", "B"] {
            let m = movie(&mut service, title, 90);
            service.add(m).unwrap();
        }

        let stats = service.statistics();
        assert_eq!(stats.total, 2);
        assert_eq!(
            stats.to_string(),
            "=== Catalog statistics ===\nTotal records: 2\nMovie: 2\n"
        );
    }

    #[test]
    fn test_load_failure_leaves_catalog_untouched() {
        let mut service = service();
        let m = movie(&mut service, "Avatar", 162);
        service.add(m).unwrap();

        let err = service.load(Path::new("/nonexistent/catalog.csv")).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
        assert_eq!(service.total_count(), 1);
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("catalog.csv");

        let mut service = CatalogService::new(&path);
        let m = movie(&mut service, "Avatar", 162);
        service.add(m).unwrap();

        assert_eq!(service.save_default().unwrap(), 1);
        assert!(path.exists());
    }

    #[test]
    fn test_save_checks_extension_before_creating_directories() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("newdir");

        let service = service();
        let err = service.save(&dir.join("catalog.txt")).unwrap_err();
        assert!(matches!(err, CatalogError::FormatMismatch { .. }));
        assert!(!dir.exists());
    }
}
