//! Identity-keyed record storage with search, filter and sort queries.
//!
//! [`CatalogStore`] is the full contract the service relies on; the query
//! methods have default implementations on top of [`CatalogStore::all`], so a
//! backend only has to provide keyed access.

use std::collections::BTreeMap;

use tracing::debug;

use crate::domain::{Content, ContentId, ContentKind};
use crate::error::{CatalogError, Result};

/// Storage contract for catalog records
pub trait CatalogStore {
    /// Insert or overwrite the record with the same id
    fn put(&mut self, record: Content);

    /// Remove a record, failing if the id is unknown
    fn delete(&mut self, id: ContentId) -> Result<Content>;

    /// Look up a record by id
    fn get(&self, id: ContentId) -> Option<&Content>;

    /// Every record, in no particular order
    fn all(&self) -> Vec<&Content>;

    /// Drop every record
    fn clear(&mut self);

    /// Number of stored records
    fn len(&self) -> usize {
        self.all().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn contains(&self, id: ContentId) -> bool {
        self.get(id).is_some()
    }

    /// Replace the whole contents with `records`
    fn replace_all(&mut self, records: Vec<Content>) {
        self.clear();
        for record in records {
            self.put(record);
        }
    }

    /// Case-insensitive substring search on titles. A blank query matches nothing.
    fn find_by_title(&self, text: &str) -> Vec<&Content> {
        match normalized_query(text) {
            Some(query) => self
                .all()
                .into_iter()
                .filter(|c| c.title().to_lowercase().contains(&query))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Case-insensitive substring search on genres. A blank query matches nothing.
    fn find_by_genre(&self, text: &str) -> Vec<&Content> {
        match normalized_query(text) {
            Some(query) => self
                .all()
                .into_iter()
                .filter(|c| c.genre().to_lowercase().contains(&query))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Records whose duration lies in `min..=max`
    fn find_by_duration_range(&self, min: u32, max: u32) -> Vec<&Content> {
        self.all()
            .into_iter()
            .filter(|c| (min..=max).contains(&c.duration_minutes()))
            .collect()
    }

    /// All records, ascending by title (stable)
    fn sorted_by_title(&self) -> Vec<&Content> {
        let mut records = self.all();
        records.sort_by(|a, b| a.title().cmp(b.title()));
        records
    }

    /// All records, ascending by duration (stable)
    fn sorted_by_duration(&self) -> Vec<&Content> {
        let mut records = self.all();
        records.sort_by_key(|c| c.duration_minutes());
        records
    }

    /// Number of records of each kind present
    fn counts_by_kind(&self) -> BTreeMap<ContentKind, usize> {
        let mut counts = BTreeMap::new();
        for record in self.all() {
            *counts.entry(record.kind()).or_insert(0) += 1;
        }
        counts
    }
}

fn normalized_query(text: &str) -> Option<String> {
    let query = text.trim();
    if query.is_empty() {
        None
    } else {
        Some(query.to_lowercase())
    }
}

/// In-memory store, ordered by id
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    records: BTreeMap<ContentId, Content>,
}

impl InMemoryStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }
}

impl CatalogStore for InMemoryStore {
    fn put(&mut self, record: Content) {
        let id = record.id();
        if self.records.insert(id, record).is_some() {
            debug!(%id, "Replaced record");
        } else {
            debug!(%id, "Inserted record");
        }
    }

    fn delete(&mut self, id: ContentId) -> Result<Content> {
        let removed = self.records.remove(&id).ok_or(CatalogError::NotFound(id))?;
        debug!(%id, "Deleted record");
        Ok(removed)
    }

    fn get(&self, id: ContentId) -> Option<&Content> {
        self.records.get(&id)
    }

    fn all(&self) -> Vec<&Content> {
        self.records.values().collect()
    }

    fn clear(&mut self) {
        self.records.clear();
    }

    fn len(&self) -> usize {
        self.records.len()
    }

    fn contains(&self, id: ContentId) -> bool {
        self.records.contains_key(&id)
    }
}
