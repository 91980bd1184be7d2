//! The file store: every loaded dataset, plus which one is "current".
//!
//! Datasets are append-only and insertion-ordered. The store is the only
//! component allowed to hand out [`DatasetId`]s, which keeps the invariant
//! simple: a current id, when set, always names a dataset that exists here.

use crate::types::{Dataset, DatasetId, Record};
use std::time::{SystemTime, UNIX_EPOCH};

/// In-memory collection of all loaded datasets.
#[derive(Debug, Default)]
pub struct FileStore {
    datasets: Vec<Dataset>,
    current: Option<DatasetId>,
}

impl FileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a parsed file as a new dataset.
    ///
    /// Assigns a fresh id and, when no file is current yet, makes this
    /// dataset the current one.
    pub fn add(&mut self, name: impl Into<String>, headers: Vec<String>, rows: Vec<Record>) -> &Dataset {
        let id = self.generate_id();
        self.datasets.push(Dataset {
            id: id.clone(),
            name: name.into(),
            headers,
            rows,
        });
        if self.current.is_none() {
            self.current = Some(id);
        }
        &self.datasets[self.datasets.len() - 1]
    }

    /// All datasets, in insertion order.
    pub fn list(&self) -> &[Dataset] {
        &self.datasets
    }

    pub fn get(&self, id: &DatasetId) -> Option<&Dataset> {
        self.datasets.iter().find(|d| &d.id == id)
    }

    /// The current dataset, if one is selected.
    pub fn current(&self) -> Option<&Dataset> {
        self.current.as_ref().and_then(|id| self.get(id))
    }

    pub fn current_id(&self) -> Option<&DatasetId> {
        self.current.as_ref()
    }

    /// Select the current dataset. Unknown ids are silently ignored.
    /// Returns whether the selection actually changed, so the caller can
    /// decide whether pagination needs a reset.
    pub fn set_current(&mut self, id: &DatasetId) -> bool {
        if self.get(id).is_none() || self.current.as_ref() == Some(id) {
            return false;
        }
        self.current = Some(id.clone());
        true
    }

    /// Remove a dataset. Other datasets keep their ids; when the removed
    /// dataset was current, the first remaining dataset becomes current.
    pub fn remove(&mut self, id: &DatasetId) -> Option<Dataset> {
        let pos = self.datasets.iter().position(|d| &d.id == id)?;
        let removed = self.datasets.remove(pos);
        if self.current.as_ref() == Some(id) {
            self.current = self.datasets.first().map(|d| d.id.clone());
        }
        Some(removed)
    }

    /// Aggregate display info, recomputed on demand.
    pub fn summary(&self) -> StoreSummary {
        StoreSummary {
            file_count: self.datasets.len(),
            row_count: self.datasets.iter().map(|d| d.row_count()).sum(),
        }
    }

    /// Id generation: millisecond timestamp plus a random suffix. The
    /// timestamp alone collides under rapid successive adds, so retry the
    /// suffix until the id is unused.
    fn generate_id(&self) -> DatasetId {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        loop {
            let id = DatasetId(format!("{millis:x}-{:04x}", rand::random::<u16>()));
            if !self.datasets.iter().any(|d| d.id == id) {
                return id;
            }
        }
    }
}

/// Dataset count and total row count across the store.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StoreSummary {
    pub file_count: usize,
    pub row_count: usize,
}

impl std::fmt::Display for StoreSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.file_count == 0 {
            return f.write_str("No data loaded.");
        }
        let files = if self.file_count == 1 { "file" } else { "files" };
        let rows = if self.row_count == 1 { "row" } else { "rows" };
        write!(
            f,
            "Loaded {} {files} ({} {rows}).",
            self.file_count, self.row_count
        )
    }
}
