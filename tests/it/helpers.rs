//! Test helpers and builders for reducing boilerplate in tests.

use siteboard::store::FileStore;
use siteboard::types::{MatchMode, MatchOptions, Record, Scope};
use siteboard::view::SearchConfig;

/// Build a record from header/value pairs.
pub fn record(pairs: &[(&str, &str)]) -> Record {
    pairs.iter().copied().collect()
}

/// Builder for stores preloaded with datasets.
///
/// # Example
/// ```ignore
/// let store = TestStoreBuilder::new()
///     .with_file("d1.csv", &["SiteID", "City"], vec![record(&[("SiteID", "A1")])])
///     .build();
/// ```
#[derive(Default)]
pub struct TestStoreBuilder {
    files: Vec<(String, Vec<String>, Vec<Record>)>,
}

impl TestStoreBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a dataset with explicit headers and rows.
    pub fn with_file(mut self, name: &str, headers: &[&str], rows: Vec<Record>) -> Self {
        self.files.push((
            name.to_string(),
            headers.iter().map(|h| h.to_string()).collect(),
            rows,
        ));
        self
    }

    /// Add a single-column SiteID dataset with one row per id.
    pub fn with_site_ids(self, name: &str, ids: &[&str]) -> Self {
        let rows = ids.iter().map(|id| record(&[("SiteID", id)])).collect();
        self.with_file(name, &["SiteID"], rows)
    }

    pub fn build(self) -> FileStore {
        let mut store = FileStore::new();
        for (name, headers, rows) in self.files {
            store.add(name, headers, rows);
        }
        store
    }
}

/// A config that matches every row, with the given visible window.
pub fn show_all(visible_rows: usize) -> SearchConfig {
    SearchConfig {
        scope: Scope::All,
        mode: MatchMode::Any,
        query: String::new(),
        options: MatchOptions::default(),
        visible_rows,
    }
}
