//! The result aggregator: dataset selection, header union, match
//! collection, and the prefix-paged view over the full match list.
//!
//! Pagination here is purely prefix truncation. "Load more" bumps the
//! visible window and re-runs the whole search; no incremental diff is
//! maintained between runs, which is acceptable for scan-based matching.

use crate::search::matcher::record_matches;
use crate::store::FileStore;
use crate::types::{Dataset, Record, Scope};
use crate::view::SearchConfig;
use std::collections::HashSet;

/// One matching row: the record plus the dataset it came from.
#[derive(Clone, Copy, Debug)]
pub struct RowMatch<'a> {
    pub dataset: &'a Dataset,
    pub record: &'a Record,
}

impl RowMatch<'_> {
    /// Cell under a (possibly unioned) header; empty string when this
    /// record's file never had that column.
    pub fn cell(&self, header: &str) -> &str {
        self.record.get(header)
    }
}

/// A displayable page: unioned headers, the visible prefix of matches, and
/// the counts the caller shows next to the table.
#[derive(Debug)]
pub struct SearchPage<'a> {
    /// Union of the selected datasets' headers, first-seen order
    pub headers: Vec<String>,
    /// The first `visible_count` matches, dataset order then record order
    pub matches: Vec<RowMatch<'a>>,
    /// Size of the full match list
    pub total_count: usize,
    /// `min(total_count, visible_rows)`
    pub visible_count: usize,
}

impl SearchPage<'_> {
    /// Whether more matches exist beyond the visible window.
    pub fn is_truncated(&self) -> bool {
        self.visible_count < self.total_count
    }

    /// A match's cells in header order, ready for display.
    pub fn project(&self, row: &RowMatch<'_>) -> Vec<String> {
        self.headers
            .iter()
            .map(|h| row.cell(h).to_string())
            .collect()
    }
}

/// Run a full search over the store with an immutable config snapshot.
pub fn search<'a>(store: &'a FileStore, config: &SearchConfig) -> SearchPage<'a> {
    let datasets = select_datasets(store, config.scope);
    let headers = union_headers(&datasets);

    let mut matches = Vec::new();
    for dataset in datasets {
        for record in &dataset.rows {
            // Match against the dataset's OWN headers, not the union: an
            // identifier column present in only one file must still be
            // searchable for that file's records.
            if record_matches(
                record,
                &config.query,
                &dataset.headers,
                config.options,
                config.mode,
            ) {
                matches.push(RowMatch { dataset, record });
            }
        }
    }

    let total_count = matches.len();
    let visible_count = total_count.min(config.visible_rows);
    matches.truncate(visible_count);

    tracing::debug!(
        query = %config.query,
        total = total_count,
        visible = visible_count,
        "search complete"
    );

    SearchPage {
        headers,
        matches,
        total_count,
        visible_count,
    }
}

/// The file set a search runs over: everything, or just the current file.
fn select_datasets(store: &FileStore, scope: Scope) -> Vec<&Dataset> {
    match scope {
        Scope::All => store.list().iter().collect(),
        Scope::Current => store.current().into_iter().collect(),
    }
}

/// Union of headers across datasets, first-seen order, duplicates skipped.
fn union_headers(datasets: &[&Dataset]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut headers = Vec::new();
    for dataset in datasets {
        for header in &dataset.headers {
            if seen.insert(header.as_str()) {
                headers.push(header.clone());
            }
        }
    }
    headers
}
