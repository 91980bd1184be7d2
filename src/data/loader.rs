//! Data acquisition
//!
//! The only place the crate touches the filesystem. Files are read and
//! parsed one at a time, appended to the store sequentially; a file that
//! cannot be read or holds no data is logged and skipped, never fatal to
//! the batch.

use crate::data::csv_parser::{self, ColumnPolicy};
use crate::data::error::{DataError, DataResult};
use crate::store::FileStore;
use crate::types::Dataset;
use std::path::Path;

/// Import already-acquired CSV text under a display name.
///
/// This is the upload path: the caller owns acquisition, we own parsing and
/// registration. Content with no parsable header line is rejected with
/// [`DataError::EmptyData`] and no dataset is created.
pub fn import_text<'a>(
    store: &'a mut FileStore,
    name: &str,
    text: &str,
    policy: ColumnPolicy,
) -> DataResult<&'a Dataset> {
    let parsed = csv_parser::parse_with_policy(text, policy);
    if parsed.is_empty() {
        return Err(DataError::EmptyData {
            name: name.to_string(),
        });
    }

    let dataset = store.add(name, parsed.headers, parsed.rows);
    tracing::debug!(name = %dataset.name, rows = dataset.row_count(), "imported dataset");
    Ok(dataset)
}

/// Read and import a single CSV file.
pub fn load_file<'a>(
    store: &'a mut FileStore,
    path: &Path,
    policy: ColumnPolicy,
) -> DataResult<&'a Dataset> {
    let text = std::fs::read_to_string(path)?;
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("data.csv");
    import_text(store, name, &text, policy)
}

/// Load a fixed list of filenames relative to a data directory.
///
/// Missing files, unreadable files, and files with no data are warned about
/// and skipped; the rest of the list is still attempted. Returns how many
/// datasets were actually added.
pub fn load_auto_files(
    store: &mut FileStore,
    dir: &Path,
    names: &[String],
    policy: ColumnPolicy,
) -> usize {
    let mut loaded = 0;
    for name in names {
        match load_file(store, &dir.join(name), policy) {
            Ok(_) => loaded += 1,
            Err(err) => tracing::warn!(%name, %err, "skipping auto-load file"),
        }
    }
    loaded
}
