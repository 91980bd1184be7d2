//! Core types for the siteboard data model.
//!
//! This module defines the fundamental data structures used throughout the
//! crate: parsed datasets, their records, and the user-facing search knobs
//! (scope, mode, options).

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ============================================================================
// Datasets
// ============================================================================

/// Opaque identifier for a [`Dataset`].
///
/// Generated by the file store from a millisecond timestamp plus a random
/// component, so ids stay unique even under rapid successive adds. The inner
/// string is an implementation detail; treat ids as tokens.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DatasetId(pub(crate) String);

impl DatasetId {
    /// The id as a displayable string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DatasetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One parsed CSV file: its headers and records.
///
/// Stored in the [`FileStore`](crate::store::FileStore), referenced by id.
/// Never mutated after creation.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Dataset {
    /// Unique identifier
    pub id: DatasetId,
    /// Human-readable name (from filename or import name)
    pub name: String,
    /// Header names in first-seen source order. Duplicates are kept:
    /// the source files contain them and they still render as columns.
    pub headers: Vec<String>,
    /// Data rows
    pub rows: Vec<Record>,
}

impl Dataset {
    /// Get the number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get the number of columns
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }
}

/// A row of a dataset, as a header -> cell value mapping.
///
/// A header missing from the map reads as the empty string; ragged source
/// rows are padded by the parser, but the union projection across files
/// also hits headers a record never had.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Record {
    values: HashMap<String, String>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the cell for a header. With duplicate header names the last
    /// write wins, matching how the source files are parsed.
    pub fn insert(&mut self, header: impl Into<String>, value: impl Into<String>) {
        self.values.insert(header.into(), value.into());
    }

    /// Cell value for a header, empty string when absent.
    pub fn get(&self, header: &str) -> &str {
        self.values.get(header).map(String::as_str).unwrap_or("")
    }

    /// Number of distinct headers this record carries.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (k, v) in iter {
            record.insert(k, v);
        }
        record
    }
}

// ============================================================================
// Search knobs
// ============================================================================

/// Whether search considers all loaded datasets or only the current one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Scope {
    All,
    Current,
}

impl Default for Scope {
    fn default() -> Self {
        Self::All
    }
}

/// Column-priority strategy for the match engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchMode {
    /// Check identifier-like columns (SiteID and friends) first; fall back
    /// to scanning every column when none of them hit.
    SiteId,
    /// Scan every column in header order.
    Any,
}

impl Default for MatchMode {
    fn default() -> Self {
        Self::SiteId
    }
}

/// Comparison options for the match engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchOptions {
    /// Whole-cell equality instead of substring containment.
    pub exact: bool,
    /// Informational twin of `exact` for the caller's controls; the
    /// matcher itself only consults `exact`.
    pub contains: bool,
    /// Compare without lowercasing when set.
    pub case_sensitive: bool,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            exact: false,
            contains: true,
            case_sensitive: false,
        }
    }
}

impl MatchOptions {
    /// Flip between exact and containment matching, keeping the twin flag
    /// consistent.
    pub fn set_exact(&mut self, exact: bool) {
        self.exact = exact;
        self.contains = !exact;
    }
}
