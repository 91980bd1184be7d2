//! CSV parsing
//!
//! Turns raw CSV text into a header list plus ordered records. The split is
//! deliberately naive: raw commas and line endings only, no quote handling.
//! A comma inside a quoted field becomes a field separator; that is a
//! documented limitation of the source data format, not something this
//! parser tries to repair.
//!
//! Column selection is a policy, not a second parser: the keep-all and
//! vocabulary-filtered variants share all of the splitting logic and differ
//! only in which header positions survive.

use crate::constants::{FALLBACK_COLUMN_COUNT, IMPORTANT_COLUMN_NAMES};
use crate::types::Record;

/// Which columns a parse keeps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColumnPolicy {
    /// Retain every header.
    #[default]
    KeepAll,
    /// Retain only headers matching the important-column vocabulary
    /// (case-insensitive substring); when nothing matches, keep the first
    /// `min(25, header_count)` columns instead.
    ImportantOnly,
}

/// Result of a parse: headers in source order plus one record per data line.
#[derive(Clone, Debug, Default)]
pub struct ParsedCsv {
    pub headers: Vec<String>,
    pub rows: Vec<Record>,
}

impl ParsedCsv {
    /// True when the text held no parsable header line.
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }
}

/// Parse CSV text keeping every column.
pub fn parse(text: &str) -> ParsedCsv {
    parse_with_policy(text, ColumnPolicy::KeepAll)
}

/// Parse CSV text with an explicit column-selection policy.
///
/// Lines are split on `\n` with an optional trailing `\r`; lines that are
/// empty after trimming are dropped. The first surviving line is the header
/// line. Header names are NOT deduplicated: when a source repeats a name,
/// later columns silently overwrite earlier ones inside each [`Record`],
/// while both occurrences stay in `headers`.
///
/// Whitespace-only input yields an empty [`ParsedCsv`] rather than an
/// error; the loader decides whether that is worth reporting.
pub fn parse_with_policy(text: &str, policy: ColumnPolicy) -> ParsedCsv {
    let lines: Vec<&str> = text
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.trim().is_empty())
        .collect();

    let Some((header_line, data_lines)) = lines.split_first() else {
        return ParsedCsv::default();
    };

    let headers: Vec<String> = header_line
        .split(',')
        .map(|h| h.trim().to_string())
        .collect();

    let picked: Vec<usize> = match policy {
        ColumnPolicy::KeepAll => (0..headers.len()).collect(),
        ColumnPolicy::ImportantOnly => pick_important_columns(&headers),
    };

    let mut rows = Vec::with_capacity(data_lines.len());
    for line in data_lines {
        let cols: Vec<&str> = line.split(',').collect();
        // A single empty field is a blank line in disguise
        if cols.len() == 1 && cols[0].trim().is_empty() {
            continue;
        }

        let mut record = Record::new();
        for &idx in &picked {
            // Ragged rows pad with empty strings
            let value = cols.get(idx).map(|c| c.trim()).unwrap_or("");
            record.insert(headers[idx].clone(), value);
        }
        rows.push(record);
    }

    ParsedCsv {
        headers: picked.into_iter().map(|i| headers[i].clone()).collect(),
        rows,
    }
}

/// Indices of headers matching the important-column vocabulary, or the
/// first `min(25, header_count)` positions when nothing matches.
fn pick_important_columns(headers: &[String]) -> Vec<usize> {
    let mut picked: Vec<usize> = headers
        .iter()
        .enumerate()
        .filter(|(_, h)| {
            let lower = h.to_lowercase();
            IMPORTANT_COLUMN_NAMES
                .iter()
                .any(|name| lower.contains(&name.to_lowercase()))
        })
        .map(|(idx, _)| idx)
        .collect();

    if picked.is_empty() {
        picked = (0..headers.len().min(FALLBACK_COLUMN_COUNT)).collect();
    }
    picked
}
