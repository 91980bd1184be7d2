//! The match predicate: does one record satisfy the query?
//!
//! This is a scan, not an index. Cost is O(headers) per record per query,
//! and re-scans only happen on explicit query/filter changes, which keeps
//! the modest in-memory datasets this crate targets comfortably responsive.

use crate::constants::SITE_ID_CANONICAL;
use crate::types::{MatchMode, MatchOptions, Record};

/// Decide whether a record matches the query under the given options and
/// mode, scanning the record's own header list in order.
///
/// An empty query matches unconditionally, which is what gives the
/// caller its "show all rows" behavior.
pub fn record_matches(
    record: &Record,
    query: &str,
    headers: &[String],
    options: MatchOptions,
    mode: MatchMode,
) -> bool {
    if query.is_empty() {
        return true;
    }

    if mode == MatchMode::SiteId {
        // Identifier columns get first refusal; any hit decides the record
        // without touching the rest.
        for header in headers.iter().filter(|h| is_identifier_header(h)) {
            if value_matches(record.get(header), query, options) {
                return true;
            }
        }
        // No identifier column, or none matched: fall through to the scan.
    }

    headers
        .iter()
        .any(|header| value_matches(record.get(header), query, options))
}

/// Headers treated as site identifiers: the canonical name, or anything
/// carrying both "site" and "id" (SiteID, site_id, Site ID, ...).
pub fn is_identifier_header(name: &str) -> bool {
    let lower = name.to_lowercase();
    lower == SITE_ID_CANONICAL || (lower.contains("site") && lower.contains("id"))
}

/// One cell against the query. Absent cells arrive here as empty strings.
fn value_matches(value: &str, query: &str, options: MatchOptions) -> bool {
    let (value, query) = if options.case_sensitive {
        (value.to_string(), query.to_string())
    } else {
        (value.to_lowercase(), query.to_lowercase())
    };

    if options.exact {
        value == query
    } else {
        value.contains(&query)
    }
}
