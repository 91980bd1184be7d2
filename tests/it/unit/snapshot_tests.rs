//! Snapshot tests using the insta crate.
//!
//! Inline snapshots keep the expected output next to the assertion, which
//! suits the small, stable projections this crate emits. After intentional
//! changes, update with:
//! ```sh
//! cargo insta test --accept
//! ```

use crate::helpers::{TestStoreBuilder, record, show_all};
use siteboard::search::search;

#[test]
fn snapshot_union_projection() {
    let store = TestStoreBuilder::new()
        .with_file(
            "d1.csv",
            &["SiteID", "City"],
            vec![record(&[("SiteID", "A1"), ("City", "Cairo")])],
        )
        .with_file(
            "d2.csv",
            &["SiteID", "Region"],
            vec![record(&[("SiteID", "B1"), ("Region", "East")])],
        )
        .build();

    let page = search(&store, &show_all(10));

    let mut lines = vec![page.headers.join(" | ")];
    for row in &page.matches {
        lines.push(page.project(row).join(" | ").trim_end().to_string());
    }
    let rendered = lines.join("\n");

    insta::assert_snapshot!(rendered, @r"
    SiteID | City | Region
    A1 | Cairo |
    B1 |  | East
    ");
}

#[test]
fn snapshot_store_summary() {
    let store = TestStoreBuilder::new()
        .with_site_ids("d1.csv", &["A1", "A2"])
        .with_site_ids("d2.csv", &["B1", "B2", "B3"])
        .build();

    insta::assert_snapshot!(store.summary().to_string(), @"Loaded 2 files (5 rows).");
}

#[test]
fn snapshot_empty_store_summary() {
    let store = TestStoreBuilder::new().build();
    insta::assert_snapshot!(store.summary().to_string(), @"No data loaded.");
}
