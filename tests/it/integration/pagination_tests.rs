//! Pagination and chunked-render behavior over realistic row counts.

use crate::helpers::{TestStoreBuilder, show_all};
use siteboard::render::{RenderGate, page_chunks};
use siteboard::search::search;
use siteboard::store::FileStore;
use siteboard::view::ViewState;

fn store_with_rows(n: usize) -> FileStore {
    let ids: Vec<String> = (0..n).map(|i| format!("S{i:05}")).collect();
    let id_refs: Vec<&str> = ids.iter().map(String::as_str).collect();
    TestStoreBuilder::new().with_site_ids("big.csv", &id_refs).build()
}

#[test]
fn test_load_more_sequence_caps_at_total() {
    let store = store_with_rows(1200);
    let mut view = ViewState::new(500);

    let page = search(&store, &view.snapshot());
    assert_eq!(page.total_count, 1200);
    assert_eq!(page.visible_count, 500);

    view.load_more();
    let page = search(&store, &view.snapshot());
    assert_eq!(page.visible_count, 1000);

    view.load_more();
    let page = search(&store, &view.snapshot());
    assert_eq!(page.visible_count, 1200);
    assert!(!page.is_truncated());
}

#[test]
fn test_visible_prefix_is_stable_across_load_more() {
    let store = store_with_rows(30);
    let mut view = ViewState::new(10);

    let first = search(&store, &view.snapshot());
    view.load_more();
    let second = search(&store, &view.snapshot());

    let first_ids: Vec<&str> = first.matches.iter().map(|m| m.cell("SiteID")).collect();
    let second_ids: Vec<&str> = second.matches.iter().map(|m| m.cell("SiteID")).collect();
    assert_eq!(first_ids[..], second_ids[..10]);
}

#[test]
fn test_chunked_render_covers_visible_page() {
    let store = store_with_rows(500);
    let page = search(&store, &show_all(500));
    let gate = RenderGate::new();
    let token = gate.begin();

    let sizes: Vec<usize> = page_chunks(&page, 200, &gate, token).map(|c| c.len()).collect();
    assert_eq!(sizes, vec![200, 200, 100]);
}

#[test]
fn test_new_search_stops_previous_render_loop() {
    let store = store_with_rows(600);
    let gate = RenderGate::new();

    let stale_page = search(&store, &show_all(600));
    let stale_token = gate.begin();
    let mut stale_chunks = page_chunks(&stale_page, 200, &gate, stale_token);
    assert_eq!(stale_chunks.next().map(|c| c.len()), Some(200));

    // the next search begins a new generation before rendering
    let fresh_page = search(&store, &show_all(600));
    let fresh_token = gate.begin();

    assert!(stale_chunks.next().is_none());
    let emitted: usize = page_chunks(&fresh_page, 200, &gate, fresh_token)
        .map(|c| c.len())
        .sum();
    assert_eq!(emitted, 600);
}
