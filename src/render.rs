//! Chunked render pipeline.
//!
//! Large visible pages are handed to the display layer in fixed-size
//! batches with a yield point between them (the iterator boundary) so the
//! host stays responsive. There is no cancellation beyond staleness: a new
//! search calls [`RenderGate::begin`], which invalidates every outstanding
//! token, and the superseded loop stops producing at its next batch
//! boundary instead of interleaving stale output.

use crate::search::{RowMatch, SearchPage};
use std::cell::Cell;

/// Proof that a render loop was the latest one started.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderToken(u64);

/// Render generation counter. Single-threaded, like everything else in
/// this crate.
#[derive(Debug, Default)]
pub struct RenderGate {
    generation: Cell<u64>,
}

impl RenderGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new render generation, invalidating all earlier tokens.
    pub fn begin(&self) -> RenderToken {
        let next = self.generation.get() + 1;
        self.generation.set(next);
        RenderToken(next)
    }

    /// Whether a token still belongs to the latest generation.
    pub fn is_current(&self, token: RenderToken) -> bool {
        self.generation.get() == token.0
    }
}

/// Iterator over a page's visible rows in fixed-size batches.
///
/// Checks the gate before every batch and simply ends once the token is
/// stale, so driving a superseded iterator is harmless.
pub struct PageChunks<'a> {
    rows: &'a [RowMatch<'a>],
    chunk_size: usize,
    gate: &'a RenderGate,
    token: RenderToken,
    offset: usize,
}

/// Batch up a page's visible rows for incremental display.
pub fn page_chunks<'a>(
    page: &'a SearchPage<'a>,
    chunk_size: usize,
    gate: &'a RenderGate,
    token: RenderToken,
) -> PageChunks<'a> {
    PageChunks {
        rows: &page.matches,
        chunk_size: chunk_size.max(1),
        gate,
        token,
        offset: 0,
    }
}

impl<'a> Iterator for PageChunks<'a> {
    type Item = &'a [RowMatch<'a>];

    fn next(&mut self) -> Option<Self::Item> {
        if self.offset >= self.rows.len() || !self.gate.is_current(self.token) {
            return None;
        }
        let end = (self.offset + self.chunk_size).min(self.rows.len());
        let chunk = &self.rows[self.offset..end];
        self.offset = end;
        Some(chunk)
    }
}
