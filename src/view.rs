//! View-state controller: every user-adjustable search setting in one
//! place, plus the pagination cursor.
//!
//! The engine never reads this mutable state directly. Callers take a
//! [`SearchConfig`] snapshot and hand it to
//! [`search`](crate::search::search), so a query run is a pure function of
//! its inputs and stale settings cannot leak mid-search.

use crate::constants::DEFAULT_PAGE_SIZE;
use crate::types::{MatchMode, MatchOptions, Scope};

/// Immutable snapshot of the settings one search run uses.
#[derive(Clone, Debug)]
pub struct SearchConfig {
    pub scope: Scope,
    pub mode: MatchMode,
    pub query: String,
    pub options: MatchOptions,
    pub visible_rows: usize,
}

/// Mutable search settings with a self-resetting visible window.
///
/// Every setter that changes a filter (scope, mode, an options flag, the
/// query) snaps `visible_rows` back to one page: stale pagination from a
/// previous filter must never leak into a new filter's results.
#[derive(Clone, Debug)]
pub struct ViewState {
    scope: Scope,
    mode: MatchMode,
    query: String,
    options: MatchOptions,
    page_size: usize,
    visible_rows: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl ViewState {
    pub fn new(page_size: usize) -> Self {
        let page_size = page_size.max(1);
        Self {
            scope: Scope::default(),
            mode: MatchMode::default(),
            query: String::new(),
            options: MatchOptions::default(),
            page_size,
            visible_rows: page_size,
        }
    }

    pub fn scope(&self) -> Scope {
        self.scope
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn options(&self) -> MatchOptions {
        self.options
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn visible_rows(&self) -> usize {
        self.visible_rows
    }

    pub fn set_scope(&mut self, scope: Scope) {
        if self.scope != scope {
            self.scope = scope;
            self.reset_window();
        }
    }

    pub fn set_mode(&mut self, mode: MatchMode) {
        if self.mode != mode {
            self.mode = mode;
            self.reset_window();
        }
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        if self.query != query {
            self.query = query;
            self.reset_window();
        }
    }

    pub fn set_exact(&mut self, exact: bool) {
        if self.options.exact != exact {
            self.options.set_exact(exact);
            self.reset_window();
        }
    }

    pub fn set_case_sensitive(&mut self, case_sensitive: bool) {
        if self.options.case_sensitive != case_sensitive {
            self.options.case_sensitive = case_sensitive;
            self.reset_window();
        }
    }

    /// Called after the store reports an actual current-file switch.
    /// Which single file is "current" only filters results when scope is
    /// Current, so only then does the window reset.
    pub fn on_current_changed(&mut self) {
        if self.scope == Scope::Current {
            self.reset_window();
        }
    }

    /// Grow the visible window by one page.
    pub fn load_more(&mut self) {
        self.visible_rows = self.visible_rows.saturating_add(self.page_size);
    }

    /// Snap the visible window back to a single page.
    pub fn reset_window(&mut self) {
        self.visible_rows = self.page_size;
    }

    /// The immutable settings snapshot a search run consumes.
    pub fn snapshot(&self) -> SearchConfig {
        SearchConfig {
            scope: self.scope,
            mode: self.mode,
            query: self.query.clone(),
            options: self.options,
            visible_rows: self.visible_rows,
        }
    }
}
