//! siteboard: an in-memory multi-file CSV browser core.
//!
//! Loads CSV files into an append-only store, searches records across all
//! loaded files or a single selected one, and exposes matching rows as a
//! paged, incrementally renderable view. The crate produces data structures
//! describing what to display (headers, rows, counts); how they are drawn
//! is the caller's business.
//!
//! The pieces, in dependency order:
//! - [`data`]: naive CSV parsing and file acquisition
//! - [`store`]: the dataset collection and current-file selection
//! - [`view`]: mutable search settings producing immutable snapshots
//! - [`search`]: the match predicate and the result aggregator
//! - [`render`]: chunked emission of the visible page behind a
//!   generation gate

pub mod constants;
pub mod data;
pub mod render;
pub mod search;
pub mod settings;
pub mod store;
pub mod types;
pub mod view;

pub use data::{ColumnPolicy, DataError, DataResult, ParsedCsv};
pub use render::{PageChunks, RenderGate, RenderToken, page_chunks};
pub use search::{RowMatch, SearchPage, record_matches, search};
pub use settings::Settings;
pub use store::{FileStore, StoreSummary};
pub use types::{Dataset, DatasetId, MatchMode, MatchOptions, Record, Scope};
pub use view::{SearchConfig, ViewState};
