//! CLI adapter: load CSV files, run one search, print the page.
//!
//! All wiring and output formatting lives here; the library exposes no
//! side-effecting display operations.

use anyhow::Result;
use clap::{Parser, ValueEnum};
use siteboard::data::{self, ColumnPolicy};
use siteboard::render::{RenderGate, page_chunks};
use siteboard::search;
use siteboard::settings::Settings;
use siteboard::store::FileStore;
use siteboard::types::{MatchMode, Scope};
use siteboard::view::ViewState;
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "siteboard", version, about = "Search across loaded CSV files")]
struct Cli {
    /// Free-text query; omit to show every row
    query: Option<String>,

    /// Data directory the auto-load file list resolves against
    #[arg(long)]
    dir: Option<PathBuf>,

    /// Extra CSV files to load (repeatable)
    #[arg(long = "file", value_name = "PATH")]
    files: Vec<PathBuf>,

    /// Skip the configured auto-load file list
    #[arg(long)]
    no_auto: bool,

    /// Which datasets to search
    #[arg(long, value_enum, default_value_t = ScopeArg::All)]
    scope: ScopeArg,

    /// Column-priority strategy
    #[arg(long, value_enum, default_value_t = ModeArg::Siteid)]
    mode: ModeArg,

    /// Select the current file by name (pairs with --scope current)
    #[arg(long, value_name = "NAME")]
    current: Option<String>,

    /// Whole-cell equality instead of substring search
    #[arg(long)]
    exact: bool,

    /// Compare case-sensitively
    #[arg(long)]
    case_sensitive: bool,

    /// Rows per page (defaults to the configured page size)
    #[arg(long)]
    page_size: Option<usize>,

    /// Apply this many "load more" steps before printing
    #[arg(long, default_value_t = 0)]
    more: usize,

    /// Keep only vocabulary-matched columns when parsing
    #[arg(long)]
    important_columns: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum ScopeArg {
    All,
    Current,
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Siteid,
    Any,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    run(Cli::parse())
}

fn run(cli: Cli) -> Result<()> {
    let settings = Settings::load();
    let policy = if cli.important_columns {
        ColumnPolicy::ImportantOnly
    } else {
        settings.column_policy()
    };

    let mut store = FileStore::new();
    if !cli.no_auto {
        let dir = cli
            .dir
            .clone()
            .or_else(|| settings.data_dir.clone())
            .unwrap_or_else(|| PathBuf::from("."));
        data::load_auto_files(&mut store, &dir, &settings.auto_csv_files, policy);
    }
    for path in &cli.files {
        if let Err(err) = data::load_file(&mut store, path, policy) {
            tracing::warn!(path = %path.display(), %err, "skipping file");
        }
    }

    let mut view = ViewState::new(cli.page_size.unwrap_or(settings.page_size));
    view.set_scope(match cli.scope {
        ScopeArg::All => Scope::All,
        ScopeArg::Current => Scope::Current,
    });
    view.set_mode(match cli.mode {
        ModeArg::Siteid => MatchMode::SiteId,
        ModeArg::Any => MatchMode::Any,
    });
    view.set_exact(cli.exact);
    view.set_case_sensitive(cli.case_sensitive);
    if let Some(query) = &cli.query {
        view.set_query(query.clone());
    }

    if let Some(name) = &cli.current {
        let id = store
            .list()
            .iter()
            .find(|d| &d.name == name)
            .map(|d| d.id.clone());
        match id {
            Some(id) => {
                if store.set_current(&id) {
                    view.on_current_changed();
                }
            }
            None => tracing::warn!(%name, "no loaded file by that name"),
        }
    }

    for _ in 0..cli.more {
        view.load_more();
    }

    let page = search::search(&store, &view.snapshot());

    let gate = RenderGate::new();
    let token = gate.begin();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "{}", store.summary())?;
    if !page.headers.is_empty() {
        writeln!(out, "{}", page.headers.join(" | "))?;
    }
    for chunk in page_chunks(&page, settings.render_chunk_size, &gate, token) {
        for row in chunk {
            writeln!(out, "{}", page.project(row).join(" | "))?;
        }
    }
    writeln!(
        out,
        "Showing {} of {} matching rows.",
        page.visible_count, page.total_count
    )?;
    if page.is_truncated() {
        writeln!(out, "Re-run with --more {} for the next page.", cli.more + 1)?;
    }

    Ok(())
}
