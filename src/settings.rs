//! User settings: which files auto-load and how pages are sized.
//!
//! Stored as JSON under the platform config directory. Loading is
//! forgiving: a missing or malformed file falls back to defaults with a
//! logged warning, never an error. Dataset contents are never persisted;
//! only these knobs are.

use crate::constants::{DEFAULT_AUTO_CSV_FILES, DEFAULT_PAGE_SIZE, RENDER_CHUNK_SIZE};
use crate::data::ColumnPolicy;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Filenames looked up in the data directory on startup
    pub auto_csv_files: Vec<String>,
    /// Directory the auto files resolve against; current dir when unset
    pub data_dir: Option<PathBuf>,
    /// Rows per "load more" step
    pub page_size: usize,
    /// Rows per render batch
    pub render_chunk_size: usize,
    /// Keep only vocabulary-matched columns when parsing
    pub important_columns_only: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            auto_csv_files: DEFAULT_AUTO_CSV_FILES.iter().map(|s| s.to_string()).collect(),
            data_dir: None,
            page_size: DEFAULT_PAGE_SIZE,
            render_chunk_size: RENDER_CHUNK_SIZE,
            important_columns_only: false,
        }
    }
}

/// Where settings live on disk, platform dependent.
pub fn settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("siteboard").join("settings.json"))
}

impl Settings {
    /// Load settings, falling back to defaults when the file is missing or
    /// unreadable.
    pub fn load() -> Self {
        let Some(path) = settings_path() else {
            return Self::default();
        };
        let text = match std::fs::read_to_string(&path) {
            Ok(text) => text,
            // Missing file is the normal first run
            Err(_) => return Self::default(),
        };
        match serde_json::from_str(&text) {
            Ok(settings) => settings,
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "malformed settings, using defaults");
                Self::default()
            }
        }
    }

    /// Write settings as pretty JSON, creating the config directory.
    pub fn save(&self) -> anyhow::Result<()> {
        let path = settings_path().context("no config directory on this platform")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// The parser policy these settings select.
    pub fn column_policy(&self) -> ColumnPolicy {
        if self.important_columns_only {
            ColumnPolicy::ImportantOnly
        } else {
            ColumnPolicy::KeepAll
        }
    }
}
