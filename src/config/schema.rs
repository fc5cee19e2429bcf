use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/tracklister/config.toml` or `~/.config/tracklister/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `TRACKLISTER__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub tracklist: TracklistSettings,
    pub ui: UiSettings,
    pub log: LogSettings,
}

/// Numbering defaults the session starts with.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct TracklistSettings {
    /// Start with A/B side labels instead of `01.`, `02.`, ...
    pub side_mode: bool,
    /// Tracks on side A. Must be >= 1 when side mode is used.
    pub a_side: i64,
    /// Tracks on side B. Must be >= 1 when side mode is used.
    pub b_side: i64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UiSettings {
    /// The text rendered inside the top header box.
    pub header_text: String,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            header_text: " ~ tracklister: timestamps for your mix ~ ".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LogSettings {
    /// `tracing` filter directive, e.g. `info` or `tracklister=debug`.
    /// `TRACKLISTER_LOG` overrides it.
    pub level: String,
    /// Append logs to this file. The interactive screen only logs when set.
    pub file: Option<PathBuf>,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}
