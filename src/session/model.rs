//! Session model types: `Session` and `SessionCmd`.
//!
//! The `Session` holds the selected directory, the numbering options, the
//! last generated tracklist and the console lines shown to the user.

use std::fs;
use std::path::PathBuf;

use crate::config::TracklistSettings;
use crate::error::{Result, TracklistError};
use crate::library::MetadataProbe;
use crate::tracklist::{SideConfig, generate};

/// A single user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCmd {
    /// Use this folder for the next generate.
    SelectDirectory(PathBuf),
    /// Switch between `01.` numbering and A/B sides.
    SetSideMode(bool),
    /// Tracks on side A, as entered.
    SetASide(i64),
    /// Tracks on side B, as entered.
    SetBSide(i64),
    /// Build the tracklist for the selected folder.
    Generate,
    /// Write the last tracklist to this file.
    Save(PathBuf),
}

/// Parse a side capacity as typed into an entry field.
///
/// Anything that is not an integer counts as 0, which generate rejects.
pub fn parse_capacity(text: &str) -> i64 {
    text.trim().parse().unwrap_or(0)
}

/// The state of one run.
#[derive(Debug, Default)]
pub struct Session {
    pub directory: Option<PathBuf>,
    pub side_mode: bool,
    pub a_side: i64,
    pub b_side: i64,

    tracklist: String,
    console: Vec<String>,
}

impl Session {
    /// Create a `Session` seeded from the configured numbering defaults.
    pub fn new(settings: &TracklistSettings) -> Self {
        Self {
            side_mode: settings.side_mode,
            a_side: settings.a_side,
            b_side: settings.b_side,
            ..Self::default()
        }
    }

    /// The last successfully generated tracklist (empty before the first one).
    pub fn tracklist(&self) -> &str {
        &self.tracklist
    }

    /// Every line written to the console so far, oldest first.
    pub fn console(&self) -> &[String] {
        &self.console
    }

    /// Append a line to the console.
    pub fn say(&mut self, line: impl Into<String>) {
        let line = line.into();
        tracing::info!(target: "tracklister::console", "{line}");
        self.console.push(line);
    }

    /// Validated numbering for the current options.
    pub fn side_config(&self) -> Result<SideConfig> {
        SideConfig::from_capacities(self.side_mode, self.a_side, self.b_side)
    }

    /// Apply `cmd`.
    ///
    /// Failures are also written to the console, so interactive callers may
    /// ignore the returned error. The last tracklist is only replaced by a
    /// successful generate.
    pub fn apply(&mut self, cmd: SessionCmd, probe: &dyn MetadataProbe) -> Result<()> {
        tracing::debug!(?cmd, "session command");
        let result = match cmd {
            SessionCmd::SelectDirectory(dir) => {
                self.say(format!("Selected directory: {}", dir.display()));
                self.directory = Some(dir);
                Ok(())
            }
            SessionCmd::SetSideMode(on) => {
                self.side_mode = on;
                Ok(())
            }
            SessionCmd::SetASide(n) => {
                self.a_side = n;
                Ok(())
            }
            SessionCmd::SetBSide(n) => {
                self.b_side = n;
                Ok(())
            }
            SessionCmd::Generate => self.generate(probe),
            SessionCmd::Save(path) => self.save(path),
        };

        if let Err(e) = &result {
            tracing::warn!(error = %e, "command failed");
            self.console.push(e.to_string());
        }
        result
    }

    fn generate(&mut self, probe: &dyn MetadataProbe) -> Result<()> {
        let dir = self.directory.clone().ok_or(TracklistError::NoDirectory)?;
        let sides = self.side_config()?;
        let text = generate(&dir, sides, probe)?;

        self.console.extend(text.lines().map(str::to_string));
        self.tracklist = text;
        Ok(())
    }

    fn save(&mut self, path: PathBuf) -> Result<()> {
        if self.tracklist.is_empty() {
            return Err(TracklistError::NothingToSave);
        }
        fs::write(&path, &self.tracklist).map_err(|source| TracklistError::Save {
            path: path.clone(),
            source,
        })?;
        self.say(format!("Tracklist saved as: {}", path.display()));
        Ok(())
    }
}
