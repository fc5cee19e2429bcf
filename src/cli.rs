//! Command-line arguments.
//!
//! Without `--print` or `--output` the interactive screen starts.

use std::path::PathBuf;

use clap::Parser;

/// tracklister: timestamped tracklists from a folder of MP3/FLAC files
#[derive(Parser, Debug)]
#[command(name = "tracklister")]
#[command(about = "Build a timestamped tracklist from a folder of MP3/FLAC files")]
#[command(version)]
pub struct Cli {
    /// Folder containing the audio files
    pub dir: Option<PathBuf>,

    /// Label tracks A1.. and B1.. with this many tracks per side
    #[arg(long, num_args = 2, value_names = ["A", "B"], allow_negative_numbers = true)]
    pub sides: Option<Vec<i64>>,

    /// Print the tracklist to stdout and exit
    #[arg(short, long)]
    pub print: bool,

    /// Save the tracklist to FILE and exit
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    pub print_config: bool,
}

impl Cli {
    /// Parses command-line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// Returns true when the run should not open the interactive screen.
    pub fn is_headless(&self) -> bool {
        self.print || self.output.is_some()
    }

    /// Side capacities given with `--sides`, if any.
    pub fn side_capacities(&self) -> Option<(i64, i64)> {
        match self.sides.as_deref() {
            Some([a, b]) => Some((*a, *b)),
            _ => None,
        }
    }
}
