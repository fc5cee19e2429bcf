//! Tracklist rendering: names, running timestamps and side labels.
//!
//! [`generate`] scans a folder and renders it in one go; [`render`] does the
//! formatting part on tracks that were already scanned.

mod format;
mod render;
mod sides;

pub use format::{display_name, format_timestamp};
pub use render::{distinct_artists, generate, render};
pub use sides::{Side, SideConfig, SideCursor};
