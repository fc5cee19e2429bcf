//! Configuration loader and schema types.
//!
//! This module exposes the settings that seed a session (numbering mode,
//! side capacities), the header text and logging, plus helpers to load them
//! from disk and the environment.

mod load;
mod schema;

pub use schema::*;
