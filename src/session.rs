//! Session module: the state behind one interactive or headless run.
//!
//! `Session` lives in `session::model`; front-ends only change it by sending
//! a `SessionCmd`.

mod model;

pub use model::*;
