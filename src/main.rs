mod cli;
mod config;
mod error;
mod library;
mod runtime;
mod session;
mod tracklist;
mod ui;

/// The one line printed on stderr when a run fails.
fn failure_line(e: &dyn std::error::Error) -> String {
    format!("tracklister: {e}")
}

fn main() {
    if let Err(e) = runtime::run() {
        eprintln!("{}", failure_line(e.as_ref()));
        std::process::exit(1);
    }
}
