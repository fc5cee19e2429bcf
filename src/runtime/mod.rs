use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::cli::Cli;
use crate::error::TracklistError;
use crate::library::FileProbe;
use crate::session::{Session, SessionCmd};

mod event_loop;
mod logging;
mod settings;

pub use event_loop::{EventLoopState, Field};

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse_args();
    let (settings, config_problem) = settings::load_settings();

    if cli.print_config {
        print!("{}", settings.to_toml()?);
        return Ok(());
    }

    let interactive = !cli.is_headless();
    logging::init(&settings.log, interactive);

    let probe = FileProbe;
    let mut session = Session::new(&settings.tracklist);

    if let Some(msg) = config_problem {
        tracing::warn!("{msg}");
        session.say(msg);
    }
    if let Some((a, b)) = cli.side_capacities() {
        session.apply(SessionCmd::SetSideMode(true), &probe)?;
        session.apply(SessionCmd::SetASide(a), &probe)?;
        session.apply(SessionCmd::SetBSide(b), &probe)?;
    }
    if let Some(dir) = &cli.dir {
        session.apply(SessionCmd::SelectDirectory(dir.clone()), &probe)?;
    }

    if !interactive {
        if session.directory.is_none() {
            return Err(TracklistError::NoDirectory.into());
        }
        session.apply(SessionCmd::Generate, &probe)?;
        if cli.print {
            print!("{}", session.tracklist());
        }
        if let Some(out) = &cli.output {
            session.apply(SessionCmd::Save(out.clone()), &probe)?;
        }
        return Ok(());
    }

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result: Result<(), Box<dyn std::error::Error>> = (|| {
        let mut state = EventLoopState::new(&session);
        event_loop::run(&mut terminal, &settings, &mut session, &probe, &mut state)
    })();

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    run_result
}
