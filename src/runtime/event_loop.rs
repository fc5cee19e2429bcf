use std::path::{Path, PathBuf};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::config;
use crate::library::MetadataProbe;
use crate::session::{Session, SessionCmd, parse_capacity};
use crate::ui;

/// Form rows, top to bottom.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Field {
    Directory,
    SideMode,
    ASide,
    BSide,
    SavePath,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Directory,
        Field::SideMode,
        Field::ASide,
        Field::BSide,
        Field::SavePath,
    ];

    fn next(self) -> Self {
        let i = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    fn prev(self) -> Self {
        let i = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(i + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Editing state of the form, kept across iterations.
pub struct EventLoopState {
    /// Row that receives typed keys.
    pub focus: Field,
    pub directory_input: String,
    pub a_side_input: String,
    pub b_side_input: String,
    pub save_input: String,
    /// Lines scrolled up from the bottom of the console.
    pub console_scroll: usize,
}

impl EventLoopState {
    /// Construct a new `EventLoopState` seeded from `session`.
    pub fn new(session: &Session) -> Self {
        let capacity = |n: i64| if n == 0 { String::new() } else { n.to_string() };
        Self {
            focus: Field::Directory,
            directory_input: session
                .directory
                .as_ref()
                .map(|d| d.display().to_string())
                .unwrap_or_default(),
            a_side_input: capacity(session.a_side),
            b_side_input: capacity(session.b_side),
            save_input: String::new(),
            console_scroll: 0,
        }
    }
}

/// What a key press asks for.
#[derive(Debug, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    Run(SessionCmd),
    /// Several commands applied in order.
    RunAll(Vec<SessionCmd>),
    None,
}

/// Main terminal event loop: draws the form and console, turns key presses
/// into session commands. Returns `Ok(())` when the user quits.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    session: &mut Session,
    probe: &dyn MetadataProbe,
    state: &mut EventLoopState,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|f| ui::draw(f, session, state, &settings.ui))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match interpret_key(key, session, state) {
                KeyAction::Quit => break,
                KeyAction::Run(cmd) => {
                    // Errors are already on the console.
                    let _ = session.apply(cmd, probe);
                    state.console_scroll = 0;
                }
                KeyAction::RunAll(cmds) => {
                    for cmd in cmds {
                        let _ = session.apply(cmd, probe);
                    }
                    state.console_scroll = 0;
                }
                KeyAction::None => {}
            }
        }
    }

    Ok(())
}

/// Map a key press to an action, updating the form state.
pub fn interpret_key(key: KeyEvent, session: &Session, state: &mut EventLoopState) -> KeyAction {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Esc => return KeyAction::Quit,
        KeyCode::Char('c') if ctrl => return KeyAction::Quit,
        KeyCode::Char('g') if ctrl => return generate_action(session, state),
        KeyCode::F(5) => return generate_action(session, state),
        KeyCode::Char('s') if ctrl => return save_action(state),
        KeyCode::Tab | KeyCode::Down => {
            state.focus = state.focus.next();
            return KeyAction::None;
        }
        KeyCode::BackTab | KeyCode::Up => {
            state.focus = state.focus.prev();
            return KeyAction::None;
        }
        KeyCode::PageUp => {
            state.console_scroll = state
                .console_scroll
                .saturating_add(5)
                .min(session.console().len());
            return KeyAction::None;
        }
        KeyCode::PageDown => {
            state.console_scroll = state.console_scroll.saturating_sub(5);
            return KeyAction::None;
        }
        _ => {}
    }
    if ctrl {
        return KeyAction::None;
    }

    let focus = state.focus;
    match focus {
        Field::Directory => match key.code {
            KeyCode::Enter => {
                let dir = state.directory_input.trim();
                if dir.is_empty() {
                    KeyAction::None
                } else {
                    KeyAction::Run(SessionCmd::SelectDirectory(PathBuf::from(dir)))
                }
            }
            code => {
                edit(&mut state.directory_input, code, |_| true);
                KeyAction::None
            }
        },
        Field::SideMode => match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => {
                KeyAction::Run(SessionCmd::SetSideMode(!session.side_mode))
            }
            _ => KeyAction::None,
        },
        Field::ASide => match key.code {
            KeyCode::Enter => generate_action(session, state),
            code if edit(&mut state.a_side_input, code, is_number_char) => {
                KeyAction::Run(SessionCmd::SetASide(parse_capacity(&state.a_side_input)))
            }
            _ => KeyAction::None,
        },
        Field::BSide => match key.code {
            KeyCode::Enter => generate_action(session, state),
            code if edit(&mut state.b_side_input, code, is_number_char) => {
                KeyAction::Run(SessionCmd::SetBSide(parse_capacity(&state.b_side_input)))
            }
            _ => KeyAction::None,
        },
        Field::SavePath => match key.code {
            KeyCode::Enter => save_action(state),
            code => {
                edit(&mut state.save_input, code, |_| true);
                KeyAction::None
            }
        },
    }
}

/// Generate, first selecting the typed directory if Enter was never pressed
/// on it.
fn generate_action(session: &Session, state: &EventLoopState) -> KeyAction {
    let typed = state.directory_input.trim();
    if typed.is_empty() || session.directory.as_deref() == Some(Path::new(typed)) {
        return KeyAction::Run(SessionCmd::Generate);
    }
    KeyAction::RunAll(vec![
        SessionCmd::SelectDirectory(PathBuf::from(typed)),
        SessionCmd::Generate,
    ])
}

fn save_action(state: &mut EventLoopState) -> KeyAction {
    let path = state.save_input.trim();
    if path.is_empty() {
        state.focus = Field::SavePath;
        KeyAction::None
    } else {
        KeyAction::Run(SessionCmd::Save(PathBuf::from(path)))
    }
}

fn is_number_char(c: char) -> bool {
    c.is_ascii_digit() || c == '-'
}

/// Apply a typing key to `buf`. Returns whether `buf` changed.
fn edit(buf: &mut String, code: KeyCode, accept: impl Fn(char) -> bool) -> bool {
    match code {
        KeyCode::Char(c) if accept(c) => {
            buf.push(c);
            true
        }
        KeyCode::Backspace => buf.pop().is_some(),
        _ => false,
    }
}
