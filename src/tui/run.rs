//! TUI effects boundary: event loop, terminal lifecycle, key mapping.
//!
//! This is the only module with side effects. It wires the pure layers
//! (state, update, view) to the real terminal via crossterm and
//! ratatui. Kept minimal — all intelligence lives in the pure layers.
//!
//! A single key-reader thread feeds an mpsc channel; the event loop
//! consumes it, dispatching key events through `map_key → update`.

use std::io;
use std::sync::mpsc;
use std::thread;

use crossterm::ExecutableCommand;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::charts::SpectrumMode;
use crate::types::Deck;

use super::state::{Action, App, AppEvent};
use super::update::update;
use super::view::render;

// ============================================================================
// KEY MAPPING
// ============================================================================

/// Map a crossterm key event to a semantic Action.
///
/// Returns None for keys that don't map to any action. Context (sidebar
/// open, slide content) is resolved later by the transition function.
pub fn map_key(key: KeyEvent) -> Option<Action> {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        // Slide navigation
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char(' ') => Some(Action::NextSlide),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::PrevSlide),
        KeyCode::Home => Some(Action::FirstSlide),
        KeyCode::End => Some(Action::LastSlide),

        // Sidebar / list movement
        KeyCode::Char('t') => Some(Action::ToggleSidebar),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveDown),
        KeyCode::Enter => Some(Action::Enter),
        KeyCode::Esc => Some(Action::Back),

        // Quizzes
        KeyCode::Char(c @ '1'..='9') => Some(Action::Answer(c as u8 - b'0')),
        KeyCode::Tab => Some(Action::FocusNextQuiz),

        // Spectrum display modes
        KeyCode::Char('r') => Some(Action::SetSpectrumMode(SpectrumMode::Rock)),
        KeyCode::Char('s') => Some(Action::SetSpectrumMode(SpectrumMode::Soil)),
        KeyCode::Char('b') => Some(Action::SetSpectrumMode(SpectrumMode::Both)),

        KeyCode::Char('q') => Some(Action::Quit),

        _ => None,
    }
}

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

/// Set up the terminal for TUI mode.
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to normal mode.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best-effort terminal restoration
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

// ============================================================================
// BACKGROUND THREAD
// ============================================================================

/// Spawn a thread that reads crossterm events and forwards them to the channel.
fn spawn_key_reader(tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        loop {
            match event::read() {
                Ok(Event::Key(key)) => {
                    if tx.send(AppEvent::Key(key)).is_err() {
                        break; // receiver dropped, TUI is shutting down
                    }
                }
                Ok(Event::Resize(_, _)) => {
                    if tx.send(AppEvent::Resize).is_err() {
                        break;
                    }
                }
                Ok(_) => {} // ignore mouse, focus, paste
                Err(_) => break,
            }
        }
    });
}

// ============================================================================
// EVENT LOOP
// ============================================================================

/// Run the presentation event loop.
///
/// This is the main entry point for the TUI. It sets up the terminal,
/// spawns the key reader, and runs until the user quits.
pub fn run(deck: Deck) -> io::Result<()> {
    install_panic_hook();
    let mut terminal = setup_terminal()?;
    let mut app = App::new(deck);

    let (tx, rx) = mpsc::channel::<AppEvent>();
    spawn_key_reader(tx);

    loop {
        // Render
        terminal.draw(|frame| render(&app, frame))?;

        // Check quit flag
        if app.should_quit {
            break;
        }

        // Block on the next event
        let event = match rx.recv() {
            Ok(e) => e,
            Err(_) => break, // sender dropped
        };

        match event {
            AppEvent::Key(key) => {
                if let Some(action) = map_key(key) {
                    update(&mut app, action);
                }
            }
            AppEvent::Resize => {} // redraw happens at the top of the loop
        }
    }

    restore_terminal()?;
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
