//! Pure state transitions: (App, Action) → mutated App.
//!
//! This is the core logic of the presenter. Fully testable without a
//! terminal; nothing here touches I/O. Actions that don't apply in the
//! current state are silent no-ops.

use super::state::{Action, App};

/// Apply one semantic action to the app state.
pub fn update(app: &mut App, action: Action) {
    match action {
        Action::Quit => app.should_quit = true,

        Action::NextSlide => {
            go_to(app, app.nav.current() + 1);
        }
        Action::PrevSlide => {
            if let Some(n) = app.nav.current().checked_sub(1) {
                go_to(app, n);
            }
        }
        Action::FirstSlide => {
            go_to(app, 0);
        }
        Action::LastSlide => {
            if app.nav.total() > 0 {
                go_to(app, app.nav.total() - 1);
            }
        }

        Action::ToggleSidebar => toggle_sidebar(app),
        Action::MoveUp => move_up(app),
        Action::MoveDown => move_down(app),
        Action::Enter => {
            if app.sidebar.open {
                let target = app.sidebar.cursor;
                go_to(app, target);
            }
        }
        Action::Back => {
            if app.sidebar.open {
                app.sidebar.open = false;
            } else {
                app.should_quit = true;
            }
        }

        Action::Answer(digit) => answer_focused_quiz(app, digit),
        Action::FocusNextQuiz => focus_next_quiz(app),
        Action::SetSpectrumMode(mode) => {
            // No-op until the spectrum chart has been initialized.
            app.charts.set_spectrum_mode(mode);
        }
    }
}

// ============================================================================
// NAVIGATION
// ============================================================================

/// Navigate to slide `n`.
///
/// Out-of-range requests are silently ignored. A valid transition
/// closes the sidebar, scrolls the slide body back to the top, resets
/// the quiz focus, and lazily initializes any charts on the newly
/// active slide (exactly once per chart, ever).
pub fn go_to(app: &mut App, n: usize) -> bool {
    if !app.nav.go_to(n) {
        return false;
    }
    app.sidebar.open = false;
    app.scroll = 0;
    app.quiz_focus = 0;
    for kind in app.deck.charts_on(app.nav.current()) {
        app.charts.activate(kind);
    }
    true
}

fn toggle_sidebar(app: &mut App) {
    app.sidebar.open = !app.sidebar.open;
    if app.sidebar.open {
        // Open with the cursor on the active slide's entry.
        app.sidebar.cursor = app.nav.current();
    }
}

fn move_up(app: &mut App) {
    if app.sidebar.open {
        app.sidebar.cursor = app.sidebar.cursor.saturating_sub(1);
    } else {
        app.scroll = app.scroll.saturating_sub(1);
    }
}

fn move_down(app: &mut App) {
    if app.sidebar.open {
        let last = app.nav.total().saturating_sub(1);
        app.sidebar.cursor = (app.sidebar.cursor + 1).min(last);
    } else {
        app.scroll = app.scroll.saturating_add(1);
    }
}

// ============================================================================
// QUIZZES
// ============================================================================

/// Answer option `digit` (1-based) of the focused quiz on the active slide.
fn answer_focused_quiz(app: &mut App, digit: u8) {
    if digit == 0 {
        return;
    }
    let quizzes = app.deck.quizzes_on(app.nav.current());
    let Some(quiz) = quizzes.get(app.quiz_focus) else {
        return;
    };
    app.marks
        .answer(&app.deck.answers, quiz, usize::from(digit) - 1);
}

fn focus_next_quiz(app: &mut App) {
    let count = app.deck.quizzes_on(app.nav.current()).len();
    if count > 1 {
        app.quiz_focus = (app.quiz_focus + 1) % count;
    }
}

// ============================================================================
// TESTS
// ============================================================================
