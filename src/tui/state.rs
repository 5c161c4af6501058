//! TUI state: pure types, zero effects.
//!
//! These types define the entire presentation state space. The
//! transition function (update) and rendering layer (view) both program
//! against them. There is a single surface (the active slide) with a
//! TOC sidebar overlay, so state is a handful of small owned pieces
//! rather than a screen state machine.

use crossterm::event::KeyEvent;

use crate::charts::{ChartBook, SpectrumMode};
use crate::quiz::QuizMarks;
use crate::types::Deck;

// ============================================================================
// APP EVENTS
// ============================================================================

/// Everything the event loop can receive from its channel.
///
/// A single key-reader thread produces `Key`; terminal resizes arrive
/// as `Resize` purely to trigger a redraw.
#[derive(Debug)]
pub enum AppEvent {
    /// A terminal key event from the crossterm reader thread.
    Key(KeyEvent),
    /// Terminal was resized; no state change, just redraw.
    Resize,
}

// ============================================================================
// NAVIGATOR
// ============================================================================

/// Owns the slide cursor. The only mutation path is [`Navigator::go_to`],
/// which keeps the invariant `current < total` for non-empty decks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    current: usize,
    total: usize,
}

impl Navigator {
    /// Start at slide 0.
    pub fn new(total: usize) -> Self {
        Navigator { current: 0, total }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Move to slide `n`. Out-of-range requests are silently ignored;
    /// returns whether the request was in range.
    pub fn go_to(&mut self, n: usize) -> bool {
        if n >= self.total {
            return false;
        }
        self.current = n;
        true
    }

    /// Whether the previous control should be disabled.
    pub fn at_first(&self) -> bool {
        self.current == 0
    }

    /// Whether the next control should show its terminal label.
    pub fn at_last(&self) -> bool {
        self.total > 0 && self.current == self.total - 1
    }

    /// Completion fraction in [0, 1].
    ///
    /// Decks with a single slide (or none) are defined as complete:
    /// the fraction is 1, never a division by zero.
    pub fn progress(&self) -> f64 {
        if self.total <= 1 {
            return 1.0;
        }
        self.current as f64 / (self.total - 1) as f64
    }

    /// The "3 / 14" counter string.
    pub fn counter(&self) -> String {
        format!("{} / {}", self.current + 1, self.total)
    }
}

// ============================================================================
// SIDEBAR
// ============================================================================

/// TOC sidebar visibility and cursor. Pure view state, no persistence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sidebar {
    pub open: bool,
    pub cursor: usize,
}

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Top-level TUI model.
#[derive(Debug)]
pub struct App {
    /// The loaded deck. Immutable for the app's lifetime.
    pub deck: Deck,
    /// Slide cursor and derived display state.
    pub nav: Navigator,
    /// TOC sidebar overlay.
    pub sidebar: Sidebar,
    /// Quiz answer markers, keyed by question id.
    pub marks: QuizMarks,
    /// Chart initialization state and spectrum display mode.
    pub charts: ChartBook,
    /// Which quiz on the active slide digit keys answer.
    pub quiz_focus: usize,
    /// Vertical scroll offset of the slide body, reset on navigation.
    pub scroll: u16,
    /// Set to true when the app should exit on the next tick.
    pub should_quit: bool,
}

impl App {
    /// Create an App on slide 0 with charts on that slide initialized,
    /// matching the initial render of the presentation.
    pub fn new(deck: Deck) -> Self {
        let nav = Navigator::new(deck.total_slides());
        let mut charts = ChartBook::new();
        for kind in deck.charts_on(nav.current()) {
            charts.activate(kind);
        }

        App {
            deck,
            nav,
            sidebar: Sidebar::default(),
            marks: QuizMarks::new(),
            charts,
            quiz_focus: 0,
            scroll: 0,
            should_quit: false,
        }
    }
}

// ============================================================================
// ACTIONS
// ============================================================================

/// Semantic user action, decoupled from raw key events.
///
/// The effects layer maps key presses to Actions; the transition
/// function decides what each Action means in the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Advance one slide.
    NextSlide,
    /// Go back one slide.
    PrevSlide,
    /// Jump to the first slide.
    FirstSlide,
    /// Jump to the last slide.
    LastSlide,
    /// Show/hide the TOC sidebar.
    ToggleSidebar,
    /// Move up: sidebar cursor when open, body scroll otherwise.
    MoveUp,
    /// Move down: sidebar cursor when open, body scroll otherwise.
    MoveDown,
    /// Activate the sidebar selection.
    Enter,
    /// Close the sidebar, or quit when it is already closed.
    Back,
    /// Answer option `n` (1-based digit) of the focused quiz.
    Answer(u8),
    /// Cycle quiz focus on slides with several quizzes.
    FocusNextQuiz,
    /// Switch the response-spectrum display mode.
    SetSpectrumMode(SpectrumMode),
    /// Quit the application.
    Quit,
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::builtin_deck;
    use crate::types::{AnswerTable, Block, ChartKind, Slide};

    fn deck_of(n: usize) -> Deck {
        Deck {
            title: "t".into(),
            answers: AnswerTable::default(),
            slides: (0..n)
                .map(|i| Slide {
                    title: Some(format!("s{}", i)),
                    blocks: vec![],
                })
                .collect(),
        }
    }

    #[test]
    fn navigator_starts_at_zero() {
        let nav = Navigator::new(5);
        assert_eq!(nav.current(), 0);
        assert!(nav.at_first());
        assert!(!nav.at_last());
    }

    #[test]
    fn go_to_rejects_out_of_range() {
        let mut nav = Navigator::new(5);
        assert!(!nav.go_to(5));
        assert!(!nav.go_to(99));
        assert_eq!(nav.current(), 0);
    }

    #[test]
    fn go_to_accepts_every_valid_index() {
        let mut nav = Navigator::new(5);
        for n in 0..5 {
            assert!(nav.go_to(n));
            assert_eq!(nav.current(), n);
        }
        assert!(nav.at_last());
    }

    #[test]
    fn progress_runs_zero_to_one() {
        let mut nav = Navigator::new(5);
        assert_eq!(nav.progress(), 0.0);

        nav.go_to(2);
        assert_eq!(nav.progress(), 0.5);

        nav.go_to(4);
        assert_eq!(nav.progress(), 1.0);
    }

    #[test]
    fn single_slide_deck_counts_as_complete() {
        // The divide-by-zero edge case: defined as 1, not NaN.
        let nav = Navigator::new(1);
        assert_eq!(nav.progress(), 1.0);
        assert!(nav.at_first());
        assert!(nav.at_last());
    }

    #[test]
    fn empty_navigator_rejects_everything() {
        let mut nav = Navigator::new(0);
        assert!(!nav.go_to(0));
        assert_eq!(nav.progress(), 1.0);
        assert!(!nav.at_last());
    }

    #[test]
    fn counter_is_one_based() {
        let mut nav = Navigator::new(14);
        assert_eq!(nav.counter(), "1 / 14");
        nav.go_to(2);
        assert_eq!(nav.counter(), "3 / 14");
    }

    #[test]
    fn app_starts_on_first_slide_sidebar_closed() {
        let app = App::new(deck_of(3));
        assert_eq!(app.nav.current(), 0);
        assert!(!app.sidebar.open);
        assert_eq!(app.scroll, 0);
        assert!(!app.should_quit);
        assert_eq!(app.marks.answered_count(), 0);
    }

    #[test]
    fn app_initializes_charts_on_the_first_slide() {
        let deck = Deck {
            title: "t".into(),
            answers: AnswerTable::default(),
            slides: vec![Slide {
                title: None,
                blocks: vec![Block::Chart { kind: ChartKind::RotdRatio }],
            }],
        };
        let app = App::new(deck);
        assert!(app.charts.is_initialized(ChartKind::RotdRatio));
        assert!(!app.charts.is_initialized(ChartKind::ResponseSpectrum));
    }

    #[test]
    fn app_with_builtin_deck_defers_chart_init() {
        // Charts live on later slides; nothing initialized at startup.
        let app = App::new(builtin_deck());
        assert!(!app.charts.is_initialized(ChartKind::ResponseSpectrum));
        assert!(!app.charts.is_initialized(ChartKind::RotdRatio));
    }
}
