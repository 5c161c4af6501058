//! TUI color semantics and style constants.
//!
//! Centralized theme definitions consumed by the rendering layer.
//! Pure data.
//!
//! Color semantics:
//! - Green: correct answers, success feedback
//! - Red: incorrect answers, retry feedback
//! - Cyan: interactive elements (keybinding hints, mode controls)
//! - Yellow: the soil-site chart series
//! - Blue: the rock-site chart series
//! - Dim: de-emphasized (disabled controls, unanswered options)
//! - Bold: headings, the active TOC entry

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// SEMANTIC STYLES
// ============================================================================

/// Correct answer marker and success feedback — green.
pub const STYLE_CORRECT: Style = Style::new().fg(Color::Green);

/// Incorrect answer marker and retry feedback — red.
pub const STYLE_INCORRECT: Style = Style::new().fg(Color::Red);

/// Interactive element / keybinding hint — cyan.
pub const STYLE_INTERACTIVE: Style = Style::new().fg(Color::Cyan);

/// De-emphasized text — dark gray.
pub const STYLE_DIM: Style = Style::new().fg(Color::DarkGray);

/// Important text — bold.
pub const STYLE_IMPORTANT: Style = Style::new().add_modifier(Modifier::BOLD);

// ============================================================================
// UI ELEMENT STYLES
// ============================================================================

/// Header bar / slide heading.
pub const STYLE_TITLE: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

/// Cursor row in the TOC sidebar.
pub const STYLE_CURSOR: Style = Style::new().add_modifier(Modifier::REVERSED);

/// The TOC entry for the currently active slide.
pub const STYLE_TOC_ACTIVE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);

/// Progress bar fill.
pub const STYLE_PROGRESS: Style = Style::new().fg(Color::Cyan);

/// Footer / help line.
pub const STYLE_HELP: Style = Style::new().fg(Color::DarkGray);

/// Rock-site spectrum series.
pub const STYLE_SERIES_ROCK: Style = Style::new().fg(Color::Blue);

/// Soil-site spectrum series.
pub const STYLE_SERIES_SOIL: Style = Style::new().fg(Color::Yellow);

/// RotD ratio series.
pub const STYLE_SERIES_ROTD: Style = Style::new().fg(Color::Cyan);

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn semantic_styles_have_expected_colors() {
        assert_eq!(STYLE_CORRECT.fg, Some(Color::Green));
        assert_eq!(STYLE_INCORRECT.fg, Some(Color::Red));
        assert_eq!(STYLE_INTERACTIVE.fg, Some(Color::Cyan));
        assert_eq!(STYLE_DIM.fg, Some(Color::DarkGray));
    }

    #[test]
    fn title_style_is_bold() {
        assert!(STYLE_TITLE.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn cursor_style_is_reversed() {
        assert!(STYLE_CURSOR.add_modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn chart_series_use_distinct_colors() {
        assert_ne!(STYLE_SERIES_ROCK.fg, STYLE_SERIES_SOIL.fg);
    }
}
