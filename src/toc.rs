//! Table-of-contents construction.
//!
//! Pure functions — (deck) → labeled entries. The sidebar rendering and
//! the `toc` subcommand both consume these.

use crate::types::Deck;

/// One navigable entry in the table of contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocEntry {
    /// Slide index this entry navigates to.
    pub index: usize,
    /// Display label, e.g. "3. Wave Attenuation".
    pub label: String,
}

/// Label for a single entry: `"{index+1}. {title}"`, with a positional
/// fallback for untitled slides.
pub fn entry_label(index: usize, title: Option<&str>) -> String {
    match title {
        Some(t) => format!("{}. {}", index + 1, t),
        None => format!("{}. Slide {}", index + 1, index + 1),
    }
}

/// Build one entry per slide, in order.
pub fn build_toc(deck: &Deck) -> Vec<TocEntry> {
    deck.slides
        .iter()
        .enumerate()
        .map(|(i, slide)| TocEntry {
            index: i,
            label: entry_label(i, slide.title.as_deref()),
        })
        .collect()
}

// ============================================================================
// TESTS
// ============================================================================
