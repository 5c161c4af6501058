//! Outline formatting for the `toc` subcommand.
//!
//! Pure functions — (Deck, OutputFormat) → String.
//! No I/O, no side effects.

use serde::Serialize;

use crate::toc::build_toc;
use crate::types::{ChartKind, Deck, OutputFormat};

/// Format a deck outline for output.
pub fn format_outline(deck: &Deck, format: OutputFormat) -> String {
    match format {
        OutputFormat::Human => format_human(deck),
        OutputFormat::Json => format_json(deck),
    }
}

// ============================================================================
// HUMAN FORMAT
// ============================================================================

fn format_human(deck: &Deck) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n", deck.title));
    out.push_str(&format!("{}\n\n", "=".repeat(deck.title.chars().count())));

    for entry in build_toc(deck) {
        out.push_str(&format!("  {}", entry.label));

        let quizzes = deck.quizzes_on(entry.index);
        let charts = deck.charts_on(entry.index);

        let mut notes: Vec<String> = Vec::new();
        for quiz in &quizzes {
            notes.push(format!("quiz {}", quiz.id));
        }
        for chart in &charts {
            notes.push(format!("chart: {}", chart.label()));
        }
        if !notes.is_empty() {
            out.push_str(&format!("  [{}]", notes.join(", ")));
        }
        out.push('\n');
    }

    out.push('\n');
    out.push_str(&format_summary(deck));

    out
}

fn format_summary(deck: &Deck) -> String {
    let quiz_count = deck.all_quizzes().len();
    let chart_count: usize = (0..deck.total_slides())
        .map(|i| deck.charts_on(i).len())
        .sum();

    let mut out = String::new();
    out.push_str("=== Summary ===\n");
    out.push_str(&format!("Slides:   {}\n", deck.total_slides()));
    out.push_str(&format!("Quizzes:  {}\n", quiz_count));
    out.push_str(&format!("Charts:   {}\n", chart_count));
    out
}

// ============================================================================
// JSON FORMAT
// ============================================================================

#[derive(Serialize)]
struct Outline<'a> {
    title: &'a str,
    slides: Vec<OutlineSlide>,
}

#[derive(Serialize)]
struct OutlineSlide {
    index: usize,
    label: String,
    quizzes: Vec<String>,
    charts: Vec<ChartKind>,
}

fn format_json(deck: &Deck) -> String {
    let outline = Outline {
        title: &deck.title,
        slides: build_toc(deck)
            .into_iter()
            .map(|entry| OutlineSlide {
                index: entry.index,
                quizzes: deck
                    .quizzes_on(entry.index)
                    .iter()
                    .map(|q| q.id.clone())
                    .collect(),
                charts: deck.charts_on(entry.index),
                label: entry.label,
            })
            .collect(),
    };

    // These types always serialize; fail loudly if that ever changes.
    serde_json::to_string_pretty(&outline)
        .unwrap_or_else(|e| panic!("Failed to serialize outline to JSON: {}", e))
}

// ============================================================================
// TESTS
// ============================================================================
