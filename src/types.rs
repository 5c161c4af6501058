//! Domain types for seismo-deck.
//!
//! A deck is an immutable, ordered sequence of slides loaded once at
//! startup. Everything here is plain data with serde derives; behavior
//! lives in the modules that consume these types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// ============================================================================
// DECK
// ============================================================================

/// A complete presentation: title, answer table, ordered slides.
///
/// Membership and slide count are fixed after load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deck {
    /// Deck title, shown in the header bar.
    pub title: String,
    /// Explanatory feedback text keyed by question id.
    #[serde(default)]
    pub answers: AnswerTable,
    /// The slides, in presentation order.
    pub slides: Vec<Slide>,
}

impl Deck {
    /// Number of slides in the deck.
    pub fn total_slides(&self) -> usize {
        self.slides.len()
    }

    /// The slide at `index`, if in range.
    pub fn slide(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    /// Chart placeholders on the slide at `index`, in block order.
    pub fn charts_on(&self, index: usize) -> Vec<ChartKind> {
        self.slide(index)
            .map(|s| {
                s.blocks
                    .iter()
                    .filter_map(|b| match b {
                        Block::Chart { kind } => Some(*kind),
                        _ => None,
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Quiz blocks on the slide at `index`, in block order.
    pub fn quizzes_on(&self, index: usize) -> Vec<&QuizBlock> {
        self.slide(index)
            .map(|s| {
                s.blocks
                    .iter()
                    .filter_map(|b| match b {
                        Block::Quiz(q) => Some(q),
                        _ => None,
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// All quiz blocks in the deck, in slide order.
    pub fn all_quizzes(&self) -> Vec<&QuizBlock> {
        (0..self.total_slides())
            .flat_map(|i| self.quizzes_on(i))
            .collect()
    }
}

// ============================================================================
// ANSWER TABLE
// ============================================================================

/// Static mapping from question id to explanatory feedback text.
///
/// Read-only after load. A missing id is not an error; callers fall
/// back to generic feedback.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerTable(BTreeMap<String, String>);

impl AnswerTable {
    /// Look up the feedback text for a question id.
    pub fn lookup(&self, id: &str) -> Option<&str> {
        self.0.get(id).map(String::as_str)
    }

    /// Whether the table has an entry for `id`.
    pub fn contains(&self, id: &str) -> bool {
        self.0.contains_key(id)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, String)> for AnswerTable {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        AnswerTable(iter.into_iter().collect())
    }
}

// ============================================================================
// SLIDES
// ============================================================================

/// One unit of the presentation sequence.
///
/// Identified only by position; the optional title feeds the table of
/// contents (untitled slides get a positional fallback label).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Slide {
    /// Optional title, used by the TOC and the slide heading.
    #[serde(default)]
    pub title: Option<String>,
    /// Content blocks, rendered top to bottom.
    #[serde(default)]
    pub blocks: Vec<Block>,
}

/// A content block within a slide.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// A paragraph of body text.
    Text { body: String },
    /// A bulleted list.
    Bullets { items: Vec<String> },
    /// An interactive multiple-choice question.
    Quiz(QuizBlock),
    /// A placeholder for one of the fixed charts.
    Chart { kind: ChartKind },
}

// ============================================================================
// QUIZZES
// ============================================================================

/// A multiple-choice question embedded in a slide.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizBlock {
    /// Question identifier, keys into the answer table.
    pub id: String,
    /// The question text.
    pub prompt: String,
    /// Answer choices, at least one of which should be correct.
    pub options: Vec<QuizOption>,
}

/// A selectable answer choice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizOption {
    /// Display text.
    pub label: String,
    /// Whether picking this option counts as correct.
    #[serde(default)]
    pub correct: bool,
}

// ============================================================================
// CHARTS
// ============================================================================

/// The fixed charts a slide can embed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    /// Rock vs soil site response spectrum (two series, soil starts hidden).
    ResponseSpectrum,
    /// RotD100/RotD50 ratio vs period (single series, pinned y-range).
    RotdRatio,
}

impl ChartKind {
    /// Human-readable chart name.
    pub fn label(self) -> &'static str {
        match self {
            ChartKind::ResponseSpectrum => "response spectrum",
            ChartKind::RotdRatio => "RotD ratio",
        }
    }
}

// ============================================================================
// OUTPUT
// ============================================================================

/// Output format for the `toc` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable pretty output.
    #[default]
    Human,
    /// Machine-readable JSON.
    Json,
}

// ============================================================================
// TESTS
// ============================================================================
