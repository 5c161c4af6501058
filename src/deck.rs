//! Deck loading and validation.
//!
//! Decks are JSON documents deserialized into [`Deck`]. Loading is the
//! one fallible surface in the program; everything downstream works on
//! an already-validated deck.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::types::Deck;

/// The built-in ground-motion lecture, embedded at compile time.
const BUILTIN_DECK: &str = include_str!("../assets/ground_motion.json");

// ============================================================================
// ERRORS
// ============================================================================

/// Why a deck could not be loaded.
#[derive(Debug, Error)]
pub enum DeckError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid deck JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("deck has no slides")]
    Empty,

    #[error("quiz '{id}' has no options")]
    QuizWithoutOptions { id: String },
}

// ============================================================================
// LOADING
// ============================================================================

/// Load and validate a deck from a JSON file.
pub fn load_deck(path: &Path) -> Result<Deck, DeckError> {
    let raw = fs::read_to_string(path).map_err(|source| DeckError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let deck: Deck = serde_json::from_str(&raw)?;
    validate(&deck)?;
    Ok(deck)
}

/// The built-in deck.
pub fn builtin_deck() -> Deck {
    // The asset is compiled in; a parse failure is a build defect.
    serde_json::from_str(BUILTIN_DECK)
        .unwrap_or_else(|e| panic!("built-in deck is malformed: {}", e))
}

// ============================================================================
// VALIDATION
// ============================================================================

/// Structural validation: conditions under which the deck is unusable.
pub fn validate(deck: &Deck) -> Result<(), DeckError> {
    if deck.slides.is_empty() {
        return Err(DeckError::Empty);
    }
    for quiz in deck.all_quizzes() {
        if quiz.options.is_empty() {
            return Err(DeckError::QuizWithoutOptions {
                id: quiz.id.clone(),
            });
        }
    }
    Ok(())
}

/// Non-fatal issues worth surfacing to deck authors via `check`.
///
/// Everything reported here still presents fine; the presenter falls
/// back to generic feedback or ignores the unusable piece.
pub fn lint(deck: &Deck) -> Vec<String> {
    let mut warnings = Vec::new();
    let mut seen_ids: Vec<&str> = Vec::new();

    for quiz in deck.all_quizzes() {
        if seen_ids.contains(&quiz.id.as_str()) {
            warnings.push(format!(
                "duplicate quiz id '{}': answers will be shared across questions",
                quiz.id
            ));
        }
        seen_ids.push(&quiz.id);

        if !deck.answers.contains(&quiz.id) {
            warnings.push(format!(
                "quiz '{}' has no entry in the answer table: correct answers will show generic feedback",
                quiz.id
            ));
        }
        if !quiz.options.iter().any(|o| o.correct) {
            warnings.push(format!(
                "quiz '{}' has no option marked correct",
                quiz.id
            ));
        }
        if quiz.options.len() > 9 {
            warnings.push(format!(
                "quiz '{}' has {} options but only digits 1-9 are bound",
                quiz.id,
                quiz.options.len()
            ));
        }
    }

    warnings
}

// ============================================================================
// TESTS
// ============================================================================
