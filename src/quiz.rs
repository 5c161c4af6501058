//! Quiz answering: marker state and feedback lookup.
//!
//! Pure logic: (answer table, quiz, picked option) → marker + feedback.
//! No scoring, no attempt limits: a learner can re-answer forever and
//! only the most recent pick per question keeps a marker.

use std::collections::BTreeMap;

use crate::types::{AnswerTable, QuizBlock};

/// Fixed feedback for a wrong answer. Never reveals the explanation.
pub const RETRY_FEEDBACK: &str = "✗ Try again!";

/// Fallback text when a correct answer's id is missing from the table.
pub const GENERIC_CORRECT: &str = "Correct!";

// ============================================================================
// TYPES
// ============================================================================

/// Visual state of the most recently picked option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Incorrect,
}

/// The recorded answer for one question: which option, how it went,
/// and the feedback line to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    /// Index of the picked option within the question group.
    pub option: usize,
    pub verdict: Verdict,
    pub feedback: String,
}

/// Per-question answer markers, keyed by question id.
///
/// Inserting a new answer for an id replaces the previous one: within a
/// question group at most one option ever carries a marker.
#[derive(Debug, Clone, Default)]
pub struct QuizMarks {
    answered: BTreeMap<String, Answer>,
}

// ============================================================================
// ANSWERING
// ============================================================================

impl QuizMarks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record picking `option` on `quiz`.
    ///
    /// Out-of-range options are silently ignored. Correct picks render
    /// the answer-table text (generic fallback for unmapped ids); wrong
    /// picks render the fixed retry message.
    pub fn answer(&mut self, table: &AnswerTable, quiz: &QuizBlock, option: usize) {
        let Some(picked) = quiz.options.get(option) else {
            return;
        };

        let answer = if picked.correct {
            Answer {
                option,
                verdict: Verdict::Correct,
                feedback: format!(
                    "✓ {}",
                    table.lookup(&quiz.id).unwrap_or(GENERIC_CORRECT)
                ),
            }
        } else {
            Answer {
                option,
                verdict: Verdict::Incorrect,
                feedback: RETRY_FEEDBACK.to_string(),
            }
        };

        self.answered.insert(quiz.id.clone(), answer);
    }

    /// The current marker for a question, if it has been answered.
    pub fn mark(&self, id: &str) -> Option<&Answer> {
        self.answered.get(id)
    }

    /// Number of questions answered so far.
    pub fn answered_count(&self) -> usize {
        self.answered.len()
    }
}

// ============================================================================
// TESTS
// ============================================================================
