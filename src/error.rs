//! Error types for compiling and running patterns.

use thiserror::Error;

/// Errors raised while compiling a pattern string.
///
/// `position` is the character index in the pattern where the problem was found.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("quantifier {quantifier:?} at position {position} has nothing to repeat")]
    DanglingQuantifier { quantifier: char, position: usize },
    #[error("character class opened at position {position} is never closed")]
    UnterminatedClass { position: usize },
    #[error("escape at position {position} is not followed by a character")]
    TrailingEscape { position: usize },
}

/// A [`Range`](crate::Range) was built with bounds that break its invariant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("invalid range [{start}, {end})")]
    Invalid { start: isize, end: isize },
}

/// Backtracking bookkeeping was asked to undo more than it recorded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HistoryError {
    #[error("no recorded match to undo for operator {operator}")]
    Underflow { operator: usize },
}

/// Errors from a budgeted match attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    #[error("backtracking step limit of {limit} exceeded")]
    StepLimitExceeded { limit: usize },
    #[error("internal matcher error: {0}")]
    Internal(#[from] HistoryError),
}
