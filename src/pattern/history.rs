//! Per-operator match stacks used for backtracking.
//!
//! Each operator of the pattern being matched owns one stack of the ranges its
//! accepted repetitions consumed, in acceptance order. The stacks belong to a
//! single match attempt, never to the compiled pattern.

use crate::error::HistoryError;
use crate::range::Range;

#[derive(Debug, Clone, Default)]
pub struct History {
    stacks: Vec<Vec<Range>>,
}

impl History {
    /// Empty history for a pattern of `operators` operators.
    pub fn new(operators: usize) -> Self {
        Self {
            stacks: vec![Vec::new(); operators],
        }
    }

    /// Clear every stack before a fresh attempt.
    pub fn reset(&mut self) {
        self.stacks.iter_mut().for_each(Vec::clear);
    }

    /// Record an accepted repetition of `operator`.
    pub fn record_match(&mut self, operator: usize, range: Range) {
        self.stacks[operator].push(range);
    }

    /// Remove and return the most recent repetition of `operator`.
    pub fn undo_last_match(&mut self, operator: usize) -> Result<Range, HistoryError> {
        self.stacks[operator]
            .pop()
            .ok_or(HistoryError::Underflow { operator })
    }

    /// Undo repetitions of `operator` until only `count` remain.
    pub fn truncate(&mut self, operator: usize, count: usize) {
        self.stacks[operator].truncate(count);
    }

    pub fn repetition_count(&self, operator: usize) -> usize {
        self.stacks[operator].len()
    }

    pub fn matches(&self, operator: usize) -> &[Range] {
        &self.stacks[operator]
    }

    pub fn into_stacks(self) -> Vec<Vec<Range>> {
        self.stacks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_and_undo_are_lifo() {
        let mut h = History::new(2);
        h.record_match(1, Range::span(0, 1));
        h.record_match(1, Range::span(1, 2));
        assert_eq!(h.repetition_count(1), 2);
        assert_eq!(h.repetition_count(0), 0);
        assert_eq!(h.undo_last_match(1), Ok(Range::span(1, 2)));
        assert_eq!(h.matches(1), &[Range::span(0, 1)]);
    }

    #[test]
    fn undo_on_empty_stack_underflows() {
        let mut h = History::new(1);
        assert_eq!(
            h.undo_last_match(0),
            Err(HistoryError::Underflow { operator: 0 })
        );
    }

    #[test]
    fn reset_clears_every_stack() {
        let mut h = History::new(3);
        h.record_match(0, Range::span(0, 1));
        h.record_match(2, Range::span(1, 2));
        h.reset();
        assert!((0..3).all(|i| h.repetition_count(i) == 0));
    }

    #[test]
    fn truncate_keeps_oldest() {
        let mut h = History::new(1);
        for i in 0..4 {
            h.record_match(0, Range::span(i, i + 1));
        }
        h.truncate(0, 1);
        assert_eq!(h.matches(0), &[Range::span(0, 1)]);
    }
}
