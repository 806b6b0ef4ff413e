//! Backtracking matcher: decide whether a [`Pattern`] matches a subject string.
//!
//! All positions are **character** (not byte) indices into the subject.
//!
//! Each operator first takes as many repetitions as it can, then gives them
//! back one at a time, most recent first, until the rest of the pattern
//! matches or its minimum is reached. Accepted repetitions are kept in a
//! [`History`] owned by the match attempt, so patterns are never mutated.

use log::{error, trace};

use crate::error::MatchError;
use crate::range::Range;

use super::ast::Pattern;
use super::history::History;

/// The result of a successful match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    span: Range,
    repetitions: Vec<Vec<Range>>,
}

impl MatchResult {
    /// The whole matched region of the subject.
    pub fn span(&self) -> Range {
        self.span
    }

    /// The ranges consumed by each repetition of operator `index`, or `None`
    /// if the pattern has no such operator.
    pub fn repetitions(&self, index: usize) -> Option<&[Range]> {
        self.repetitions.get(index).map(Vec::as_slice)
    }

    /// The region consumed by each operator, in pattern order.
    ///
    /// An operator that matched zero times gets an empty range where it would
    /// have started.
    pub fn consumed(&self) -> Vec<Range> {
        let Some((mut cursor, _)) = self.span.offsets() else {
            return Vec::new();
        };
        self.repetitions
            .iter()
            .map(|reps| {
                let start = cursor;
                if let Some((_, end)) = reps.last().and_then(Range::offsets) {
                    cursor = end;
                }
                Range::span(start, cursor)
            })
            .collect()
    }
}

/// Test whether `pattern` matches the whole of `subject`.
pub fn matches(pattern: &Pattern, subject: &str) -> bool {
    match Matcher::new(pattern).full_match(subject) {
        Ok(result) => result.is_some(),
        Err(err) => {
            error!("match of {pattern} against {subject:?} failed: {err}");
            false
        }
    }
}

/// Match `pattern` against the whole of `subject`, returning the consumed ranges.
pub fn match_ranges(pattern: &Pattern, subject: &str) -> Option<MatchResult> {
    Matcher::new(pattern).full_match(subject).unwrap_or_else(|err| {
        error!("match of {pattern} against {subject:?} failed: {err}");
        None
    })
}

/// Find the leftmost substring of `subject` that `pattern` matches.
pub fn find(pattern: &Pattern, subject: &str) -> Option<MatchResult> {
    Matcher::new(pattern).find(subject).unwrap_or_else(|err| {
        error!("search for {pattern} in {subject:?} failed: {err}");
        None
    })
}

/// A reusable matcher for one pattern, with an optional step budget.
#[derive(Debug, Clone)]
pub struct Matcher<'p> {
    pattern: &'p Pattern,
    step_limit: Option<usize>,
}

impl<'p> Matcher<'p> {
    pub fn new(pattern: &'p Pattern) -> Self {
        Self {
            pattern,
            step_limit: None,
        }
    }

    /// Give up with [`MatchError::StepLimitExceeded`] after `limit` steps.
    ///
    /// A step is one attempt to match the remainder of the pattern from some
    /// operator and offset.
    pub fn step_limit(mut self, limit: usize) -> Self {
        self.step_limit = Some(limit);
        self
    }

    /// Match the whole of `subject`.
    pub fn full_match(&self, subject: &str) -> Result<Option<MatchResult>, MatchError> {
        let text: Vec<char> = subject.chars().collect();
        let mut search = Search::new(self, &text, true);
        search.run(0)
    }

    /// Match a substring of `subject`, preferring the leftmost start.
    ///
    /// The step budget is shared across all start offsets.
    pub fn find(&self, subject: &str) -> Result<Option<MatchResult>, MatchError> {
        let text: Vec<char> = subject.chars().collect();
        let mut search = Search::new(self, &text, false);
        for start in 0..=text.len() {
            if let Some(result) = search.run(start)? {
                return Ok(Some(result));
            }
        }
        Ok(None)
    }

    /// Convenience wrapper over [`Matcher::full_match`].
    pub fn is_match(&self, subject: &str) -> Result<bool, MatchError> {
        Ok(self.full_match(subject)?.is_some())
    }
}

/// State for one match attempt.
struct Search<'m> {
    pattern: &'m Pattern,
    text: &'m [char],
    /// Whether the pattern must consume the rest of the subject.
    anchored_end: bool,
    step_limit: Option<usize>,
    steps: usize,
    history: History,
}

impl<'m> Search<'m> {
    fn new(matcher: &Matcher<'m>, text: &'m [char], anchored_end: bool) -> Self {
        Self {
            pattern: matcher.pattern,
            text,
            anchored_end,
            step_limit: matcher.step_limit,
            steps: 0,
            history: History::new(matcher.pattern.len()),
        }
    }

    fn run(&mut self, start: usize) -> Result<Option<MatchResult>, MatchError> {
        self.history.reset();
        let Some(end) = self.match_from(start)? else {
            return Ok(None);
        };
        trace!("matched [{start}, {end})");
        Ok(Some(MatchResult {
            span: Range::span(start, end),
            repetitions: self.history.clone().into_stacks(),
        }))
    }

    fn step(&mut self) -> Result<(), MatchError> {
        self.steps += 1;
        match self.step_limit {
            Some(limit) if self.steps > limit => Err(MatchError::StepLimitExceeded { limit }),
            _ => Ok(()),
        }
    }

    /// Match the whole pattern starting at `start`, returning the end offset.
    ///
    /// Frames live on the heap, one per operator that has committed to a
    /// repetition count, so pattern length never grows the native stack. On
    /// success the history holds the committed repetitions of every operator.
    /// On failure every stack is left empty.
    fn match_from(&mut self, start: usize) -> Result<Option<usize>, MatchError> {
        let pattern = self.pattern;
        let operators = pattern.operators();
        let mut frames: Vec<Frame> = Vec::with_capacity(operators.len());
        let mut offset = start;

        loop {
            self.step()?;
            let index = frames.len();
            let advanced = match operators.get(index) {
                None => {
                    if !self.anchored_end || offset == self.text.len() {
                        return Ok(Some(offset));
                    }
                    false
                }
                Some(op) => {
                    // Greedy run.
                    let mut pos = offset;
                    let mut count = 0;
                    while op.quantifier.allows_more(count) {
                        let Some(range) = op.attempt_match(self.text, pos) else {
                            break;
                        };
                        self.history.record_match(index, range);
                        pos += range.len();
                        count += 1;
                    }
                    let min = op.min_repeat();
                    if count < min {
                        trace!("op {index} ({op}) matched {count} < {min} at {offset}");
                        self.history.truncate(index, 0);
                        false
                    } else {
                        frames.push(Frame { pos, count, min });
                        offset = pos;
                        true
                    }
                }
            };
            if advanced {
                continue;
            }

            // Give back one repetition of the nearest operator above its minimum.
            loop {
                let Some(index) = frames.len().checked_sub(1) else {
                    return Ok(None);
                };
                let frame = &mut frames[index];
                if frame.count == frame.min {
                    self.history.truncate(index, 0);
                    frames.pop();
                    continue;
                }
                let undone = self.history.undo_last_match(index)?;
                frame.pos -= undone.len();
                frame.count -= 1;
                offset = frame.pos;
                trace!("op {index} backtracks to {}", frame.count);
                break;
            }
        }
    }
}

/// An operator's committed repetition count, and where the next operator starts.
struct Frame {
    pos: usize,
    count: usize,
    min: usize,
}
