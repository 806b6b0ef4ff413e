//! A small backtracking pattern matcher.
//!
//! Patterns use a cut-down regular-expression syntax: literals, `\` escapes,
//! the `.` wildcard, `[...]` and `[^...]` classes, and the `?`, `*` and `+`
//! quantifiers. See [`pattern`] for the full grammar.
//!
//! # Example
//!
//! ```rust
//! use tinyre::{Range, compile, find, match_ranges, matches};
//!
//! let pattern = compile("a*ab").unwrap();
//!
//! // The whole subject must match.
//! assert!(matches(&pattern, "aaab"));
//! assert!(!matches(&pattern, "aaabx"));
//!
//! // Per-operator ranges of a successful match.
//! let m = match_ranges(&pattern, "aab").unwrap();
//! assert_eq!(m.consumed(), vec![
//!     Range::new(0, 1).unwrap(),
//!     Range::new(1, 2).unwrap(),
//!     Range::new(2, 3).unwrap(),
//! ]);
//!
//! // Leftmost substring search.
//! let m = find(&pattern, "xxaabyy").unwrap();
//! assert_eq!(m.span().to_string(), "[2, 5)");
//! ```

pub mod error;
pub mod pattern;
mod range;

pub use error::{HistoryError, MatchError, PatternError, RangeError};
pub use pattern::{
    CharSet, MatchResult, Matcher, OpKind, Operator, Pattern, Quantifier, compile, find,
    match_ranges, matches,
};
pub use range::Range;
