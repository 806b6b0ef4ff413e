//! Compiled pattern types.

use std::fmt;
use std::str::FromStr;

use crate::error::PatternError;
use crate::range::Range;

use super::char_class::CharSet;

/// A compiled pattern: the operators in the order their atoms appeared.
///
/// A pattern is immutable once compiled. Match-time state lives in the
/// matcher, so one pattern can be shared between any number of matches.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Pattern {
    operators: Vec<Operator>,
}

impl Pattern {
    pub(crate) fn new(operators: Vec<Operator>) -> Self {
        Self { operators }
    }

    pub fn operators(&self) -> &[Operator] {
        &self.operators
    }

    pub fn len(&self) -> usize {
        self.operators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }

    /// True if the pattern can match the empty string.
    pub fn accepts_empty(&self) -> bool {
        self.operators.iter().all(|op| op.quantifier.min() == 0)
    }
}

impl FromStr for Pattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        super::parser::compile(s)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.operators.iter().try_for_each(|op| write!(f, "{op}"))
    }
}

/// One atom of a pattern together with its repetition bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operator {
    pub kind: OpKind,
    pub quantifier: Quantifier,
}

impl Operator {
    /// An operator that must match exactly once.
    pub fn new(kind: OpKind) -> Self {
        Self {
            kind,
            quantifier: Quantifier::Once,
        }
    }

    pub fn min_repeat(&self) -> usize {
        self.quantifier.min()
    }

    /// `None` means unbounded.
    pub fn max_repeat(&self) -> Option<usize> {
        self.quantifier.max()
    }

    /// Try to match a single repetition at character offset `at`.
    ///
    /// Every atom consumes exactly one character, so a successful match is
    /// always `[at, at + 1)`. The result depends only on `subject` and `at`.
    pub fn attempt_match(&self, subject: &[char], at: usize) -> Option<Range> {
        let ch = *subject.get(at)?;
        self.kind.accepts(ch).then(|| Range::span(at, at + 1))
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.kind, self.quantifier)
    }
}

/// The closed set of single-character predicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpKind {
    /// A specific character.
    Literal(char),
    /// `.` — any character.
    Any,
    /// `[...]` — any member of the set.
    OneOf(CharSet),
    /// `[^...]` — any character outside the set.
    NoneOf(CharSet),
}

impl OpKind {
    pub fn accepts(&self, ch: char) -> bool {
        match self {
            OpKind::Literal(c) => *c == ch,
            OpKind::Any => true,
            OpKind::OneOf(set) => set.contains(ch),
            OpKind::NoneOf(set) => !set.contains(ch),
        }
    }
}

impl fmt::Display for OpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpKind::Literal(c) if is_special(*c) => write!(f, "\\{c}"),
            OpKind::Literal(c) => write!(f, "{c}"),
            OpKind::Any => f.write_str("."),
            OpKind::OneOf(set) => write_class(f, false, set),
            OpKind::NoneOf(set) => write_class(f, true, set),
        }
    }
}

fn write_class(f: &mut fmt::Formatter<'_>, negated: bool, set: &CharSet) -> fmt::Result {
    f.write_str(if negated { "[^" } else { "[" })?;
    for ch in set.iter() {
        if matches!(ch, '\\' | ']' | '^') {
            f.write_str("\\")?;
        }
        write!(f, "{ch}")?;
    }
    f.write_str("]")
}

/// Characters that need an escape to be matched literally outside a class.
pub(crate) fn is_special(c: char) -> bool {
    matches!(c, '\\' | '[' | ']' | '.' | '?' | '*' | '+')
}

/// Repetition bounds attached to an operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantifier {
    /// No suffix: exactly one repetition.
    Once,
    /// `?`
    Optional,
    /// `*`
    ZeroOrMore,
    /// `+`
    OneOrMore,
}

impl Quantifier {
    pub fn min(self) -> usize {
        match self {
            Quantifier::Once | Quantifier::OneOrMore => 1,
            Quantifier::Optional | Quantifier::ZeroOrMore => 0,
        }
    }

    /// `None` means unbounded.
    pub fn max(self) -> Option<usize> {
        match self {
            Quantifier::Once | Quantifier::Optional => Some(1),
            Quantifier::ZeroOrMore | Quantifier::OneOrMore => None,
        }
    }

    /// True if `count` repetitions may still be extended by another.
    pub fn allows_more(self, count: usize) -> bool {
        self.max().is_none_or(|max| count < max)
    }
}

impl fmt::Display for Quantifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Quantifier::Once => "",
            Quantifier::Optional => "?",
            Quantifier::ZeroOrMore => "*",
            Quantifier::OneOrMore => "+",
        })
    }
}
