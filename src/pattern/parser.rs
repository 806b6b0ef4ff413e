//! Single-pass compiler from pattern strings to [`Pattern`]s.

use log::debug;
use phf::{Map, phf_map};

use crate::error::PatternError;

use super::ast::*;
use super::char_class::CharSet;

const QUANTIFIERS: Map<char, Quantifier> = phf_map! {
    '?' => Quantifier::Optional,
    '*' => Quantifier::ZeroOrMore,
    '+' => Quantifier::OneOrMore,
};

/// Compile a pattern string into a [`Pattern`].
///
/// Quantifiers annotate the operator before them; they never add operators.
pub fn compile(input: &str) -> Result<Pattern, PatternError> {
    let mut parser = Parser {
        operators: Vec::new(),
        mode: Mode::Normal,
    };
    for (position, ch) in input.chars().enumerate() {
        parser.accept(position, ch)?;
    }
    let pattern = parser.finish()?;
    debug!("compiled {input:?} into {} operators", pattern.len());
    Ok(pattern)
}

struct Parser {
    operators: Vec<Operator>,
    mode: Mode,
}

enum Mode {
    Normal,
    /// After a `\` at `position`.
    Escape { position: usize },
    Class(ClassState),
}

/// Inside `[...]`.
struct ClassState {
    opened_at: usize,
    negated: bool,
    escape: bool,
    members: Vec<char>,
}

impl Parser {
    fn accept(&mut self, position: usize, ch: char) -> Result<(), PatternError> {
        match &mut self.mode {
            Mode::Escape { .. } => {
                self.push(OpKind::Literal(ch));
                self.mode = Mode::Normal;
            }
            Mode::Class(class) => {
                if let Some(kind) = class.accept(ch) {
                    self.push(kind);
                    self.mode = Mode::Normal;
                }
            }
            Mode::Normal => match ch {
                '\\' => self.mode = Mode::Escape { position },
                '[' => self.mode = Mode::Class(ClassState::new(position)),
                '.' => self.push(OpKind::Any),
                _ => match QUANTIFIERS.get(&ch) {
                    Some(&quantifier) => {
                        let prev = self.operators.last_mut().ok_or(
                            PatternError::DanglingQuantifier {
                                quantifier: ch,
                                position,
                            },
                        )?;
                        prev.quantifier = quantifier;
                    }
                    None => self.push(OpKind::Literal(ch)),
                },
            },
        }
        Ok(())
    }

    fn push(&mut self, kind: OpKind) {
        self.operators.push(Operator::new(kind));
    }

    fn finish(self) -> Result<Pattern, PatternError> {
        match self.mode {
            Mode::Normal => Ok(Pattern::new(self.operators)),
            Mode::Escape { position } => Err(PatternError::TrailingEscape { position }),
            Mode::Class(class) => Err(PatternError::UnterminatedClass {
                position: class.opened_at,
            }),
        }
    }
}

impl ClassState {
    fn new(opened_at: usize) -> Self {
        Self {
            opened_at,
            negated: false,
            escape: false,
            members: Vec::new(),
        }
    }

    /// Feed one character; returns the finished atom once `]` closes the class.
    fn accept(&mut self, ch: char) -> Option<OpKind> {
        if self.escape {
            self.escape = false;
            self.members.push(ch);
            return None;
        }
        match ch {
            '\\' => self.escape = true,
            // Only a `^` directly after `[` negates.
            '^' if !self.negated && self.members.is_empty() => self.negated = true,
            ']' => {
                let set = CharSet::new(std::mem::take(&mut self.members));
                return Some(if self.negated {
                    OpKind::NoneOf(set)
                } else {
                    OpKind::OneOf(set)
                });
            }
            _ => self.members.push(ch),
        }
        None
    }
}
