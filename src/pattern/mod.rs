//! Pattern compiler and backtracking matcher.
//!
//! Every atom matches exactly one character. Quantifiers follow the atom they
//! repeat, and matching is greedy with backtracking.
//!
//! # Pattern syntax
//!
//! | Token     | Meaning                                         |
//! |-----------|-------------------------------------------------|
//! | `c`       | The literal character `c`                       |
//! | `\c`      | `c` taken literally, even if special            |
//! | `.`       | Any one character                               |
//! | `[abc]`   | One of `a`, `b`, `c`                            |
//! | `[^abc]`  | Any character except `a`, `b`, `c`              |
//! | `[\]]`    | Escaped member inside a class                   |
//! | `X?`      | Zero or one `X`                                 |
//! | `X*`      | Zero or more `X`                                |
//! | `X+`      | One or more `X`                                 |
//!
//! Only a `^` directly after `[` negates a class. Matching with [`matches`]
//! requires the pattern to consume the whole subject; [`find`] searches for
//! the leftmost substring instead.

pub mod ast;
pub mod char_class;
pub mod history;
pub mod matcher;
pub mod parser;

#[cfg(test)]
mod tests;

pub use ast::{OpKind, Operator, Pattern, Quantifier};
pub use char_class::CharSet;
pub use matcher::{MatchResult, Matcher, find, match_ranges, matches};
pub use parser::compile;
