//! Half-open spans of character indices.

use std::fmt;

use crate::error::RangeError;

/// A half-open span `[start, end)` of character indices into a subject string.
///
/// `start == end` is an empty match at that position. Either bound may be `-1`
/// to mark the range as unset; see [`Range::INVALID`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range {
    start: isize,
    end: isize,
}

impl Range {
    /// The unset range `[-1, -1)`.
    pub const INVALID: Range = Range { start: -1, end: -1 };

    /// Create a range, checking `-1 <= start <= end` and `end >= -1`.
    pub fn new(start: isize, end: isize) -> Result<Self, RangeError> {
        if start > end || start < -1 || end < -1 {
            return Err(RangeError::Invalid { start, end });
        }
        Ok(Self { start, end })
    }

    /// Range over character offsets already known to be ordered.
    pub(crate) fn span(start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        Self {
            start: start as isize,
            end: end as isize,
        }
    }

    pub fn start(&self) -> isize {
        self.start
    }

    pub fn end(&self) -> isize {
        self.end
    }

    /// False when either bound is the `-1` sentinel.
    pub fn is_valid(&self) -> bool {
        self.start >= 0 && self.end >= 0
    }

    /// Number of characters covered. Unset ranges have length 0.
    pub fn len(&self) -> usize {
        if self.is_valid() {
            (self.end - self.start) as usize
        } else {
            0
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The bounds as indices, or `None` for an unset range.
    pub fn offsets(&self) -> Option<(usize, usize)> {
        self.is_valid()
            .then_some((self.start as usize, self.end as usize))
    }
}

impl Default for Range {
    /// The empty range `[0, 0)`.
    fn default() -> Self {
        Self { start: 0, end: 0 }
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_ordered_bounds() {
        let r = Range::new(1, 5).unwrap();
        assert_eq!(r.start(), 1);
        assert_eq!(r.end(), 5);
        assert_eq!(r.len(), 4);
        assert_eq!(r.offsets(), Some((1, 5)));
    }

    #[test]
    fn new_rejects_reversed_bounds() {
        assert_eq!(
            Range::new(5, 1),
            Err(RangeError::Invalid { start: 5, end: 1 })
        );
    }

    #[test]
    fn new_rejects_bounds_below_sentinel() {
        assert!(Range::new(-2, 0).is_err());
        assert!(Range::new(-3, -2).is_err());
    }

    #[test]
    fn sentinel_bounds_are_unset() {
        let r = Range::new(-1, 4).unwrap();
        assert!(!r.is_valid());
        assert_eq!(r.len(), 0);
        assert_eq!(r.offsets(), None);
        assert!(!Range::INVALID.is_valid());
    }

    #[test]
    fn default_is_empty_at_zero() {
        let r = Range::default();
        assert_eq!(r, Range::new(0, 0).unwrap());
        assert!(r.is_empty());
        assert!(r.is_valid());
    }

    #[test]
    fn equal_bounds_are_empty() {
        assert!(Range::span(3, 3).is_empty());
        assert_eq!(Range::span(3, 3).offsets(), Some((3, 3)));
    }

    #[test]
    fn display_half_open() {
        assert_eq!(Range::span(1, 5).to_string(), "[1, 5)");
        assert_eq!(Range::INVALID.to_string(), "[-1, -1)");
    }
}
