//! Character class membership for bracketed `[...]` atoms.

use itertools::Itertools;

/// The members of a character class, kept sorted and deduplicated.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CharSet {
    members: Vec<char>,
}

impl CharSet {
    pub fn new(members: impl IntoIterator<Item = char>) -> Self {
        Self {
            members: members.into_iter().sorted_unstable().dedup().collect(),
        }
    }

    /// Test whether `ch` is a member of the set.
    pub fn contains(&self, ch: char) -> bool {
        self.members.binary_search(&ch).is_ok()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.members.iter().copied()
    }
}

impl FromIterator<char> for CharSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self::new(iter)
    }
}
