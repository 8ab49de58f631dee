//! Bitmask subsets of a vertex table (at most 16 vertices).

use std::fmt;

use crate::vertex::VertexId;

/// A set of vertex ids packed into a `u16`; bit `i` is `VertexId(i)`.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexSet(u16);

impl VertexSet {
    pub const CAPACITY: usize = 16;

    pub const fn empty() -> Self {
        Self(0)
    }

    /// The first `n` ids. Pre: `n <= CAPACITY`.
    pub fn full(n: usize) -> Self {
        debug_assert!(n <= Self::CAPACITY);
        if n >= Self::CAPACITY {
            Self(u16::MAX)
        } else {
            Self((1u16 << n) - 1)
        }
    }

    pub fn bits(self) -> u16 {
        self.0
    }

    #[inline]
    pub fn contains(self, id: VertexId) -> bool {
        id.0 < Self::CAPACITY && self.0 & (1 << id.0) != 0
    }

    #[inline]
    pub fn insert(&mut self, id: VertexId) {
        debug_assert!(id.0 < Self::CAPACITY);
        self.0 |= 1 << id.0;
    }

    #[inline]
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Complement within the first `n` ids.
    pub fn complement(self, n: usize) -> Self {
        Self(!self.0 & Self::full(n).0)
    }

    /// Member ids in ascending order.
    pub fn iter(self) -> impl Iterator<Item = VertexId> + Clone {
        (0..Self::CAPACITY)
            .filter(move |&i| self.0 & (1 << i) != 0)
            .map(VertexId)
    }
}

impl FromIterator<VertexId> for VertexSet {
    fn from_iter<I: IntoIterator<Item = VertexId>>(iter: I) -> Self {
        let mut set = Self::empty();
        for id in iter {
            set.insert(id);
        }
        set
    }
}

impl fmt::Debug for VertexSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter().map(|id| id.0)).finish()
    }
}
