//! Colorings and their orbits under a rotation group.
//!
//! Purpose
//! - Walk all `C(n, z)` zero-subsets once, in lexicographic id order, and yield
//!   one canonical representative per orbit.
//!
//! Conventions
//! - A `Coloring` is identified by its zero-subset; the ones are the complement.
//! - The canonical representative of an orbit is the member whose ascending
//!   ordinal list is lexicographically smallest.
//! - The claimed set lives inside one `OrbitEnumerator` and is dropped with it.

use std::collections::HashSet;
use std::fmt;
use std::ops::Range;

use itertools::{Combinations, Itertools};

use crate::group::RotationGroup;
use crate::perm::Permutation;
use crate::subset::VertexSet;
use crate::vertex::{VertexId, VertexTable};

/// A two-coloring of the vertex table, stored as its zero-subset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coloring {
    zeros: VertexSet,
    vertex_count: usize,
}

impl Coloring {
    pub fn new(zeros: VertexSet, vertex_count: usize) -> Self {
        debug_assert!(zeros.complement(vertex_count).len() + zeros.len() == vertex_count);
        Self {
            zeros,
            vertex_count,
        }
    }

    pub fn zeros(&self) -> VertexSet {
        self.zeros
    }

    pub fn ones(&self) -> VertexSet {
        self.zeros.complement(self.vertex_count)
    }

    pub fn zero_count(&self) -> usize {
        self.zeros.len()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Apply `g` to the zero-subset.
    pub fn apply(&self, g: &Permutation) -> Coloring {
        Self::new(g.image_set(self.zeros), self.vertex_count)
    }

    /// Swap colors.
    pub fn swapped(&self) -> Coloring {
        Self::new(self.ones(), self.vertex_count)
    }
}

/// One orbit: its canonical representative and all members.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Orbit {
    pub representative: Coloring,
    /// Zero-subsets of every member, sorted.
    pub members: Vec<VertexSet>,
}

impl Orbit {
    pub fn size(&self) -> usize {
        self.members.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnumerateError {
    /// `zero_count` exceeds the number of vertices.
    ZeroCountOutOfRange { zero_count: usize, vertices: usize },
    DegreeMismatch { group: usize, table: usize },
}

impl fmt::Display for EnumerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroCountOutOfRange {
                zero_count,
                vertices,
            } => write!(
                f,
                "cannot color {zero_count} of {vertices} vertices with zeros"
            ),
            Self::DegreeMismatch { group, table } => write!(
                f,
                "group acts on {group} points but the vertex table has {table}"
            ),
        }
    }
}

impl std::error::Error for EnumerateError {}

/// Lazy, finite, single-pass sequence of orbits for one zero count.
pub struct OrbitEnumerator<'a> {
    group: &'a RotationGroup,
    table: &'a VertexTable,
    candidates: Combinations<Range<usize>>,
    claimed: HashSet<VertexSet>,
}

/// Start enumerating the orbits of colorings with `zero_count` zeros.
pub fn enumerate<'a>(
    group: &'a RotationGroup,
    table: &'a VertexTable,
    zero_count: usize,
) -> Result<OrbitEnumerator<'a>, EnumerateError> {
    if group.degree() != table.len() {
        return Err(EnumerateError::DegreeMismatch {
            group: group.degree(),
            table: table.len(),
        });
    }
    if zero_count > table.len() {
        return Err(EnumerateError::ZeroCountOutOfRange {
            zero_count,
            vertices: table.len(),
        });
    }
    Ok(OrbitEnumerator {
        group,
        table,
        candidates: (0..table.len()).combinations(zero_count),
        claimed: HashSet::new(),
    })
}

/// The orbit containing `coloring`, with its canonical representative.
pub fn orbit_of(group: &RotationGroup, table: &VertexTable, coloring: Coloring) -> Orbit {
    let members = group.orbit_of_set(coloring.zeros());
    let representative = members
        .iter()
        .copied()
        .min_by_key(|set| table.ordinals(*set))
        .unwrap_or(coloring.zeros());
    Orbit {
        representative: Coloring::new(representative, coloring.vertex_count()),
        members,
    }
}

impl Iterator for OrbitEnumerator<'_> {
    type Item = Orbit;

    fn next(&mut self) -> Option<Orbit> {
        let Self {
            group,
            table,
            candidates,
            claimed,
        } = self;
        for ids in candidates.by_ref() {
            let subset: VertexSet = ids.into_iter().map(VertexId).collect();
            if claimed.contains(&subset) {
                continue;
            }
            let orbit = orbit_of(group, table, Coloring::new(subset, table.len()));
            claimed.extend(orbit.members.iter().copied());
            return Some(orbit);
        }
        None
    }
}

/// Number of orbits of colorings with `zero_count` zeros.
pub fn count_orbits(
    group: &RotationGroup,
    table: &VertexTable,
    zero_count: usize,
) -> Result<usize, EnumerateError> {
    Ok(enumerate(group, table, zero_count)?.count())
}
