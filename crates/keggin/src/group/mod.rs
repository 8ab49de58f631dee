//! Finite permutation groups generated by a handful of rotations.
//!
//! Purpose
//! - Close a generator set under composition and expose the resulting group
//!   together with its action on vertices and vertex subsets.
//!
//! Algorithm
//! - Breadth-first closure: seed with the identity and the generators, then
//!   compose each newly found element with every generator in both operand
//!   orders until a pass finds nothing new. For a finite group this yields
//!   every product of generators, hence a set closed under composition.
//! - Elements are kept in discovery order; index 0 is always the identity.

use std::collections::HashMap;
use std::fmt;

use crate::perm::Permutation;
use crate::subset::VertexSet;
use crate::vertex::VertexId;

/// Errors raised while generating a group (configuration errors).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupError {
    NoGenerators,
    /// Generators act on different numbers of points.
    SizeMismatch { expected: usize, found: usize },
    /// A generator does not have the order the domain requires.
    GeneratorOrder {
        index: usize,
        expected: usize,
        found: usize,
    },
    /// The closure does not have the expected number of elements.
    UnexpectedOrder { expected: usize, found: usize },
    /// More points than a `VertexSet` can hold.
    TooManyPoints { degree: usize, max: usize },
}

impl fmt::Display for GroupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoGenerators => write!(f, "cannot generate a group from zero generators"),
            Self::SizeMismatch { expected, found } => write!(
                f,
                "generators act on {expected} and {found} points; all must match"
            ),
            Self::GeneratorOrder {
                index,
                expected,
                found,
            } => write!(f, "generator {index} has order {found}, expected {expected}"),
            Self::UnexpectedOrder { expected, found } => write!(
                f,
                "generators close to a group of order {found}, expected {expected}"
            ),
            Self::TooManyPoints { degree, max } => {
                write!(f, "generators act on {degree} points; at most {max} supported")
            }
        }
    }
}

impl std::error::Error for GroupError {}

/// A finite group of permutations; read-only after construction.
#[derive(Clone, Debug)]
pub struct RotationGroup {
    elements: Vec<Permutation>,
    lookup: HashMap<Permutation, usize>,
    degree: usize,
}

impl RotationGroup {
    /// Close `generators` under composition.
    pub fn generate(generators: &[Permutation]) -> Result<Self, GroupError> {
        let Some(first) = generators.first() else {
            return Err(GroupError::NoGenerators);
        };
        let degree = first.len();
        if degree > VertexSet::CAPACITY {
            return Err(GroupError::TooManyPoints {
                degree,
                max: VertexSet::CAPACITY,
            });
        }
        if let Some(bad) = generators.iter().find(|g| g.len() != degree) {
            return Err(GroupError::SizeMismatch {
                expected: degree,
                found: bad.len(),
            });
        }

        let mut group = Self {
            elements: Vec::new(),
            lookup: HashMap::new(),
            degree,
        };
        group.insert(Permutation::identity(degree));
        for g in generators {
            group.insert(g.clone());
        }

        let mut frontier: Vec<usize> = (0..group.elements.len()).collect();
        while !frontier.is_empty() {
            let mut next = Vec::new();
            for &i in &frontier {
                for g in generators {
                    let products = [group.elements[i].compose(g), g.compose(&group.elements[i])];
                    for candidate in products {
                        if let Some(idx) = group.insert(candidate) {
                            next.push(idx);
                        }
                    }
                }
            }
            frontier = next;
        }
        Ok(group)
    }

    /// Close `generators` and require the result to have `expected_order` elements.
    pub fn build(generators: &[Permutation], expected_order: usize) -> Result<Self, GroupError> {
        let group = Self::generate(generators)?;
        if group.order() != expected_order {
            return Err(GroupError::UnexpectedOrder {
                expected: expected_order,
                found: group.order(),
            });
        }
        Ok(group)
    }

    /// Returns the index of `p` if it was new.
    fn insert(&mut self, p: Permutation) -> Option<usize> {
        if self.lookup.contains_key(&p) {
            return None;
        }
        let idx = self.elements.len();
        self.lookup.insert(p.clone(), idx);
        self.elements.push(p);
        Some(idx)
    }

    /// Number of elements.
    pub fn order(&self) -> usize {
        self.elements.len()
    }

    /// Number of points acted on.
    pub fn degree(&self) -> usize {
        self.degree
    }

    pub fn identity(&self) -> &Permutation {
        &self.elements[0]
    }

    pub fn elements(&self) -> &[Permutation] {
        &self.elements
    }

    pub fn iter(&self) -> impl Iterator<Item = &Permutation> {
        self.elements.iter()
    }

    pub fn contains(&self, p: &Permutation) -> bool {
        self.lookup.contains_key(p)
    }

    /// Index of `p` in discovery order, if it belongs to the group.
    pub fn index_of(&self, p: &Permutation) -> Option<usize> {
        self.lookup.get(p).copied()
    }

    /// Exhaustive check that every product of two elements is an element.
    pub fn is_closed(&self) -> bool {
        self.elements
            .iter()
            .all(|g| self.elements.iter().all(|h| self.contains(&g.compose(h))))
    }

    /// Images of `set` under every element, deduplicated and sorted.
    pub fn orbit_of_set(&self, set: VertexSet) -> Vec<VertexSet> {
        let mut out: Vec<VertexSet> = self.elements.iter().map(|g| g.image_set(set)).collect();
        out.sort_unstable();
        out.dedup();
        out
    }

    /// Partition of the points into orbits of single vertices.
    pub fn vertex_orbits(&self) -> Vec<VertexSet> {
        let mut seen = VertexSet::empty();
        let mut out = Vec::new();
        for i in 0..self.degree {
            let v = VertexId(i);
            if seen.contains(v) {
                continue;
            }
            let orbit: VertexSet = self.elements.iter().map(|g| g.image(v)).collect();
            for u in orbit.iter() {
                seen.insert(u);
            }
            out.push(orbit);
        }
        out
    }
}

#[cfg(test)]
mod tests;
