//! Permutations of a vertex table.
//!
//! A `Permutation` stores the image of every vertex id: `map[i]` is where
//! `VertexId(i)` goes. Composition follows function notation:
//! `p.compose(&q)` applies `q` first, then `p`.

use std::fmt;

use crate::subset::VertexSet;
use crate::vertex::{VertexError, VertexId, VertexTable};

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Permutation {
    map: Vec<usize>,
}

/// Errors raised when a mapping does not describe a bijection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PermutationError {
    /// Some image is out of range or hit twice.
    NotBijective { len: usize },
    /// A labelled mapping leaves `code` without an image (or gives it two).
    Incomplete { code: String },
    Vertex(VertexError),
}

impl fmt::Display for PermutationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotBijective { len } => {
                write!(f, "mapping of length {len} is not a bijection")
            }
            Self::Incomplete { code } => {
                write!(f, "mapping must give vertex {code} exactly one image")
            }
            Self::Vertex(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for PermutationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Vertex(e) => Some(e),
            _ => None,
        }
    }
}

impl From<VertexError> for PermutationError {
    fn from(e: VertexError) -> Self {
        Self::Vertex(e)
    }
}

impl Permutation {
    pub fn identity(n: usize) -> Self {
        Self {
            map: (0..n).collect(),
        }
    }

    pub fn from_map(map: Vec<usize>) -> Result<Self, PermutationError> {
        let n = map.len();
        let mut seen = vec![false; n];
        for &image in &map {
            if image >= n || seen[image] {
                return Err(PermutationError::NotBijective { len: n });
            }
            seen[image] = true;
        }
        Ok(Self { map })
    }

    /// Build from `(source_code, image_code)` pairs covering every vertex of `table`.
    pub fn from_labels(table: &VertexTable, pairs: &[(&str, &str)]) -> Result<Self, PermutationError> {
        let mut map: Vec<Option<usize>> = vec![None; table.len()];
        for (from, to) in pairs {
            let src = table.id_of(from)?;
            let dst = table.id_of(to)?;
            if map[src.0].replace(dst.0).is_some() {
                return Err(PermutationError::Incomplete {
                    code: table[src].code(),
                });
            }
        }
        let map = map
            .into_iter()
            .enumerate()
            .map(|(i, image)| {
                image.ok_or_else(|| PermutationError::Incomplete {
                    code: table[VertexId(i)].code(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_map(map)
    }

    /// Number of points acted on.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.map
    }

    #[inline]
    pub fn image(&self, v: VertexId) -> VertexId {
        VertexId(self.map[v.0])
    }

    /// `{ self(v) : v ∈ set }`.
    pub fn image_set(&self, set: VertexSet) -> VertexSet {
        set.iter().map(|v| self.image(v)).collect()
    }

    /// `self ∘ other`. Pre: both act on the same number of points.
    pub fn compose(&self, other: &Permutation) -> Permutation {
        debug_assert_eq!(self.len(), other.len());
        Self {
            map: other.map.iter().map(|&i| self.map[i]).collect(),
        }
    }

    pub fn inverse(&self) -> Permutation {
        let mut inv = vec![0; self.map.len()];
        for (i, &image) in self.map.iter().enumerate() {
            inv[image] = i;
        }
        Self { map: inv }
    }

    pub fn pow(&self, k: u32) -> Permutation {
        (0..k).fold(Self::identity(self.len()), |acc, _| acc.compose(self))
    }

    pub fn is_identity(&self) -> bool {
        self.map.iter().enumerate().all(|(i, &image)| i == image)
    }

    /// Disjoint cycles of length >= 2, each starting at its smallest point.
    pub fn cycles(&self) -> Vec<Vec<usize>> {
        let mut seen = vec![false; self.map.len()];
        let mut out = Vec::new();
        for start in 0..self.map.len() {
            if seen[start] {
                continue;
            }
            let mut cycle = Vec::new();
            let mut cur = start;
            while !seen[cur] {
                seen[cur] = true;
                cycle.push(cur);
                cur = self.map[cur];
            }
            if cycle.len() > 1 {
                out.push(cycle);
            }
        }
        out
    }

    /// Smallest `k >= 1` with `self^k = id` (lcm of the cycle lengths).
    pub fn order(&self) -> usize {
        self.cycles()
            .iter()
            .map(Vec::len)
            .fold(1, |acc, len| acc / gcd(acc, len) * len)
    }
}

fn gcd(mut a: usize, mut b: usize) -> usize {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

impl fmt::Display for Permutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cycles = self.cycles();
        if cycles.is_empty() {
            return write!(f, "()");
        }
        for cycle in cycles {
            let parts: Vec<String> = cycle.iter().map(usize::to_string).collect();
            write!(f, "({})", parts.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn perm(n: usize) -> impl Strategy<Value = Permutation> {
        Just((0..n).collect::<Vec<usize>>())
            .prop_shuffle()
            .prop_map(|map| Permutation::from_map(map).unwrap())
    }

    #[test]
    fn from_map_rejects_non_bijections() {
        assert!(Permutation::from_map(vec![0, 0, 1]).is_err());
        assert!(Permutation::from_map(vec![0, 3, 1]).is_err());
        assert!(Permutation::from_map(vec![2, 0, 1]).is_ok());
    }

    #[test]
    fn compose_applies_right_operand_first() {
        let p = Permutation::from_map(vec![1, 2, 0]).unwrap();
        let q = Permutation::from_map(vec![0, 2, 1]).unwrap();
        // q: 0->0, then p: 0->1
        assert_eq!(p.compose(&q).as_slice(), &[1, 0, 2]);
        assert_eq!(q.compose(&p).as_slice(), &[2, 1, 0]);
    }

    #[test]
    fn order_and_cycles() {
        let p = Permutation::from_map(vec![1, 2, 3, 0, 5, 4]).unwrap();
        assert_eq!(p.cycles(), vec![vec![0, 1, 2, 3], vec![4, 5]]);
        assert_eq!(p.order(), 4);
        assert!(p.pow(4).is_identity());
        assert!(!p.pow(2).is_identity());
        assert_eq!(Permutation::identity(5).order(), 1);
        assert_eq!(p.to_string(), "(0 1 2 3)(4 5)");
    }

    #[test]
    fn from_labels_requires_every_vertex() {
        let t = VertexTable::new([("a1b1", 1), ("a2b1", 2), ("a2b2", 3)]).unwrap();
        let p = Permutation::from_labels(
            &t,
            &[("a1b1", "a2b1"), ("a2b1", "a2b2"), ("a2b2", "a1b1")],
        )
        .unwrap();
        assert_eq!(p.order(), 3);
        let missing = Permutation::from_labels(&t, &[("a1b1", "a2b1"), ("a2b1", "a1b1")]);
        assert_eq!(
            missing.unwrap_err(),
            PermutationError::Incomplete {
                code: "a2b2".into()
            }
        );
        let unknown = Permutation::from_labels(&t, &[("a1c1", "a2b1")]);
        assert!(matches!(unknown, Err(PermutationError::Vertex(_))));
    }

    proptest! {
        #[test]
        fn inverse_undoes_permutation(p in perm(12)) {
            prop_assert!(p.compose(&p.inverse()).is_identity());
            prop_assert!(p.inverse().compose(&p).is_identity());
        }

        #[test]
        fn compose_is_associative(p in perm(12), q in perm(12), r in perm(12)) {
            prop_assert_eq!(p.compose(&q).compose(&r), p.compose(&q.compose(&r)));
        }

        #[test]
        fn order_is_smallest_identity_power(p in perm(9)) {
            let k = p.order();
            prop_assert!(p.pow(k as u32).is_identity());
            for j in 1..k {
                prop_assert!(!p.pow(j as u32).is_identity());
            }
        }

        #[test]
        fn image_set_preserves_size(p in perm(12), bits in 0u16..(1 << 12)) {
            let set: VertexSet = (0..12usize).filter(|&i| bits & (1u16 << i) != 0).map(VertexId).collect();
            prop_assert_eq!(p.image_set(set).len(), set.len());
        }
    }
}
