//! Vertices of the Keggin unit and the table that owns them.
//!
//! A vertex is named by a 4-character code such as `a1b2`: two facets, each an
//! axis letter (`a`, `b`, `c`) followed by a side (`1`, `2`). The two axes of a
//! vertex are distinct, so the 12 vertices are exactly the 12 edges of a cube
//! (equivalently the vertices of a cuboctahedron).
//!
//! Invariants
//! - Facets are stored sorted by axis; `b1a2` and `a2b1` name the same vertex.
//! - The report ordinal is injected when the vertex is created and never changes.

use std::collections::HashMap;
use std::fmt;
use std::ops::Index;

use nalgebra::Vector3;

use crate::subset::VertexSet;

/// Dense index of a vertex inside its `VertexTable`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub usize);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    A,
    B,
    C,
}

impl Axis {
    fn from_char(c: char) -> Option<Self> {
        match c {
            'a' => Some(Self::A),
            'b' => Some(Self::B),
            'c' => Some(Self::C),
            _ => None,
        }
    }

    pub fn letter(self) -> char {
        match self {
            Self::A => 'a',
            Self::B => 'b',
            Self::C => 'c',
        }
    }

    fn unit(self) -> Vector3<f64> {
        match self {
            Self::A => Vector3::x(),
            Self::B => Vector3::y(),
            Self::C => Vector3::z(),
        }
    }
}

/// Which of the two opposite cube faces along an axis (`1` or `2` in codes).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Side {
    One,
    Two,
}

impl Side {
    fn from_char(c: char) -> Option<Self> {
        match c {
            '1' => Some(Self::One),
            '2' => Some(Self::Two),
            _ => None,
        }
    }

    pub fn digit(self) -> char {
        match self {
            Self::One => '1',
            Self::Two => '2',
        }
    }

    fn signum(self) -> f64 {
        match self {
            Self::One => 1.0,
            Self::Two => -1.0,
        }
    }
}

/// One structural attribute of a vertex: a cube face given by axis and side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Facet {
    pub axis: Axis,
    pub side: Side,
}

/// A Keggin vertex: two facets on distinct axes plus its report ordinal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Vertex {
    facets: [Facet; 2],
    ordinal: u32,
}

impl Vertex {
    /// Parse a code like `a1b2` and attach the report ordinal.
    pub fn parse(code: &str, ordinal: u32) -> Result<Self, VertexError> {
        let bad = |reason: &'static str| VertexError::BadCode {
            code: code.to_string(),
            reason,
        };
        let chars: Vec<char> = code.chars().collect();
        if chars.len() != 4 {
            return Err(bad("expected 4 characters"));
        }
        let facet = |a: char, s: char| -> Result<Facet, VertexError> {
            let axis = Axis::from_char(a).ok_or_else(|| bad("axis must be one of a, b, c"))?;
            let side = Side::from_char(s).ok_or_else(|| bad("side must be 1 or 2"))?;
            Ok(Facet { axis, side })
        };
        let mut facets = [facet(chars[0], chars[1])?, facet(chars[2], chars[3])?];
        if facets[0].axis == facets[1].axis {
            return Err(bad("the two facets must lie on distinct axes"));
        }
        facets.sort();
        Ok(Self { facets, ordinal })
    }

    pub fn facets(&self) -> &[Facet; 2] {
        &self.facets
    }

    /// Report ordinal (1-based in the Keggin table).
    pub fn ordinal(&self) -> u32 {
        self.ordinal
    }

    pub fn code(&self) -> String {
        self.facets
            .iter()
            .flat_map(|f| [f.axis.letter(), f.side.digit()])
            .collect()
    }

    pub fn has_axis(&self, axis: Axis) -> bool {
        self.facets.iter().any(|f| f.axis == axis)
    }

    /// Number of axes both vertices touch (1 or 2 for valid vertices).
    pub fn shared_axes(&self, other: &Vertex) -> usize {
        self.facets.iter().filter(|f| other.has_axis(f.axis)).count()
    }

    /// Number of facets both vertices lie on.
    pub fn shared_facets(&self, other: &Vertex) -> usize {
        self.facets
            .iter()
            .filter(|f| other.facets.contains(f))
            .count()
    }

    /// Cuboctahedral position: the midpoint of the cube edge this vertex names,
    /// for the cube `[-1, 1]^3` with side `1` on the positive half-axis.
    pub fn position(&self) -> Vector3<f64> {
        self.facets
            .iter()
            .map(|f| f.axis.unit() * f.side.signum())
            .sum()
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Errors raised while building vertices or looking them up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VertexError {
    BadCode { code: String, reason: &'static str },
    DuplicateCode(String),
    DuplicateOrdinal(u32),
    UnknownCode(String),
    TooMany { count: usize, max: usize },
}

impl fmt::Display for VertexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadCode { code, reason } => write!(f, "bad vertex code {code:?}: {reason}"),
            Self::DuplicateCode(code) => write!(f, "vertex code {code} listed twice"),
            Self::DuplicateOrdinal(o) => write!(f, "vertex ordinal {o} listed twice"),
            Self::UnknownCode(code) => write!(f, "unknown vertex code {code:?}"),
            Self::TooMany { count, max } => {
                write!(f, "{count} vertices exceed the supported maximum of {max}")
            }
        }
    }
}

impl std::error::Error for VertexError {}

/// The fixed vertex set. `VertexId(i)` is the i-th entry in construction order.
#[derive(Clone, Debug)]
pub struct VertexTable {
    vertices: Vec<Vertex>,
    by_code: HashMap<String, VertexId>,
}

impl VertexTable {
    /// Build from `(code, ordinal)` entries; codes and ordinals must be unique.
    pub fn new<'a, I>(entries: I) -> Result<Self, VertexError>
    where
        I: IntoIterator<Item = (&'a str, u32)>,
    {
        let mut vertices: Vec<Vertex> = Vec::new();
        let mut by_code = HashMap::new();
        for (code, ordinal) in entries {
            let vertex = Vertex::parse(code, ordinal)?;
            if vertices.iter().any(|v| v.ordinal == ordinal) {
                return Err(VertexError::DuplicateOrdinal(ordinal));
            }
            let canonical = vertex.code();
            if by_code.contains_key(&canonical) {
                return Err(VertexError::DuplicateCode(canonical));
            }
            by_code.insert(canonical, VertexId(vertices.len()));
            vertices.push(vertex);
        }
        if vertices.len() > VertexSet::CAPACITY {
            return Err(VertexError::TooMany {
                count: vertices.len(),
                max: VertexSet::CAPACITY,
            });
        }
        Ok(Self { vertices, by_code })
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn get(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(id.0)
    }

    /// Look up a vertex id by code; facet order in `code` does not matter.
    pub fn id_of(&self, code: &str) -> Result<VertexId, VertexError> {
        let canonical = Vertex::parse(code, 0)
            .map_err(|_| VertexError::UnknownCode(code.to_string()))?
            .code();
        self.by_code
            .get(&canonical)
            .copied()
            .ok_or_else(|| VertexError::UnknownCode(code.to_string()))
    }

    pub fn ids(&self) -> impl Iterator<Item = VertexId> + Clone {
        (0..self.vertices.len()).map(VertexId)
    }

    pub fn iter(&self) -> impl Iterator<Item = (VertexId, &Vertex)> + Clone {
        self.vertices.iter().enumerate().map(|(i, v)| (VertexId(i), v))
    }

    /// Ordinals of the members of `set`, ascending.
    pub fn ordinals(&self, set: VertexSet) -> Vec<u32> {
        let mut out: Vec<u32> = set.iter().map(|id| self[id].ordinal).collect();
        out.sort_unstable();
        out
    }
}

impl Index<VertexId> for VertexTable {
    type Output = Vertex;

    fn index(&self, id: VertexId) -> &Vertex {
        &self.vertices[id.0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_sorts_facets_and_keeps_ordinal() {
        let v = Vertex::parse("c1a2", 9).unwrap();
        assert_eq!(v.code(), "a2c1");
        assert_eq!(v.ordinal(), 9);
        assert_eq!(v.to_string(), "a2c1");
    }

    #[test]
    fn parse_rejects_malformed_codes() {
        for code in ["a1", "a1b", "a1b1c1", "d1b1", "a3b1", "a1a2", "A1b1"] {
            assert!(
                matches!(Vertex::parse(code, 1), Err(VertexError::BadCode { .. })),
                "{code} should be rejected"
            );
        }
    }

    #[test]
    fn position_is_cube_edge_midpoint() {
        let v = Vertex::parse("a1b2", 6).unwrap();
        assert_eq!(v.position(), Vector3::new(1.0, -1.0, 0.0));
        let w = Vertex::parse("b2c2", 1).unwrap();
        assert_eq!(w.position(), Vector3::new(0.0, -1.0, -1.0));
    }

    #[test]
    fn shared_attributes() {
        let a1b1 = Vertex::parse("a1b1", 7).unwrap();
        let a1c2 = Vertex::parse("a1c2", 4).unwrap();
        let a2b2 = Vertex::parse("a2b2", 5).unwrap();
        assert_eq!(a1b1.shared_axes(&a1c2), 1);
        assert_eq!(a1b1.shared_facets(&a1c2), 1);
        assert_eq!(a1b1.shared_axes(&a2b2), 2);
        assert_eq!(a1b1.shared_facets(&a2b2), 0);
    }

    #[test]
    fn table_rejects_duplicates_and_looks_up_codes() {
        assert_eq!(
            VertexTable::new([("a1b1", 1), ("b1a1", 2)]).unwrap_err(),
            VertexError::DuplicateCode("a1b1".into())
        );
        assert_eq!(
            VertexTable::new([("a1b1", 1), ("a2b1", 1)]).unwrap_err(),
            VertexError::DuplicateOrdinal(1)
        );
        let t = VertexTable::new([("a1b1", 3), ("a2c1", 1)]).unwrap();
        assert_eq!(t.id_of("c1a2").unwrap(), VertexId(1));
        assert!(matches!(t.id_of("b1c1"), Err(VertexError::UnknownCode(_))));
        let both: VertexSet = t.ids().collect();
        assert_eq!(t.ordinals(both), vec![1, 3]);
    }
}
