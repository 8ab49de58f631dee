//! Pairwise vertex distances.
//!
//! - `Relationship`: the structural relation between two distinct vertices,
//!   derived from how many axes and facets they share.
//! - `DistanceOracle`: the symmetric distance function consumed by the engine.
//! - `KegginDistances`: the hard-coded model (one fixed value per relationship).
//! - `EuclideanDistance`: scaled Euclidean distance between cuboctahedral positions.
//!
//! Classification table (shared axes, shared facets):
//! - (1, 1) `SharedCorner`: adjacent cube edges meeting at a corner (nearest).
//! - (2, 1) `SameFace`: parallel edges on a common face.
//! - (1, 0) `Skew`: one common axis, no common face.
//! - (2, 0) `Opposite`: antipodal edges.
//! - (2, 2) is the same vertex and is rejected as unclassified.

use std::fmt;

use crate::vertex::Vertex;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Relationship {
    SharedCorner,
    SameFace,
    Skew,
    Opposite,
}

impl Relationship {
    pub const ALL: [Relationship; 4] = [
        Relationship::SharedCorner,
        Relationship::SameFace,
        Relationship::Skew,
        Relationship::Opposite,
    ];

    pub fn classify(u: &Vertex, v: &Vertex) -> Result<Self, DistanceError> {
        match (u.shared_axes(v), u.shared_facets(v)) {
            (1, 1) => Ok(Self::SharedCorner),
            (2, 1) => Ok(Self::SameFace),
            (1, 0) => Ok(Self::Skew),
            (2, 0) => Ok(Self::Opposite),
            _ => Err(DistanceError::UnclassifiedPair {
                u: u.code(),
                v: v.code(),
            }),
        }
    }
}

impl fmt::Display for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::SharedCorner => "shared-corner",
            Self::SameFace => "same-face",
            Self::Skew => "skew",
            Self::Opposite => "opposite",
        };
        f.write_str(name)
    }
}

/// The oracle could not assign a distance to a vertex pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DistanceError {
    UnclassifiedPair { u: String, v: String },
}

impl fmt::Display for DistanceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnclassifiedPair { u, v } => {
                write!(f, "no distance category for vertex pair ({u}, {v})")
            }
        }
    }
}

impl std::error::Error for DistanceError {}

/// Symmetric distance between two distinct vertices.
///
/// Contract: `distance(u, v) == distance(v, u)`, and the value is invariant
/// under the rotation group (checked by `symmetry::check_invariance`).
/// Implementations must return an error instead of guessing for pairs they
/// cannot classify.
pub trait DistanceOracle {
    fn distance(&self, u: &Vertex, v: &Vertex) -> Result<f64, DistanceError>;
}

impl<F> DistanceOracle for F
where
    F: Fn(&Vertex, &Vertex) -> Result<f64, DistanceError>,
{
    fn distance(&self, u: &Vertex, v: &Vertex) -> Result<f64, DistanceError> {
        self(u, v)
    }
}

/// Hard-coded distances, one per `Relationship` (experimental values).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KegginDistances {
    pub shared_corner: f64,
    pub same_face: f64,
    pub skew: f64,
    pub opposite: f64,
}

impl Default for KegginDistances {
    fn default() -> Self {
        Self {
            shared_corner: 377.0,
            same_face: 533.1,
            skew: 653.0,
            opposite: 754.0,
        }
    }
}

impl KegginDistances {
    pub fn value(&self, rel: Relationship) -> f64 {
        match rel {
            Relationship::SharedCorner => self.shared_corner,
            Relationship::SameFace => self.same_face,
            Relationship::Skew => self.skew,
            Relationship::Opposite => self.opposite,
        }
    }
}

impl DistanceOracle for KegginDistances {
    fn distance(&self, u: &Vertex, v: &Vertex) -> Result<f64, DistanceError> {
        Relationship::classify(u, v).map(|rel| self.value(rel))
    }
}

/// `scale * |p(u) - p(v)|` for cuboctahedral positions `p`.
///
/// Nearest neighbours sit `√2` apart, so `scale = d / √2` reproduces a
/// nearest-neighbour distance `d`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EuclideanDistance {
    pub scale: f64,
}

impl Default for EuclideanDistance {
    fn default() -> Self {
        Self { scale: 1.0 }
    }
}

impl EuclideanDistance {
    /// Scale chosen so that nearest neighbours are `d` apart.
    pub fn with_nearest(d: f64) -> Self {
        Self {
            scale: d / std::f64::consts::SQRT_2,
        }
    }
}

impl DistanceOracle for EuclideanDistance {
    fn distance(&self, u: &Vertex, v: &Vertex) -> Result<f64, DistanceError> {
        if u == v {
            return Err(DistanceError::UnclassifiedPair {
                u: u.code(),
                v: v.code(),
            });
        }
        Ok(self.scale * (u.position() - v.position()).norm())
    }
}
