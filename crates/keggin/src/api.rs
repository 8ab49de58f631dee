//! Curated internal API for callers (UNSTABLE).
//!
//! Not a public API; breaking changes are allowed. The CLI, benches and
//! examples import from here.

pub use crate::distance::{
    DistanceError, DistanceOracle, EuclideanDistance, KegginDistances, Relationship,
};
pub use crate::group::{GroupError, RotationGroup};
pub use crate::keggin::{Keggin, KEGGIN_GROUP_ORDER, KEGGIN_VERTICES};
pub use crate::orbit::{count_orbits, enumerate, orbit_of, Coloring, Orbit, OrbitEnumerator};
pub use crate::perm::Permutation;
pub use crate::pipeline::{run, run_with, EngineError, RunCfg, RunOutput, ZeroCountReport};
pub use crate::rank::{coloring_label, format_distance, rank, score, RankedColoring};
pub use crate::subset::VertexSet;
pub use crate::symmetry::{check_invariance, InvarianceReport, SymmetryError};
pub use crate::vertex::{Vertex, VertexId, VertexTable};
