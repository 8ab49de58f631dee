//! Symmetry-distinct two-colorings of the Keggin unit, ranked by a distance invariant.
//!
//! Pipeline
//! - `keggin`: vertex table and quarter-turn generators → `group::RotationGroup` (order 24).
//! - `symmetry`: verify a `distance::DistanceOracle` is invariant under the group.
//! - `orbit`: one canonical coloring per orbit for a given number of zeros.
//! - `rank`: mean pairwise distance of the zeros, sorted for reporting.
//! - `pipeline`: all of the above for a range of zero counts.
//!
//! API Policy
//! - This crate is project-internal. There is no stable public API; prefer the
//!   re-exports in `api` from callers.

pub mod api;
pub mod distance;
pub mod group;
pub mod keggin;
pub mod orbit;
pub mod perm;
pub mod pipeline;
pub mod rank;
pub mod subset;
pub mod symmetry;
pub mod vertex;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use distance::{DistanceError, DistanceOracle, KegginDistances, Relationship};
pub use group::RotationGroup;
pub use keggin::Keggin;
pub use perm::Permutation;
pub use subset::VertexSet;
pub use vertex::{Vertex, VertexId, VertexTable};
