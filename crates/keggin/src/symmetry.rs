//! Consistency check between a distance oracle and a rotation group.
//!
//! Every unordered pair of distinct vertices is compared against its image
//! under every group element, with exact equality. The pass is exhaustive
//! (|pairs| × |group| oracle calls) and stops at the first disagreement.

use std::fmt;

use itertools::Itertools;

use crate::distance::{DistanceError, DistanceOracle};
use crate::group::RotationGroup;
use crate::vertex::VertexTable;

#[derive(Debug, Clone, PartialEq)]
pub enum SymmetryError {
    /// Group and table disagree on the number of vertices.
    DegreeMismatch { group: usize, table: usize },
    /// `distance(u, v) != distance(v, u)`.
    Asymmetric {
        u: String,
        v: String,
        forward: f64,
        backward: f64,
    },
    /// `distance(u, v) != distance(g(u), g(v))` for group element `element`.
    InvariantViolation {
        u: String,
        v: String,
        element: usize,
        expected: f64,
        found: f64,
    },
    Distance(DistanceError),
}

impl fmt::Display for SymmetryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegreeMismatch { group, table } => write!(
                f,
                "group acts on {group} points but the vertex table has {table}"
            ),
            Self::Asymmetric {
                u,
                v,
                forward,
                backward,
            } => write!(
                f,
                "distance is not symmetric for ({u}, {v}): {forward} vs {backward}"
            ),
            Self::InvariantViolation {
                u,
                v,
                element,
                expected,
                found,
            } => write!(
                f,
                "distance ({u}, {v}) = {expected} changes to {found} under group element {element}"
            ),
            Self::Distance(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for SymmetryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Distance(e) => Some(e),
            _ => None,
        }
    }
}

impl From<DistanceError> for SymmetryError {
    fn from(e: DistanceError) -> Self {
        Self::Distance(e)
    }
}

/// Counts from a successful check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InvarianceReport {
    pub pairs: usize,
    pub elements: usize,
}

impl InvarianceReport {
    pub fn comparisons(&self) -> usize {
        self.pairs * self.elements
    }
}

/// Require `distance(u, v) == distance(g(u), g(v))` for all pairs and all `g`.
pub fn check_invariance<O: DistanceOracle + ?Sized>(
    group: &RotationGroup,
    table: &VertexTable,
    oracle: &O,
) -> Result<InvarianceReport, SymmetryError> {
    if group.degree() != table.len() {
        return Err(SymmetryError::DegreeMismatch {
            group: group.degree(),
            table: table.len(),
        });
    }
    let mut pairs = 0;
    for (u, v) in table.ids().tuple_combinations() {
        let (vu, vv) = (&table[u], &table[v]);
        let expected = oracle.distance(vu, vv)?;
        let backward = oracle.distance(vv, vu)?;
        if backward != expected {
            return Err(SymmetryError::Asymmetric {
                u: vu.code(),
                v: vv.code(),
                forward: expected,
                backward,
            });
        }
        for (element, g) in group.iter().enumerate() {
            let found = oracle.distance(&table[g.image(u)], &table[g.image(v)])?;
            if found != expected {
                return Err(SymmetryError::InvariantViolation {
                    u: vu.code(),
                    v: vv.code(),
                    element,
                    expected,
                    found,
                });
            }
        }
        pairs += 1;
    }
    Ok(InvarianceReport {
        pairs,
        elements: group.order(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::{EuclideanDistance, KegginDistances, Relationship};
    use crate::keggin::Keggin;
    use crate::perm::Permutation;
    use crate::vertex::Vertex;

    #[test]
    fn keggin_distances_are_rotation_invariant() {
        let k = Keggin::new().unwrap();
        let report = check_invariance(&k.group, &k.table, &KegginDistances::default()).unwrap();
        assert_eq!(report.pairs, 66);
        assert_eq!(report.elements, 24);
        assert_eq!(report.comparisons(), 66 * 24);
    }

    #[test]
    fn euclidean_distances_are_rotation_invariant() {
        let k = Keggin::new().unwrap();
        assert!(check_invariance(&k.group, &k.table, &EuclideanDistance::with_nearest(377.0)).is_ok());
    }

    #[test]
    fn orientation_dependent_oracle_is_rejected() {
        // Skew pairs get a bonus depending on how they sit relative to (1,1,1).
        let k = Keggin::new().unwrap();
        let base = KegginDistances::default();
        let chiral = |u: &Vertex, v: &Vertex| -> Result<f64, DistanceError> {
            let rel = Relationship::classify(u, v)?;
            if rel == Relationship::Skew && u.position().cross(&v.position()).sum() > 0.0 {
                return Ok(base.skew + 1.0);
            }
            Ok(base.value(rel))
        };
        let err = check_invariance(&k.group, &k.table, &chiral).unwrap_err();
        assert!(matches!(err, SymmetryError::Asymmetric { .. } | SymmetryError::InvariantViolation { .. }));
    }

    #[test]
    fn single_pair_perturbation_is_caught() {
        let k = Keggin::new().unwrap();
        let base = KegginDistances::default();
        let perturbed = |u: &Vertex, v: &Vertex| -> Result<f64, DistanceError> {
            let d = base.distance(u, v)?;
            let pair = [u.code(), v.code()];
            if pair.contains(&"a1b1".to_string()) && pair.contains(&"a2b2".to_string()) {
                return Ok(d + 0.5);
            }
            Ok(d)
        };
        match check_invariance(&k.group, &k.table, &perturbed).unwrap_err() {
            SymmetryError::InvariantViolation { expected, found, .. } => {
                assert!((expected - found).abs() == 0.5);
            }
            other => panic!("unexpected error {other}"),
        }
    }

    #[test]
    fn asymmetric_oracle_is_rejected() {
        let k = Keggin::new().unwrap();
        let lopsided = |u: &Vertex, v: &Vertex| -> Result<f64, DistanceError> {
            Ok(f64::from(u.ordinal()) - f64::from(v.ordinal()))
        };
        assert!(matches!(
            check_invariance(&k.group, &k.table, &lopsided),
            Err(SymmetryError::Asymmetric { .. })
        ));
    }

    #[test]
    fn oracle_errors_propagate() {
        let k = Keggin::new().unwrap();
        let refuses = |u: &Vertex, v: &Vertex| -> Result<f64, DistanceError> {
            Err(DistanceError::UnclassifiedPair {
                u: u.code(),
                v: v.code(),
            })
        };
        assert!(matches!(
            check_invariance(&k.group, &k.table, &refuses),
            Err(SymmetryError::Distance(_))
        ));
    }

    #[test]
    fn degree_mismatch_is_rejected() {
        let k = Keggin::new().unwrap();
        let small = RotationGroup::generate(&[Permutation::identity(3)]).unwrap();
        assert_eq!(
            check_invariance(&small, &k.table, &KegginDistances::default()).unwrap_err(),
            SymmetryError::DegreeMismatch { group: 3, table: 12 }
        );
    }
}
