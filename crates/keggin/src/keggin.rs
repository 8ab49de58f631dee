//! The Keggin unit: fixed vertex table, rotation generators, and group order.
//!
//! Vertex codes name cube edges by their two faces (see `vertex`). The three
//! generators are quarter turns about the `c`, `b` and `a` axes; together they
//! generate the rotation group of the cube, of order 24.

use crate::distance::DistanceOracle;
use crate::group::{GroupError, RotationGroup};
use crate::perm::Permutation;
use crate::pipeline::EngineError;
use crate::symmetry::{check_invariance, InvarianceReport};
use crate::vertex::VertexTable;

/// Order of the rotation group generated by the Keggin quarter turns.
pub const KEGGIN_GROUP_ORDER: usize = 24;
/// Order every generator must have.
pub const GENERATOR_ORDER: usize = 4;

/// Vertex codes with their report ordinals, in id order.
pub const KEGGIN_VERTICES: [(&str, u32); 12] = [
    ("b2c2", 1),
    ("a2c2", 2),
    ("b1c2", 3),
    ("a1c2", 4),
    ("a2b2", 5),
    ("a1b2", 6),
    ("a1b1", 7),
    ("a2b1", 8),
    ("a2c1", 9),
    ("b2c1", 10),
    ("a1c1", 11),
    ("b1c1", 12),
];

type LabelMap = [(&'static str, &'static str); 12];

/// Quarter turns as `(source, image)` code pairs.
pub const KEGGIN_GENERATORS: [LabelMap; 3] = [
    [
        ("a1b1", "a2b1"),
        ("a2b1", "a2b2"),
        ("a2b2", "a1b2"),
        ("a1b2", "a1b1"),
        ("a1c1", "b1c1"),
        ("b1c1", "a2c1"),
        ("a2c1", "b2c1"),
        ("b2c1", "a1c1"),
        ("a1c2", "b1c2"),
        ("b1c2", "a2c2"),
        ("a2c2", "b2c2"),
        ("b2c2", "a1c2"),
    ],
    [
        ("a1c1", "a2c1"),
        ("a2c1", "a2c2"),
        ("a2c2", "a1c2"),
        ("a1c2", "a1c1"),
        ("a1b1", "b1c1"),
        ("b1c1", "a2b1"),
        ("a2b1", "b1c2"),
        ("b1c2", "a1b1"),
        ("a1b2", "b2c1"),
        ("b2c1", "a2b2"),
        ("a2b2", "b2c2"),
        ("b2c2", "a1b2"),
    ],
    [
        ("b1c1", "b1c2"),
        ("b1c2", "b2c2"),
        ("b2c2", "b2c1"),
        ("b2c1", "b1c1"),
        ("a1c1", "a1b1"),
        ("a1b1", "a1c2"),
        ("a1c2", "a1b2"),
        ("a1b2", "a1c1"),
        ("a2c1", "a2b1"),
        ("a2b1", "a2c2"),
        ("a2c2", "a2b2"),
        ("a2b2", "a2c1"),
    ],
];

/// Vertex table and rotation group of the Keggin unit, built once per run.
#[derive(Clone, Debug)]
pub struct Keggin {
    pub table: VertexTable,
    pub group: RotationGroup,
}

impl Keggin {
    /// Build the table, check every generator is a quarter turn, and close the
    /// group (must have `KEGGIN_GROUP_ORDER` elements).
    pub fn new() -> Result<Self, EngineError> {
        let table = VertexTable::new(KEGGIN_VERTICES)?;
        let generators = keggin_generators(&table)?;
        for (index, g) in generators.iter().enumerate() {
            if g.order() != GENERATOR_ORDER {
                return Err(GroupError::GeneratorOrder {
                    index,
                    expected: GENERATOR_ORDER,
                    found: g.order(),
                }
                .into());
            }
        }
        let group = RotationGroup::build(&generators, KEGGIN_GROUP_ORDER)?;
        Ok(Self { table, group })
    }

    /// Verify `oracle` against the group (see `symmetry::check_invariance`).
    pub fn check<O: DistanceOracle + ?Sized>(
        &self,
        oracle: &O,
    ) -> Result<InvarianceReport, EngineError> {
        Ok(check_invariance(&self.group, &self.table, oracle)?)
    }
}

/// The three quarter-turn generators as permutations of `table`.
pub fn keggin_generators(table: &VertexTable) -> Result<Vec<Permutation>, EngineError> {
    KEGGIN_GENERATORS
        .iter()
        .map(|pairs| Permutation::from_labels(table, pairs).map_err(EngineError::from))
        .collect()
}
