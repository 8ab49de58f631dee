//! Distance invariant of a coloring and the report ordering.
//!
//! - `score`: mean oracle distance over all unordered pairs of zero vertices;
//!   `0.0` when there are fewer than two zeros.
//! - `rank`: value descending, then label length, then label.
//!
//! Values are compared after rounding to `RANK_RESOLUTION`, so means that are
//! equal up to summation-order noise count as ties and fall through to the
//! label keys.

use std::cmp::Ordering;

use itertools::Itertools;

use crate::distance::{DistanceError, DistanceOracle};
use crate::orbit::{Coloring, Orbit};
use crate::vertex::VertexTable;

/// Granularity at which invariant values are considered equal for ordering.
pub const RANK_RESOLUTION: f64 = 1e-6;

/// A scored orbit representative.
#[derive(Clone, Debug, PartialEq)]
pub struct RankedColoring {
    pub label: String,
    pub value: f64,
    pub orbit: Orbit,
}

/// Mean pairwise distance among the zero vertices of `coloring`.
pub fn score<O: DistanceOracle + ?Sized>(
    coloring: &Coloring,
    table: &VertexTable,
    oracle: &O,
) -> Result<f64, DistanceError> {
    let mut total = 0.0;
    let mut pairs = 0usize;
    for (u, v) in coloring.zeros().iter().tuple_combinations() {
        total += oracle.distance(&table[u], &table[v])?;
        pairs += 1;
    }
    if pairs == 0 {
        return Ok(0.0);
    }
    Ok(total / pairs as f64)
}

/// `2(o1,o2,...)` with ascending vertex ordinals; `""` for no zeros.
///
/// The leading `2` marks vertices carrying two facets.
pub fn coloring_label(coloring: &Coloring, table: &VertexTable) -> String {
    let ordinals = table.ordinals(coloring.zeros());
    if ordinals.is_empty() {
        return String::new();
    }
    format!("2({})", ordinals.iter().join(","))
}

/// Round to two decimals, always printing at least one fractional digit.
pub fn format_distance(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded.fract() == 0.0 {
        format!("{rounded:.1}")
    } else {
        format!("{rounded}")
    }
}

fn rank_key(value: f64) -> f64 {
    (value / RANK_RESOLUTION).round()
}

/// Report order: value descending, then label length, then label.
pub fn report_order(a: &RankedColoring, b: &RankedColoring) -> Ordering {
    rank_key(b.value)
        .total_cmp(&rank_key(a.value))
        .then_with(|| a.label.len().cmp(&b.label.len()))
        .then_with(|| a.label.cmp(&b.label))
}

/// Score every orbit representative and sort into report order.
pub fn rank<O, I>(
    orbits: I,
    table: &VertexTable,
    oracle: &O,
) -> Result<Vec<RankedColoring>, DistanceError>
where
    O: DistanceOracle + ?Sized,
    I: IntoIterator<Item = Orbit>,
{
    let mut out = orbits
        .into_iter()
        .map(|orbit| {
            Ok(RankedColoring {
                label: coloring_label(&orbit.representative, table),
                value: score(&orbit.representative, table, oracle)?,
                orbit,
            })
        })
        .collect::<Result<Vec<_>, DistanceError>>()?;
    out.sort_by(report_order);
    Ok(out)
}
