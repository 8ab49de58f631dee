//! End-to-end run: build the group, verify the oracle, enumerate and rank.
//!
//! Fail fast: any error aborts before a single report is returned.

use std::fmt;
use std::ops::RangeInclusive;

use crate::distance::{DistanceError, DistanceOracle, KegginDistances};
use crate::group::GroupError;
use crate::keggin::Keggin;
use crate::orbit::{enumerate, EnumerateError};
use crate::perm::PermutationError;
use crate::rank::{rank, RankedColoring};
use crate::symmetry::{InvarianceReport, SymmetryError};
use crate::vertex::VertexError;

/// Which zero counts to enumerate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunCfg {
    pub min_zeros: usize,
    pub max_zeros: usize,
}

impl Default for RunCfg {
    fn default() -> Self {
        // z and 12 - z are equivalent under color swap; the lower half suffices.
        Self {
            min_zeros: 1,
            max_zeros: 6,
        }
    }
}

impl RunCfg {
    pub fn zero_counts(&self) -> RangeInclusive<usize> {
        self.min_zeros..=self.max_zeros
    }
}

/// Ranked orbit representatives for one zero count.
#[derive(Clone, Debug, PartialEq)]
pub struct ZeroCountReport {
    pub zero_count: usize,
    pub rankings: Vec<RankedColoring>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RunOutput {
    pub group_order: usize,
    pub invariance: InvarianceReport,
    pub reports: Vec<ZeroCountReport>,
}

/// Any failure of a run.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineError {
    Vertex(VertexError),
    Permutation(PermutationError),
    /// Generators do not describe the intended group.
    Configuration(GroupError),
    Symmetry(SymmetryError),
    Distance(DistanceError),
    Enumerate(EnumerateError),
    InvalidRange { min_zeros: usize, max_zeros: usize },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vertex(e) => write!(f, "vertex table: {e}"),
            Self::Permutation(e) => write!(f, "generator: {e}"),
            Self::Configuration(e) => write!(f, "configuration error: {e}"),
            Self::Symmetry(e) => write!(f, "invariant violation: {e}"),
            Self::Distance(e) => write!(f, "{e}"),
            Self::Enumerate(e) => write!(f, "{e}"),
            Self::InvalidRange {
                min_zeros,
                max_zeros,
            } => write!(f, "empty zero-count range {min_zeros}..={max_zeros}"),
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Vertex(e) => Some(e),
            Self::Permutation(e) => Some(e),
            Self::Configuration(e) => Some(e),
            Self::Symmetry(e) => Some(e),
            Self::Distance(e) => Some(e),
            Self::Enumerate(e) => Some(e),
            Self::InvalidRange { .. } => None,
        }
    }
}

impl From<VertexError> for EngineError {
    fn from(e: VertexError) -> Self {
        Self::Vertex(e)
    }
}

impl From<PermutationError> for EngineError {
    fn from(e: PermutationError) -> Self {
        Self::Permutation(e)
    }
}

impl From<GroupError> for EngineError {
    fn from(e: GroupError) -> Self {
        Self::Configuration(e)
    }
}

impl From<SymmetryError> for EngineError {
    fn from(e: SymmetryError) -> Self {
        Self::Symmetry(e)
    }
}

impl From<DistanceError> for EngineError {
    fn from(e: DistanceError) -> Self {
        Self::Distance(e)
    }
}

impl From<EnumerateError> for EngineError {
    fn from(e: EnumerateError) -> Self {
        Self::Enumerate(e)
    }
}

/// Run with the hard-coded Keggin distances.
pub fn run(cfg: &RunCfg) -> Result<RunOutput, EngineError> {
    let keggin = Keggin::new()?;
    run_with(&keggin, &KegginDistances::default(), cfg)
}

/// Verify `oracle` against the group, then enumerate and rank every zero count in `cfg`.
pub fn run_with<O: DistanceOracle + ?Sized>(
    keggin: &Keggin,
    oracle: &O,
    cfg: &RunCfg,
) -> Result<RunOutput, EngineError> {
    if cfg.min_zeros > cfg.max_zeros {
        return Err(EngineError::InvalidRange {
            min_zeros: cfg.min_zeros,
            max_zeros: cfg.max_zeros,
        });
    }
    let invariance = keggin.check(oracle)?;
    let mut reports = Vec::new();
    for zero_count in cfg.zero_counts() {
        let orbits = enumerate(&keggin.group, &keggin.table, zero_count)?;
        let rankings = rank(orbits, &keggin.table, oracle)?;
        reports.push(ZeroCountReport {
            zero_count,
            rankings,
        });
    }
    Ok(RunOutput {
        group_order: keggin.group.order(),
        invariance,
        reports,
    })
}
