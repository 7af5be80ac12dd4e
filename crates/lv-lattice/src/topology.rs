//! Lattice topologies.
//!
//! A recombining lattice is either *binary* (binomial: level `i` has `i + 1`
//! nodes) or *ternary* (trinomial: level `i` has `2i + 1` nodes). The engine
//! is never told which one is active — it infers the topology from the level
//! lengths and dispatches on this enum for the level-length law, the
//! vertical row offset, and the successor fan-out.

use lv_core::errors::Error;
use lv_core::{Real, Result, Size, Step};

/// The branching structure of a recombining lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topology {
    /// Binomial: level `i` has `i + 1` nodes; node `k` has up-count `k`.
    Binary,
    /// Trinomial: level `i` has `2i + 1` nodes; node `k` has relative
    /// offset `j = k − i` ranging over `−i..=i`.
    Ternary,
}

impl Topology {
    /// Infer the topology from the level lengths of a lattice.
    ///
    /// Level 1 decides (2 nodes → binary, 3 → ternary); every level is then
    /// checked against the inferred law, failing fast with the offending
    /// step. Lattices with zero or one level are degenerate under both laws
    /// and default to [`Topology::Binary`] — a lone level must still hold
    /// exactly one root node.
    pub fn infer(level_lens: &[Size]) -> Result<Self> {
        let Some(&first_branch) = level_lens.get(1) else {
            // No branching level to decide from; the root law still applies.
            return match level_lens.first() {
                Some(&len) if len != 1 => Err(Error::LevelWidth {
                    step: 0,
                    found: len,
                    expected: 1,
                    kind: Self::Binary.name(),
                }),
                _ => Ok(Self::Binary),
            };
        };
        let topology = match first_branch {
            2 => Self::Binary,
            3 => Self::Ternary,
            len => return Err(Error::UnknownTopology { step: 1, len }),
        };
        for (step, &len) in level_lens.iter().enumerate() {
            let expected = topology.level_len(step);
            if len != expected {
                return Err(Error::LevelWidth {
                    step,
                    found: len,
                    expected,
                    kind: topology.name(),
                });
            }
        }
        Ok(topology)
    }

    /// Number of nodes at time step `i` under this topology's law.
    pub fn level_len(self, step: Step) -> Size {
        match self {
            Self::Binary => step + 1,
            Self::Ternary => 2 * step + 1,
        }
    }

    /// Forward branching factor (2 for binary, 3 for ternary).
    pub fn branches(self) -> Size {
        match self {
            Self::Binary => 2,
            Self::Ternary => 3,
        }
    }

    /// Successor indices of node `(i, index)` at step `i + 1`.
    ///
    /// Callers must clip the range against the next level's length; across
    /// a full level the clip only matters near the terminal step.
    pub fn successors(self, index: Size) -> std::ops::Range<Size> {
        index..index + self.branches()
    }

    /// Vertical row offset of node `(step, index)` in row units, measured
    /// downward from the canvas midline.
    ///
    /// Binary levels are centered around their own midpoint (`k − i/2`);
    /// ternary nodes sit at `−j` so that nodes with the same relative
    /// offset `j` align horizontally across steps.
    pub fn row_offset(self, step: Step, index: Size) -> Real {
        match self {
            Self::Binary => index as Real - step as Real / 2.0,
            Self::Ternary => -(index as Real - step as Real),
        }
    }

    /// Relative level of node `(step, index)`: the signed offset `j` for
    /// ternary lattices, the up-count `k` for binary ones.
    pub fn relative_level(self, step: Step, index: Size) -> i64 {
        match self {
            Self::Binary => index as i64,
            Self::Ternary => index as i64 - step as i64,
        }
    }

    /// Whole-cell grid row of node `(step, index)` in a lattice of depth
    /// `depth`, counted from the top of the final level's extent.
    ///
    /// Rows are `depth − relative_level`, so the highest state sits in row
    /// 0 and every column lands on the same integer row frame — no
    /// half-row offsets between odd and even steps.
    pub fn grid_row(self, depth: Size, step: Step, index: Size) -> Size {
        (depth as i64 - self.relative_level(step, index)) as Size
    }

    /// Human-readable name used in error messages.
    pub fn name(self) -> &'static str {
        match self {
            Self::Binary => "binomial",
            Self::Ternary => "trinomial",
        }
    }
}
