//! # lv-lattice
//!
//! Data model for recombining option-pricing lattices.
//!
//! A [`Lattice`] pairs two jagged arrays of equal shape — per-step
//! underlying prices and per-step derived values — together with the
//! [`Topology`] inferred from the level lengths. Construction validates the
//! shape laws up front so the layout engine can index freely; an empty
//! lattice is a recognized state, not an error.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod topology;

#[cfg(feature = "serde")]
pub mod wire;

pub use topology::Topology;

use lv_core::errors::Error;
use lv_core::{Real, Result, Size, Step};

/// Closed-form node count of a triangular recombining lattice of depth `n`:
/// `(n+1)(n+2)/2`.
///
/// This is the exact full-tree node count for a binary lattice, and the
/// display-only figure shown in the matrix legend for either topology.
pub fn triangular_nodes(n: Size) -> Size {
    (n + 1) * (n + 2) / 2
}

/// Result of the lattice-wide value scan.
///
/// Non-finite values count as zero for the maximum and are tallied so the
/// caller can flag them; they never propagate into the color scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueScan {
    /// Largest finite value across every level (0.0 for an empty lattice).
    pub max_value: Real,
    /// Number of non-finite values encountered.
    pub non_finite: usize,
}

/// A shape-validated pair of price and value lattices.
///
/// Invariants established at construction:
/// * both lattices have the same number of levels,
/// * each step's price and value levels have the same length,
/// * every level length obeys the inferred topology's law.
#[derive(Debug, Clone, PartialEq)]
pub struct Lattice {
    price_levels: Vec<Vec<Real>>,
    value_levels: Vec<Vec<Real>>,
    topology: Topology,
}

impl Lattice {
    /// Build a lattice from parallel price and value levels, validating the
    /// shape laws and inferring the topology.
    pub fn new(price_levels: Vec<Vec<Real>>, value_levels: Vec<Vec<Real>>) -> Result<Self> {
        if price_levels.len() != value_levels.len() {
            return Err(Error::LevelCount {
                price_levels: price_levels.len(),
                value_levels: value_levels.len(),
            });
        }
        for (step, (p, v)) in price_levels.iter().zip(&value_levels).enumerate() {
            if p.len() != v.len() {
                return Err(Error::LevelShape {
                    step,
                    price_len: p.len(),
                    value_len: v.len(),
                });
            }
        }
        let lens: Vec<Size> = price_levels.iter().map(Vec::len).collect();
        let topology = Topology::infer(&lens)?;
        Ok(Self {
            price_levels,
            value_levels,
            topology,
        })
    }

    /// The empty lattice ("no data yet").
    pub fn empty() -> Self {
        Self {
            price_levels: Vec::new(),
            value_levels: Vec::new(),
            topology: Topology::Binary,
        }
    }

    /// Whether the lattice holds no levels at all.
    pub fn is_empty(&self) -> bool {
        self.price_levels.is_empty()
    }

    /// Number of levels (`N + 1` for a populated lattice).
    pub fn levels(&self) -> Size {
        self.price_levels.len()
    }

    /// Depth `N` (number of time steps). Zero for an empty lattice.
    pub fn steps(&self) -> Size {
        self.price_levels.len().saturating_sub(1)
    }

    /// The inferred branching structure.
    pub fn topology(&self) -> Topology {
        self.topology
    }

    /// Underlying prices at time step `step`.
    pub fn price_level(&self, step: Step) -> &[Real] {
        &self.price_levels[step]
    }

    /// Derived values at time step `step`.
    pub fn value_level(&self, step: Step) -> &[Real] {
        &self.value_levels[step]
    }

    /// Underlying price at node `(step, index)`.
    pub fn price(&self, step: Step, index: Size) -> Real {
        self.price_levels[step][index]
    }

    /// Derived value at node `(step, index)`.
    pub fn value(&self, step: Step, index: Size) -> Real {
        self.value_levels[step][index]
    }

    /// Total number of nodes actually present.
    pub fn node_count(&self) -> Size {
        self.price_levels.iter().map(Vec::len).sum()
    }

    /// Scan every value across every level for the lattice-wide maximum.
    ///
    /// A single full traversal, recomputed per layout pass — never cached,
    /// so a changed lattice cannot render against a stale color scale.
    pub fn scan_values(&self) -> ValueScan {
        let mut max_value: Real = 0.0;
        let mut non_finite = 0usize;
        for level in &self.value_levels {
            for &v in level {
                if v.is_finite() {
                    max_value = max_value.max(v);
                } else {
                    non_finite += 1;
                }
            }
        }
        ValueScan {
            max_value,
            non_finite,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// Flat binary test lattice of depth `n`: price 100 everywhere, value
    /// equal to the step index.
    fn binary_fixture(n: usize) -> Lattice {
        let prices: Vec<Vec<Real>> = (0..=n).map(|i| vec![100.0; i + 1]).collect();
        let values: Vec<Vec<Real>> = (0..=n).map(|i| vec![i as Real; i + 1]).collect();
        Lattice::new(prices, values).unwrap()
    }

    #[test]
    fn construction_infers_topology() {
        let lat = binary_fixture(4);
        assert_eq!(lat.topology(), Topology::Binary);
        assert_eq!(lat.steps(), 4);
        assert_eq!(lat.levels(), 5);
        assert_eq!(lat.node_count(), triangular_nodes(4));
    }

    #[test]
    fn level_count_mismatch_is_rejected() {
        let err = Lattice::new(vec![vec![1.0]], vec![]).unwrap_err();
        assert_eq!(
            err,
            Error::LevelCount {
                price_levels: 1,
                value_levels: 0
            }
        );
    }

    #[test]
    fn per_level_shape_mismatch_names_the_step() {
        let prices = vec![vec![1.0], vec![1.0, 2.0], vec![1.0, 2.0, 3.0]];
        let values = vec![vec![1.0], vec![1.0, 2.0], vec![1.0, 2.0]];
        let err = Lattice::new(prices, values).unwrap_err();
        assert_eq!(
            err,
            Error::LevelShape {
                step: 2,
                price_len: 3,
                value_len: 2
            }
        );
    }

    #[test]
    fn single_malformed_level_is_rejected() {
        let level = vec![vec![1.0, 2.0, 3.0]];
        let err = Lattice::new(level.clone(), level).unwrap_err();
        assert_eq!(
            err,
            Error::LevelWidth {
                step: 0,
                found: 3,
                expected: 1,
                kind: "binomial"
            }
        );
    }

    #[test]
    fn scan_finds_the_global_maximum() {
        let lat = binary_fixture(6);
        let scan = lat.scan_values();
        assert_relative_eq!(scan.max_value, 6.0);
        assert_eq!(scan.non_finite, 0);
    }

    #[test]
    fn scan_treats_non_finite_as_zero_and_counts_them() {
        let prices = vec![vec![100.0], vec![110.0, 90.0]];
        let values = vec![vec![f64::NAN], vec![2.5, f64::INFINITY]];
        let lat = Lattice::new(prices, values).unwrap();
        let scan = lat.scan_values();
        assert_relative_eq!(scan.max_value, 2.5);
        assert_eq!(scan.non_finite, 2);
    }

    #[test]
    fn empty_lattice_scans_to_zero() {
        let scan = Lattice::empty().scan_values();
        assert_eq!(scan.max_value, 0.0);
        assert_eq!(scan.non_finite, 0);
        assert!(Lattice::empty().is_empty());
    }

    #[test]
    fn triangular_closed_form() {
        assert_eq!(triangular_nodes(0), 1);
        assert_eq!(triangular_nodes(5), 21);
        assert_eq!(triangular_nodes(100), 5151);
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn binary_node_count_matches_closed_form(n in 0usize..60) {
                let lat = binary_fixture(n);
                prop_assert_eq!(lat.node_count(), triangular_nodes(n));
            }

            #[test]
            fn scan_max_dominates_every_finite_value(
                root in proptest::num::f64::ANY,
                branch in proptest::num::f64::NORMAL,
            ) {
                let prices = vec![vec![100.0], vec![110.0, 90.0]];
                let values = vec![vec![root], vec![branch, branch.abs()]];
                let lat = Lattice::new(prices, values).unwrap();
                let scan = lat.scan_values();
                prop_assert!(scan.max_value.is_finite());
                for level in 0..lat.levels() {
                    for &v in lat.value_level(level) {
                        if v.is_finite() {
                            prop_assert!(scan.max_value >= v);
                        }
                    }
                }
            }
        }
    }
}
