//! Error types for latticeviz.
//!
//! All detectable data errors are local to a single layout pass and are
//! reported through one `thiserror`-derived enum. Shape violations name the
//! offending step so a caller can point at the bad level instead of chasing
//! an out-of-bounds index.

use thiserror::Error;

/// The top-level error type used throughout latticeviz.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// General runtime error (maps to `fail!`).
    #[error("{0}")]
    Runtime(String),

    /// Precondition violated (maps to `ensure!`).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// The price and value lattices have a different number of levels.
    #[error("level count mismatch: {price_levels} price levels vs {value_levels} value levels")]
    LevelCount {
        /// Number of levels in the price lattice.
        price_levels: usize,
        /// Number of levels in the value lattice.
        value_levels: usize,
    },

    /// A single step has differently sized price and value levels.
    #[error("shape violation at step {step}: {price_len} prices vs {value_len} values")]
    LevelShape {
        /// The offending time step.
        step: usize,
        /// Length of the price level at that step.
        price_len: usize,
        /// Length of the value level at that step.
        value_len: usize,
    },

    /// The first branching level matches neither supported topology.
    #[error("level {step} has {len} nodes; expected 2 (binomial) or 3 (trinomial)")]
    UnknownTopology {
        /// The offending time step.
        step: usize,
        /// Observed level length.
        len: usize,
    },

    /// A level breaks the inferred topology's level-length law.
    #[error("step {step} has {found} nodes; {expected} expected for a {kind} lattice")]
    LevelWidth {
        /// The offending time step.
        step: usize,
        /// Observed level length.
        found: usize,
        /// Length required by the topology law at that step.
        expected: usize,
        /// Name of the inferred topology.
        kind: &'static str,
    },
}

/// Shorthand `Result` type used throughout latticeviz.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use lv_core::ensure;
/// fn positive(x: f64) -> lv_core::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(positive(-1.0).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Return `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use lv_core::fail;
/// fn always_err() -> lv_core::Result<()> {
///     fail!("something went wrong");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}
