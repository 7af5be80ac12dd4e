//! Layout mode selection and dispatch.
//!
//! One synchronous pass: scan the lattice for its maximum value, pick the
//! rendering strategy from the step count, run the matching builder. No
//! state survives between passes — a changed lattice can never render with
//! a stale color scale or a stale mode.

use lv_core::Real;
use lv_lattice::Lattice;

use crate::color::Palette;
use crate::matrix::{build_matrix, MatrixGeometry};
use crate::policy::{DisplayMode, DisplayPolicy};
use crate::tree::{build_tree, TreeGeometry};

/// The selected strategy's renderable output.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Scene {
    /// No lattice data yet; render a placeholder.
    Empty,
    /// Node-link diagram (full or filtered).
    Tree {
        /// Which tree strategy produced the geometry.
        mode: DisplayMode,
        /// The geometry itself.
        geometry: TreeGeometry,
    },
    /// Grid-cell heatmap.
    Matrix(MatrixGeometry),
}

impl Scene {
    /// The display-mode tag, if any geometry was produced.
    pub fn mode(&self) -> Option<DisplayMode> {
        match self {
            Self::Empty => None,
            Self::Tree { mode, .. } => Some(*mode),
            Self::Matrix(_) => Some(DisplayMode::MatrixHeatmap),
        }
    }
}

/// Output of one full layout pass.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Layout {
    /// The selected strategy's geometry.
    pub scene: Scene,
    /// Lattice-wide maximum value backing the color scale.
    pub max_value: Real,
    /// Count of non-finite values encountered (treated as zero for color).
    pub non_finite: usize,
}

/// Run one layout pass over `lattice`.
///
/// Pure function of its inputs: an empty lattice yields [`Scene::Empty`],
/// otherwise the mode follows [`DisplayPolicy::mode_for`] and the shared
/// `max_value` comes from a single full traversal of the value levels.
pub fn layout(lattice: &Lattice, policy: &DisplayPolicy, palette: &Palette) -> Layout {
    if lattice.is_empty() {
        return Layout {
            scene: Scene::Empty,
            max_value: 0.0,
            non_finite: 0,
        };
    }

    let scan = lattice.scan_values();
    let mode = policy.mode_for(lattice.steps());
    let scene = match mode {
        DisplayMode::FullTree => Scene::Tree {
            mode,
            geometry: build_tree(lattice, scan.max_value, false, policy, palette),
        },
        DisplayMode::FilteredTree => Scene::Tree {
            mode,
            geometry: build_tree(lattice, scan.max_value, true, policy, palette),
        },
        DisplayMode::MatrixHeatmap => Scene::Matrix(build_matrix(lattice, scan.max_value, palette)),
    };

    Layout {
        scene,
        max_value: scan.max_value,
        non_finite: scan.non_finite,
    }
}
