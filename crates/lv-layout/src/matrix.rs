//! Matrix heatmap geometry.
//!
//! For lattices too deep for node-link rendering, every `(step, j)` pair
//! maps to one fixed-size grid cell: steps along the horizontal axis,
//! relative level `j` along the vertical. Rows are whole-cell grid rows
//! anchored to the final level's extent, so cells with the same relative
//! level align across columns and no cell straddles a row boundary.

use lv_core::{Real, Size, Step};
use lv_lattice::{triangular_nodes, Lattice};

use crate::color::{ColorRgb, Palette};

/// Fixed pixel size per cell.
pub const CELL_SIZE: Real = 6.0;

/// One grid cell of the heatmap.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Cell {
    /// Left edge.
    pub x: Real,
    /// Top edge.
    pub y: Real,
    /// Cell width.
    pub w: Real,
    /// Cell height.
    pub h: Real,
    /// Fill color from the shared palette.
    pub color: ColorRgb,
    /// Time step of the node.
    pub step: Step,
    /// Relative level (`j` for ternary, up-count for binary).
    pub level: i64,
    /// The node's derived value.
    pub value: Real,
}

/// Display-only summary shown beside the heatmap.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Legend {
    /// Lattice depth `N`.
    pub steps: Size,
    /// Lattice-wide maximum value (the top of the color scale).
    pub max_value: Real,
    /// Triangular closed-form node count `(N+1)(N+2)/2`.
    pub total_nodes: Size,
    /// Low end of the color scale.
    pub low: ColorRgb,
    /// High end of the color scale.
    pub high: ColorRgb,
}

/// Renderable output of the matrix builder.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MatrixGeometry {
    /// One cell per lattice node.
    pub cells: Vec<Cell>,
    /// Canvas width.
    pub width: Real,
    /// Canvas height.
    pub height: Real,
    /// Sidebar legend data.
    pub legend: Legend,
}

/// Build the compact grid-cell layout for `lattice`.
///
/// `max_value` is the shared lattice-wide maximum so tree and matrix modes
/// render on one color scale.
pub fn build_matrix(lattice: &Lattice, max_value: Real, palette: &Palette) -> MatrixGeometry {
    let n = lattice.steps();
    let topology = lattice.topology();
    let max_rows = topology.level_len(n);

    let mut cells = Vec::with_capacity(lattice.node_count());
    for step in 0..lattice.levels() {
        let values = lattice.value_level(step);
        for (k, &value) in values.iter().enumerate() {
            cells.push(Cell {
                x: step as Real * CELL_SIZE,
                y: topology.grid_row(n, step, k) as Real * CELL_SIZE,
                w: CELL_SIZE,
                h: CELL_SIZE,
                color: palette.color(value, max_value),
                step,
                level: topology.relative_level(step, k),
                value,
            });
        }
    }

    MatrixGeometry {
        cells,
        width: CELL_SIZE * (n + 1) as Real,
        height: CELL_SIZE * max_rows as Real,
        legend: Legend {
            steps: n,
            max_value,
            total_nodes: triangular_nodes(n),
            low: palette.low,
            high: palette.high,
        },
    }
}
