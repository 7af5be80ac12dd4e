//! Node-link tree geometry.
//!
//! Computes node coordinates, inter-step edges, and per-column labels for a
//! recombining lattice, either at full density or decimated to every
//! `stride`-th step. Layout is driven by two index spaces: the *visual*
//! index (position among displayed columns, horizontal spacing) and the
//! *real* step index (data lookup and vertical math). Where two displayed
//! columns are non-adjacent in real steps, a three-dot elision marker is
//! inserted and no edges are drawn across the gap.

use lv_core::{Real, Size, Step};
use lv_lattice::Lattice;

use crate::color::{ColorRgb, Palette};
use crate::policy::DisplayPolicy;

/// Horizontal spacing between displayed columns.
pub const LEVEL_WIDTH: Real = 140.0;
/// Canvas margin on each side.
pub const MARGIN: Real = 50.0;
/// Floor on canvas height so small lattices don't get a degenerate canvas.
pub const MIN_HEIGHT: Real = 600.0;
/// Vertical position of the step labels.
pub const LABEL_Y: Real = 30.0;
/// Vertical spacing between the three elision dots.
pub const ELISION_SPACING: Real = 15.0;

/// Fill used for elision dots (`#64748b`).
const ELISION_COLOR: ColorRgb = ColorRgb::new(100, 116, 139);

/// Sizing knobs that shrink for deeper lattices to keep them legible.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NodeStyle {
    /// Node circle radius.
    pub radius: Real,
    /// Font size for the value label.
    pub value_font: Real,
    /// Font size for the price label.
    pub price_font: Real,
    /// Vertical spacing per row unit.
    pub row_spacing: Real,
}

impl NodeStyle {
    /// Style for lattices at or below the full-tree threshold.
    pub const ROOMY: Self = Self {
        radius: 16.0,
        value_font: 9.0,
        price_font: 7.0,
        row_spacing: 50.0,
    };

    /// Compact style for deeper, still tree-renderable lattices.
    pub const COMPACT: Self = Self {
        radius: 12.0,
        value_font: 7.0,
        price_font: 6.0,
        row_spacing: 35.0,
    };

    /// Pick a style for a lattice of depth `steps`.
    pub fn for_depth(steps: Size, policy: &DisplayPolicy) -> Self {
        if steps > policy.full_tree_max {
            Self::COMPACT
        } else {
            Self::ROOMY
        }
    }
}

/// A positioned lattice node (or elision marker) ready to draw.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TreeNode {
    /// Real time step of the node.
    pub step: Step,
    /// Index within the level (dot ordinal for elision markers).
    pub index: Size,
    /// Horizontal center.
    pub x: Real,
    /// Vertical center.
    pub y: Real,
    /// Underlying price (0 for elision markers).
    pub price: Real,
    /// Derived value (0 for elision markers).
    pub value: Real,
    /// Fill color from the shared palette.
    pub color: ColorRgb,
    /// Whether this node holds the lattice-wide maximum value.
    pub is_max: bool,
    /// Whether this is an elision marker rather than a data node.
    pub is_elision: bool,
}

impl TreeNode {
    /// Stable id for keyed renderers.
    pub fn id(&self) -> String {
        if self.is_elision {
            format!("elision-{}-{}", self.step, self.index)
        } else {
            format!("{}-{}", self.step, self.index)
        }
    }
}

/// A directed edge between the positions of a node and one successor.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Edge {
    /// Source x.
    pub x1: Real,
    /// Source y.
    pub y1: Real,
    /// Target x.
    pub x2: Real,
    /// Target y.
    pub y2: Real,
}

/// Column heading for a displayed step.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StepLabel {
    /// Horizontal center of the column.
    pub x: Real,
    /// Vertical position.
    pub y: Real,
    /// Real step index shown in the label.
    pub step: Step,
}

/// Renderable output of the tree builder.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TreeGeometry {
    /// Data nodes and elision markers.
    pub nodes: Vec<TreeNode>,
    /// Edges between adjacent displayed steps.
    pub edges: Vec<Edge>,
    /// One label per displayed column.
    pub labels: Vec<StepLabel>,
    /// Canvas width.
    pub width: Real,
    /// Canvas height.
    pub height: Real,
    /// Density-adapted sizing.
    pub style: NodeStyle,
}

impl TreeGeometry {
    /// The empty geometry ("nothing to render").
    pub fn empty() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
            labels: Vec::new(),
            width: 0.0,
            height: 0.0,
            style: NodeStyle::ROOMY,
        }
    }
}

/// The real step indices to display for a lattice with `levels` levels.
///
/// All steps when `decimate` is false; otherwise `0, stride, 2·stride, ...`
/// plus the terminal step if the stride missed it, so the payoff row is
/// always visible.
pub fn display_steps(levels: Size, decimate: bool, stride: Size) -> Vec<Step> {
    if levels == 0 {
        return Vec::new();
    }
    if !decimate {
        return (0..levels).collect();
    }
    let mut steps: Vec<Step> = (0..levels).step_by(stride.max(1)).collect();
    let last = levels - 1;
    if *steps.last().expect("levels > 0") != last {
        steps.push(last);
    }
    steps
}

/// Build node-link geometry for `lattice`.
///
/// `max_value` is the lattice-wide maximum from [`Lattice::scan_values`],
/// shared with the matrix builder so the color scale is consistent across
/// modes. An empty lattice yields [`TreeGeometry::empty`].
pub fn build_tree(
    lattice: &Lattice,
    max_value: Real,
    decimate: bool,
    policy: &DisplayPolicy,
    palette: &Palette,
) -> TreeGeometry {
    if lattice.is_empty() {
        return TreeGeometry::empty();
    }

    let topology = lattice.topology();
    let steps = display_steps(lattice.levels(), decimate, policy.stride);
    let style = NodeStyle::for_depth(lattice.steps(), policy);

    let width = steps.len() as Real * LEVEL_WIDTH + 2.0 * MARGIN;
    let last_real = *steps.last().expect("non-empty lattice");
    let max_rows = lattice.price_level(last_real).len();
    let height = MIN_HEIGHT.max(max_rows as Real * style.row_spacing + 2.0 * MARGIN);
    let center_y = height / 2.0;

    let mut nodes = Vec::new();
    let mut edges = Vec::new();
    let mut labels = Vec::with_capacity(steps.len());

    for (visual, &real) in steps.iter().enumerate() {
        let x = visual as Real * LEVEL_WIDTH + MARGIN;
        labels.push(StepLabel {
            x,
            y: LABEL_Y,
            step: real,
        });

        // Elided gap to the left of this column: drop in the three dots.
        if visual > 0 && real - steps[visual - 1] > 1 {
            let mid_x = x - LEVEL_WIDTH / 2.0;
            for d in 0..3 {
                nodes.push(TreeNode {
                    step: real,
                    index: d,
                    x: mid_x,
                    y: center_y + (d as Real - 1.0) * ELISION_SPACING,
                    price: 0.0,
                    value: 0.0,
                    color: ELISION_COLOR,
                    is_max: false,
                    is_elision: true,
                });
            }
        }

        // Edges only reach a next column that is the immediate next real
        // step; across an elided gap the dots stand in for them.
        let next_is_adjacent = steps.get(visual + 1) == Some(&(real + 1));

        let prices = lattice.price_level(real);
        let values = lattice.value_level(real);
        for k in 0..prices.len() {
            let y = center_y + topology.row_offset(real, k) * style.row_spacing;
            let value = values[k];

            nodes.push(TreeNode {
                step: real,
                index: k,
                x,
                y,
                price: prices[k],
                value,
                color: palette.color(value, max_value),
                is_max: max_value > 0.0 && value == max_value,
                is_elision: false,
            });

            if next_is_adjacent {
                let next_x = (visual + 1) as Real * LEVEL_WIDTH + MARGIN;
                let next_len = lattice.price_level(real + 1).len();
                for succ in topology.successors(k) {
                    if succ < next_len {
                        edges.push(Edge {
                            x1: x,
                            y1: y,
                            x2: next_x,
                            y2: center_y + topology.row_offset(real + 1, succ) * style.row_spacing,
                        });
                    }
                }
            }
        }
    }

    TreeGeometry {
        nodes,
        edges,
        labels,
        width,
        height,
        style,
    }
}
