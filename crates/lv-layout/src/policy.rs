//! Display policy: the step-count thresholds and the decimation stride.
//!
//! These are tunable display constants, not load-bearing invariants —
//! observed deployments of this UI have shipped with a tree cutoff of 10
//! and of 15. Override the defaults rather than patching literals.

use lv_core::Size;

/// The rendering strategy chosen for a lattice of a given depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum DisplayMode {
    /// Every step rendered as a node-link diagram.
    FullTree,
    /// Node-link diagram over a decimated subset of steps.
    FilteredTree,
    /// One fixed-size grid cell per node.
    MatrixHeatmap,
}

impl DisplayMode {
    /// Kebab-case tag used by renderers.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FullTree => "full-tree",
            Self::FilteredTree => "filtered-tree",
            Self::MatrixHeatmap => "matrix-heatmap",
        }
    }
}

/// Named, overridable thresholds for the mode decision and step decimation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayPolicy {
    /// Largest depth rendered as a full tree.
    pub full_tree_max: Size,
    /// Largest depth rendered as a decimated tree; above this, matrix mode.
    pub filtered_tree_max: Size,
    /// Step stride in filtered-tree mode (the terminal step is always kept).
    pub stride: Size,
}

impl Default for DisplayPolicy {
    fn default() -> Self {
        Self {
            full_tree_max: 10,
            filtered_tree_max: 100,
            stride: 10,
        }
    }
}

impl DisplayPolicy {
    /// Pure, total mode decision for a lattice of depth `steps`.
    pub fn mode_for(&self, steps: Size) -> DisplayMode {
        if steps <= self.full_tree_max {
            DisplayMode::FullTree
        } else if steps <= self.filtered_tree_max {
            DisplayMode::FilteredTree
        } else {
            DisplayMode::MatrixHeatmap
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_thresholds() {
        let p = DisplayPolicy::default();
        assert_eq!(p.mode_for(0), DisplayMode::FullTree);
        assert_eq!(p.mode_for(5), DisplayMode::FullTree);
        assert_eq!(p.mode_for(10), DisplayMode::FullTree);
        assert_eq!(p.mode_for(11), DisplayMode::FilteredTree);
        assert_eq!(p.mode_for(100), DisplayMode::FilteredTree);
        assert_eq!(p.mode_for(101), DisplayMode::MatrixHeatmap);
        assert_eq!(p.mode_for(10_000), DisplayMode::MatrixHeatmap);
    }

    #[test]
    fn historical_cutoff_is_an_override_away() {
        let p = DisplayPolicy {
            full_tree_max: 15,
            ..DisplayPolicy::default()
        };
        assert_eq!(p.mode_for(15), DisplayMode::FullTree);
        assert_eq!(p.mode_for(16), DisplayMode::FilteredTree);
    }

    #[test]
    fn mode_tags() {
        assert_eq!(DisplayMode::FullTree.as_str(), "full-tree");
        assert_eq!(DisplayMode::FilteredTree.as_str(), "filtered-tree");
        assert_eq!(DisplayMode::MatrixHeatmap.as_str(), "matrix-heatmap");
    }
}
