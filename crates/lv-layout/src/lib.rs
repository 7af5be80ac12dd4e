//! # lv-layout
//!
//! Layout and level-of-detail engine for recombining option-pricing
//! lattices.
//!
//! Given a shape-validated [`lv_lattice::Lattice`], one call to
//! [`scene::layout`] produces renderable geometry — node positions,
//! inter-step edges, and a value-to-color mapping — choosing among three
//! strategies by lattice depth: a full node-link tree, a step-decimated
//! tree with elision markers, or a compact matrix heatmap.
//!
//! Every pass is a pure, synchronous function of its inputs: nothing is
//! cached between calls, so rapid recomputation is safe by construction.
//!
//! ```
//! use lv_lattice::Lattice;
//! use lv_layout::{layout, DisplayMode, DisplayPolicy, Palette};
//!
//! let prices = vec![vec![100.0], vec![110.0, 90.0]];
//! let values = vec![vec![5.2], vec![10.0, 0.0]];
//! let lattice = Lattice::new(prices, values)?;
//!
//! let out = layout(&lattice, &DisplayPolicy::default(), &Palette::GREEN);
//! assert_eq!(out.scene.mode(), Some(DisplayMode::FullTree));
//! # Ok::<(), lv_core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod color;
pub mod matrix;
pub mod policy;
pub mod scene;
pub mod svg;
pub mod tree;

pub use color::{ColorRgb, Palette};
pub use matrix::{build_matrix, Cell, Legend, MatrixGeometry};
pub use policy::{DisplayMode, DisplayPolicy};
pub use scene::{layout, Layout, Scene};
pub use svg::render_svg;
pub use tree::{build_tree, display_steps, Edge, NodeStyle, StepLabel, TreeGeometry, TreeNode};
