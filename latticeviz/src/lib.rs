//! # latticeviz
//!
//! Layout and level-of-detail visualization engine for recombining
//! option-pricing lattices.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `lv-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use latticeviz::lattice::Lattice;
//! use latticeviz::layout::{layout, DisplayPolicy, Palette};
//!
//! let prices = vec![vec![100.0], vec![110.0, 90.0]];
//! let values = vec![vec![5.2], vec![10.0, 0.0]];
//! let lattice = Lattice::new(prices, values)?;
//!
//! let out = layout(&lattice, &DisplayPolicy::default(), &Palette::GREEN);
//! let svg = latticeviz::layout::render_svg(&out);
//! assert!(svg.starts_with("<svg"));
//! # Ok::<(), latticeviz::core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, and error definitions.
pub use lv_core as core;

/// Lattice data model: topology inference and shape validation.
pub use lv_lattice as lattice;

/// Geometry builders, color mapping, mode selection, SVG rendering.
pub use lv_layout as layout;
