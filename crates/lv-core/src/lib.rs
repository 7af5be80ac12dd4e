//! # lv-core
//!
//! Core types and error definitions for latticeviz.
//!
//! This crate provides the building blocks shared by the lattice data model
//! and the layout engine – primitive type aliases, the error enum, and the
//! `ensure!` / `fail!` convenience macros.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used throughout the library.
pub type Real = f64;

/// Alias used for array sizes / indices.
pub type Size = usize;

/// A time-step index into a lattice (`0..=N`).
pub type Step = usize;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
