//! **veer-core** — grid model for heading-aware maze search.
//!
//! This crate provides the types shared across the *veer* workspace:
//! coordinates and headings ([`geom`]), the validated maze [`Grid`], its text
//! parser and renderer, and the [`GridError`] type.

pub mod error;
pub mod geom;
pub mod grid;
mod parse;
mod render;

pub use error::GridError;
pub use geom::{Bounds, BoundsIter, Cell, Heading};
pub use grid::{CellKind, Grid, GridIter};
