//! **leaper-core** — board geometry shared across the *leaper* crates.
//!
//! This crate provides the plain value types every other crate speaks:
//! board cells, the bounds-checking [`Board`], coordinate validation errors
//! and the [`Color`] used by renderers.

pub mod error;
pub mod geom;
pub mod style;

pub use error::BoardError;
pub use geom::{Board, BoardIter, Cell};
pub use style::Color;
