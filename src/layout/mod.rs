//! Geometry helpers for placing primitives on the canvas
//!
//! There is no layout engine here: slides compute positions directly.
//! This module only provides the boxes, evenly spaced offsets, and polar
//! coordinates the slide routines compute positions with.

pub mod polar;
pub mod types;

pub use polar::{polar_point, ring_points};
pub use types::*;
