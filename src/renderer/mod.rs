//! SVG renderer for slide mockups
//!
//! Slides are composed by hand through [`SvgBuilder`]; this module owns the
//! shared document preamble, the primitive markup, and the arc math for
//! wedge and gauge paths.

pub mod path;
pub mod style;
pub mod svg;

pub use path::{arc_path, large_arc_flag, pie_wedges, PieWedge, ResolvedPath};
pub use style::{Gradient, Paint, TextAnchor, TextStyle};
pub use svg::{document_postamble, document_preamble, SvgBuilder};
