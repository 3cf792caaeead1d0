//! Slide Mockups - SVG wireframes of keynote-style slide templates
//!
//! This library maps a fixed catalog of 32 slide layouts to rendering
//! routines that each produce a complete 1920x1080 SVG document, and writes
//! them to disk as `apple_template_NNN_<label>.svg`.
//!
//! # Example
//!
//! ```rust
//! use slide_mockups::{render_slide, Palette};
//!
//! let svg = render_slide(11, &Palette::default());
//! assert!(svg.starts_with("<?xml"));
//! assert!(svg.contains("<path"));
//! ```

pub mod canvas;
pub mod catalog;
pub mod error;
pub mod generator;
pub mod layout;
pub mod palette;
pub mod renderer;
pub mod slides;

pub use catalog::{SlideCategory, SlideKind, SLIDE_COUNT};
pub use error::GenerateError;
pub use generator::{GenerationReport, Generator, WrittenSlide, DEFAULT_OUTPUT_DIR};
pub use palette::{Palette, PaletteError};

/// Render a single slide to an SVG string without touching the disk
///
/// Indices outside the catalog render the generic placeholder.
///
/// # Example
///
/// ```rust
/// use slide_mockups::{render_slide, Palette};
///
/// let svg = render_slide(33, &Palette::default());
/// assert!(svg.contains("Slide 033"));
/// ```
pub fn render_slide(index: u32, palette: &Palette) -> String {
    slides::render_slide(index, palette)
}
