//! Generic placeholder for indices outside the catalog

use crate::canvas;
use crate::catalog::title_case;
use crate::layout::{BoundingBox, Point};
use crate::palette::Palette;
use crate::renderer::{Paint, SvgBuilder, TextStyle};

/// Numbered placeholder: "Slide NNN", the title-cased label, and a rule
pub fn generic(index: u32, label: &str, palette: &Palette) -> String {
    let c = &palette.colors;
    let mut svg = SvgBuilder::new(palette);

    svg.start_group(canvas::center());
    svg.add_text(
        &format!("Slide {:03}", index),
        Point::new(0.0, 0.0),
        &TextStyle::new(72.0, 600).centered(),
    );
    svg.add_text(
        &title_case(label),
        Point::new(0.0, 100.0),
        &TextStyle::new(42.0, 400).centered().with_fill(&c.text_muted),
    );
    svg.add_rect(
        BoundingBox::new(-400.0, 150.0, 800.0, 4.0),
        0.0,
        &Paint::fill(&c.accent_blue),
    );
    svg.end_group();

    svg.build()
}
