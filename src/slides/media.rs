//! Photo and statement slides: collage, hero photo, quotes, contrasts, closing

use crate::canvas::{self, BORDER_RADIUS, HEIGHT, WIDTH};
use crate::layout::{BoundingBox, Direction, Point};
use crate::palette::Palette;
use crate::renderer::{Gradient, Paint, SvgBuilder, TextStyle};

/// Surface rect with a translucent gradient wash on top
fn photo_frame(svg: &mut SvgBuilder, bounds: BoundingBox, wash: &str) {
    let c = &svg.palette().colors;
    svg.add_rect(bounds, BORDER_RADIUS, &Paint::fill(&c.surface));
    svg.add_rect(bounds, BORDER_RADIUS, &Paint::fill(wash));
}

/// One large frame on the left, two stacked frames on the right
pub(super) fn image_collage(palette: &Palette) -> String {
    let c = &palette.colors;
    let mut svg = SvgBuilder::new(palette);
    let wash = svg.add_gradient(
        &Gradient::diagonal("imgGrad1")
            .with_stop(0.0, &c.accent_blue, 0.3)
            .with_stop(100.0, &c.accent_aqua, 0.3),
    );

    svg.add_comment("Large left frame");
    photo_frame(&mut svg, BoundingBox::new(200.0, 200.0, 800.0, 680.0), &wash);

    let right = BoundingBox::new(1080.0, 200.0, 640.0, 680.0);
    let stacked = right.split(2, 40.0, Direction::Vertical);
    for (frame, name) in stacked.into_iter().zip(["Top right frame", "Bottom right frame"]) {
        svg.add_comment(name);
        photo_frame(&mut svg, frame, &wash);
    }

    svg.build()
}

/// Full-bleed gradient standing in for a photo, dimmed slightly
pub(super) fn hero_photo(palette: &Palette) -> String {
    let c = &palette.colors;
    let mut svg = SvgBuilder::new(palette);
    let photo = svg.add_gradient(
        &Gradient::diagonal("heroGrad")
            .with_stop(0.0, &c.accent_blue, 0.6)
            .with_stop(50.0, &c.accent_aqua, 0.4)
            .with_stop(100.0, &c.accent_green, 0.6),
    );

    svg.add_rect(canvas::bounds(), 0.0, &Paint::fill(photo));
    svg.add_rect(
        canvas::bounds(),
        0.0,
        &Paint::fill(&c.background).with_opacity(0.12),
    );

    svg.build()
}

/// Two-line quote with an attribution beneath
pub(super) fn testimonial(palette: &Palette) -> String {
    let c = &palette.colors;
    let mut svg = SvgBuilder::new(palette);

    svg.start_group(Point::new(260.0, 350.0));
    svg.add_text_lines(
        &["「革新的なデザインと", "パフォーマンス」"],
        Point::new(0.0, 0.0),
        80.0,
        &TextStyle::new(56.0, 600).with_fill(&c.text),
    );
    svg.add_text(
        "— Tech Review Magazine",
        Point::new(0.0, 280.0),
        &TextStyle::new(32.0, 400).with_fill(&c.text_muted),
    );
    svg.end_group();

    svg.build()
}

/// Light half against dark half, divided by a faint rule
pub(super) fn before_after(palette: &Palette) -> String {
    let c = &palette.colors;
    let mut svg = SvgBuilder::new(palette);
    let half = WIDTH / 2.0;
    let label = TextStyle::new(72.0, 600).centered();

    svg.add_comment("Before side");
    svg.add_rect(BoundingBox::new(0.0, 0.0, half, HEIGHT), 0.0, &Paint::fill(&c.paper));
    svg.add_text(
        "Before",
        Point::new(WIDTH / 4.0, HEIGHT / 2.0),
        &label.clone().with_fill(&c.ink),
    );

    svg.add_comment("After side");
    svg.add_rect(
        BoundingBox::new(half, 0.0, half, HEIGHT),
        0.0,
        &Paint::fill(&c.background),
    );
    svg.add_text(
        "After",
        Point::new(WIDTH * 3.0 / 4.0, HEIGHT / 2.0),
        &label.with_fill(&c.text),
    );

    svg.add_comment("Divider");
    svg.add_rect(
        BoundingBox::new(half - 2.0, 0.0, 4.0, HEIGHT),
        0.0,
        &Paint::fill(&c.text).with_opacity(0.3),
    );

    svg.build()
}

/// A headline figure with its caption, placed at `origin`
fn kpi_figure(svg: &mut SvgBuilder, origin: Point, figure: &str, color: &str, caption: &str) {
    let c = &svg.palette().colors;
    svg.start_group(origin);
    svg.add_text(
        figure,
        Point::new(0.0, 0.0),
        &TextStyle::new(120.0, 700).with_fill(color),
    );
    svg.add_text(
        caption,
        Point::new(0.0, 140.0),
        &TextStyle::new(36.0, 400).with_fill(&c.text_muted),
    );
    svg.end_group();
}

/// Gain on the left in green, reduction on the right in orange
pub(super) fn kpi_contrast(palette: &Palette) -> String {
    let c = &palette.colors;
    let mut svg = SvgBuilder::new(palette);
    let y = HEIGHT / 2.0 - 100.0;

    kpi_figure(
        &mut svg,
        Point::new(400.0, y),
        "+47%",
        &c.accent_green,
        "パフォーマンス向上",
    );
    kpi_figure(
        &mut svg,
        Point::new(WIDTH - 650.0, y),
        "-32%",
        &c.accent_orange,
        "消費電力削減",
    );

    svg.build()
}

/// Empty outlined slots: three across the top, one offset below
pub(super) fn feature_slots(palette: &Palette) -> String {
    let c = &palette.colors;
    let mut svg = SvgBuilder::new(palette);
    let slot = Paint::outline(&c.text_muted, 3.0);

    for (x, y) in [(300.0, 300.0), (800.0, 300.0), (1300.0, 300.0), (550.0, 650.0)] {
        svg.add_rect(BoundingBox::new(x, y, 280.0, 280.0), 40.0, &slot);
    }

    svg.build()
}

/// Thank-you line, accent rule, and platform list
pub(super) fn closing(palette: &Palette) -> String {
    let c = &palette.colors;
    let mut svg = SvgBuilder::new(palette);

    svg.start_group(canvas::center().offset(0.0, -80.0));
    svg.add_text(
        "Thank you.",
        Point::new(0.0, 0.0),
        &TextStyle::new(96.0, 600).centered(),
    );
    svg.add_rect(
        BoundingBox::new(-250.0, 40.0, 500.0, 6.0),
        0.0,
        &Paint::fill(&c.accent_aqua),
    );
    svg.add_text(
        "macOS • iPadOS • Apple Intelligence",
        Point::new(0.0, 160.0),
        &TextStyle::new(40.0, 400).centered().with_fill(&c.text_muted),
    );
    svg.end_group();

    svg.build()
}
