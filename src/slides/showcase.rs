//! Data slides: timeline, split table, pie and bar charts, icon trio

use crate::canvas::{self, BORDER_RADIUS, HEIGHT, WIDTH};
use crate::layout::{evenly_spaced, polar_point, BoundingBox, Point};
use crate::palette::Palette;
use crate::renderer::{pie_wedges, Paint, SvgBuilder, TextAnchor, TextStyle};

const TIMELINE_YEARS: [&str; 5] = ["2020", "2021", "2022", "2023", "2024"];

/// Inset of the timeline rule from either canvas edge
const TIMELINE_MARGIN: f64 = 300.0;

/// One rule, then a node and a label per year
///
/// Each label is a single text element: the year above the rule and the
/// caption below it, as two runs.
pub(super) fn timeline(palette: &Palette) -> String {
    let c = &palette.colors;
    let mut svg = SvgBuilder::new(palette);
    let y = HEIGHT / 2.0;
    let (start, end) = (TIMELINE_MARGIN, WIDTH - TIMELINE_MARGIN);

    svg.add_line(
        Point::new(start, y),
        Point::new(end, y),
        &Paint::stroke(&c.text_muted, 4.0),
    );

    let xs = evenly_spaced(start, end, TIMELINE_YEARS.len());
    for (x, year) in xs.into_iter().zip(TIMELINE_YEARS) {
        svg.add_circle(Point::new(x, y), 20.0, &Paint::fill(&c.text));
        svg.add_text_runs(
            Point::new(x, y - 60.0),
            TextAnchor::Middle,
            &[
                (year, 0.0, TextStyle::new(36.0, 600)),
                (
                    "Milestone",
                    130.0,
                    TextStyle::new(24.0, 400).with_fill(&c.text_muted),
                ),
            ],
        );
    }

    svg.build()
}

/// Framed two-column comparison split by a faint divider
pub(super) fn split_table(palette: &Palette) -> String {
    let c = &palette.colors;
    let mut svg = SvgBuilder::new(palette);
    let frame = BoundingBox::new(0.0, 0.0, 1320.0, 680.0);

    svg.start_group(Point::new(300.0, 200.0));
    svg.add_rect(
        frame,
        BORDER_RADIUS,
        &Paint::fill(&c.surface).with_stroke(&c.text_muted, 2.0),
    );
    svg.add_comment("Vertical divider");
    svg.add_line(
        Point::new(frame.width / 2.0, 0.0),
        Point::new(frame.width / 2.0, frame.height),
        &Paint::stroke(&c.text_muted, 1.0).with_opacity(0.3),
    );

    let columns: [(&str, [&str; 3]); 2] = [
        (
            "Performance",
            ["• 2× faster CPU", "• 3× faster GPU", "• 40% less power"],
        ),
        (
            "Efficiency",
            ["• All-day battery", "• Thermal design", "• Silent operation"],
        ),
    ];
    for (i, (heading, bullets)) in columns.iter().enumerate() {
        let x = 80.0 + i as f64 * frame.width / 2.0;
        svg.add_text(heading, Point::new(x, 100.0), &TextStyle::new(48.0, 600));
        svg.add_text_lines(
            bullets,
            Point::new(x, 200.0),
            60.0,
            &TextStyle::new(28.0, 400).with_fill(&c.text_muted),
        );
    }
    svg.end_group();

    svg.build()
}

/// Shares of the pie, in percent
const PIE_SHARES: [f64; 4] = [35.0, 25.0, 20.0, 20.0];

const PIE_RADIUS: f64 = 300.0;

/// Four wedges over a soft underlay, each labelled with its share
pub(super) fn pie_chart(palette: &Palette) -> String {
    let c = &palette.colors;
    let mut svg = SvgBuilder::new(palette);
    let center = canvas::center();
    let colors = [
        &c.accent_blue,
        &c.accent_green,
        &c.accent_purple,
        &c.accent_orange,
    ];

    svg.add_comment("Underlay circle");
    svg.add_circle(
        center,
        PIE_RADIUS + 20.0,
        &Paint::fill(&c.surface).with_opacity(0.5),
    );

    let wedges = pie_wedges(center, PIE_RADIUS, &PIE_SHARES);
    for (wedge, color) in wedges.iter().zip(colors) {
        svg.add_path(&wedge.to_path(), &Paint::fill(color).with_opacity(0.8));
    }

    for (wedge, share) in wedges.iter().zip(PIE_SHARES) {
        let mid = wedge.start_degrees + wedge.span_degrees / 2.0;
        let at = polar_point(center, PIE_RADIUS * 0.65, mid);
        svg.add_text(
            &format!("{}%", share),
            at.offset(0.0, 14.0),
            &TextStyle::new(40.0, 700).centered(),
        );
    }

    svg.build()
}

/// Four rounded columns rising left to right from a shared baseline
pub(super) fn bar_chart(palette: &Palette) -> String {
    let c = &palette.colors;
    let mut svg = SvgBuilder::new(palette);
    let baseline = 900.0;
    let bar_width = 120.0;
    let pitch = 180.0;

    for i in 0..4 {
        let height = 200.0 + 100.0 * i as f64;
        let x = WIDTH / 2.0 - 300.0 + pitch * i as f64;
        svg.add_rect(
            BoundingBox::new(x, baseline - height, bar_width, height),
            20.0,
            &Paint::fill(&c.accent_blue),
        );
    }

    svg.build()
}

/// Three line-art icons resting on a shared floor line
pub(super) fn icon_trio(palette: &Palette) -> String {
    let c = &palette.colors;
    let mut svg = SvgBuilder::new(palette);
    let ink = Paint::stroke(&c.text, 3.0);
    let hollow = Paint::outline(&c.text, 3.0);
    let top = HEIGHT / 2.0 - 100.0;

    svg.add_line(
        Point::new(400.0, HEIGHT / 2.0 + 200.0),
        Point::new(WIDTH - 400.0, HEIGHT / 2.0 + 200.0),
        &Paint::stroke(&c.text_muted, 2.0),
    );

    svg.add_comment("Lamp icon");
    svg.start_group(Point::new(580.0, top));
    svg.add_circle(Point::new(60.0, 30.0), 30.0, &hollow);
    svg.add_line(Point::new(60.0, 60.0), Point::new(60.0, 160.0), &ink);
    svg.add_line(Point::new(30.0, 160.0), Point::new(90.0, 160.0), &ink);
    svg.end_group();

    svg.add_comment("Chair icon");
    svg.start_group(Point::new(WIDTH / 2.0 - 60.0, top));
    svg.add_rect(BoundingBox::new(30.0, 0.0, 60.0, 10.0), 5.0, &hollow);
    for x in [40.0, 80.0] {
        svg.add_line(Point::new(x, 10.0), Point::new(x, 80.0), &ink);
        svg.add_line(Point::new(x, 80.0), Point::new(x, 160.0), &ink);
    }
    svg.end_group();

    svg.add_comment("Bed icon");
    svg.start_group(Point::new(WIDTH - 700.0, top));
    svg.add_rect(BoundingBox::new(0.0, 50.0, 180.0, 15.0), 7.0, &hollow);
    svg.add_line(Point::new(20.0, 65.0), Point::new(20.0, 140.0), &ink);
    svg.add_line(Point::new(160.0, 65.0), Point::new(160.0, 140.0), &ink);
    svg.add_circle(Point::new(45.0, 30.0), 15.0, &hollow);
    svg.end_group();

    svg.build()
}
