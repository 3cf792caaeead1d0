//! Structural layouts: content, diagrams, grids, dividers
//!
//! These slides lean on the layout helpers ([`BoundingBox::split`],
//! [`BoundingBox::grid`], [`ring_points`]) instead of hand-placed
//! coordinates, so the same composition holds if the canvas constants move.

use crate::canvas::{self, BORDER_RADIUS, HEIGHT, SPACING, WIDTH};
use crate::layout::{evenly_spaced, ring_points, BoundingBox, Direction, Point};
use crate::palette::Palette;
use crate::renderer::{arc_path, Gradient, Paint, SvgBuilder, TextStyle};

/// Left edge of headings and body panels
const MARGIN: f64 = SPACING * 2.0;

/// Body area below a slide heading
fn body_area() -> BoundingBox {
    BoundingBox::new(MARGIN, 300.0, WIDTH - 2.0 * MARGIN, HEIGHT - 300.0 - 140.0)
}

/// Title and muted subtitle in the top-left corner
fn slide_heading(svg: &mut SvgBuilder, title: &str, subtitle: &str) {
    let c = &svg.palette().colors;
    svg.add_text(title, Point::new(MARGIN, 160.0), &TextStyle::new(64.0, 600));
    svg.add_text(
        subtitle,
        Point::new(MARGIN, 220.0),
        &TextStyle::new(32.0, 400).with_fill(&c.text_muted),
    );
}

/// Rounded surface card
fn card(svg: &mut SvgBuilder, bounds: BoundingBox) {
    let c = &svg.palette().colors;
    svg.add_rect(bounds, BORDER_RADIUS, &Paint::fill(&c.surface));
}

/// Heading over a single panel of talking points
pub(super) fn content_focus(palette: &Palette) -> String {
    let c = &palette.colors;
    let mut svg = SvgBuilder::new(palette);
    let body = body_area();

    slide_heading(&mut svg, "Designed for focus", "One idea per slide");
    card(&mut svg, body);
    svg.add_rect(
        BoundingBox::new(body.x, body.y, 8.0, body.height),
        0.0,
        &Paint::fill(&c.accent_blue),
    );
    svg.add_text_lines(
        &[
            "• Lead with the headline",
            "• Support it with three facts",
            "• Keep every line short",
            "• End on the takeaway",
        ],
        body.origin().offset(SPACING, 110.0),
        80.0,
        &TextStyle::new(40.0, 400).with_fill(&c.text_soft),
    );

    svg.build()
}

const PILLARS: [&str; 3] = ["Performance", "Efficiency", "Design"];

/// Three feature cards on the corners of a triangle, joined by edges
pub(super) fn feature_comparison(palette: &Palette) -> String {
    let c = &palette.colors;
    let mut svg = SvgBuilder::new(palette);
    let center = canvas::center().offset(0.0, 80.0);
    let corners = ring_points(center, 300.0, PILLARS.len(), 0.0);
    let edge = Paint::stroke(&c.text_muted, 3.0).with_opacity(0.6);

    slide_heading(&mut svg, "Three pillars", "Balanced by design");

    svg.add_comment("Edges");
    for (i, from) in corners.iter().enumerate() {
        let to = corners[(i + 1) % corners.len()];
        svg.add_line(*from, to, &edge);
    }

    svg.add_comment("Nodes");
    for (corner, pillar) in corners.iter().zip(PILLARS) {
        svg.add_rect(
            BoundingBox::centered_at(*corner, 320.0, 120.0),
            BORDER_RADIUS,
            &Paint::fill(&c.surface).with_stroke(&c.accent_aqua, 2.0),
        );
        svg.add_text(
            pillar,
            corner.offset(0.0, 14.0),
            &TextStyle::new(40.0, 600).centered(),
        );
    }

    svg.build()
}

/// Share of the gauge that is filled, in percent
const GAUGE_PERCENT: f64 = 72.0;

const GAUGE_RADIUS: f64 = 260.0;

/// One large figure inside a ring gauge
pub(super) fn stat_highlight(palette: &Palette) -> String {
    let c = &palette.colors;
    let mut svg = SvgBuilder::new(palette);
    let center = canvas::center();

    svg.add_comment("Gauge track");
    svg.add_circle(
        center,
        GAUGE_RADIUS,
        &Paint::outline(&c.text_muted, 24.0).with_opacity(0.25),
    );
    svg.add_comment("Gauge value");
    svg.add_path(
        &arc_path(center, GAUGE_RADIUS, 0.0, GAUGE_PERCENT / 100.0 * 360.0),
        &Paint::outline(&c.accent_green, 24.0),
    );

    svg.add_text(
        &format!("{}%", GAUGE_PERCENT),
        center.offset(0.0, 40.0),
        &TextStyle::new(140.0, 700).centered(),
    );
    svg.add_text(
        "faster on-device AI",
        center.offset(0.0, 110.0),
        &TextStyle::new(32.0, 400).centered().with_fill(&c.text_muted),
    );

    svg.build()
}

const PROCESS_STEPS: [&str; 4] = ["Plan", "Design", "Build", "Ship"];

/// Evenly spaced steps, left to right, with connectors between them
pub(super) fn process_flow(palette: &Palette) -> String {
    let c = &palette.colors;
    let mut svg = SvgBuilder::new(palette);
    let row = BoundingBox::new(MARGIN, 420.0, WIDTH - 2.0 * MARGIN, 240.0);
    let steps = row.split(PROCESS_STEPS.len(), SPACING, Direction::Horizontal);
    let connector = Paint::stroke(&c.text_muted, 3.0);

    slide_heading(&mut svg, "How it works", "Four steps from idea to launch");

    for (i, (step, name)) in steps.iter().zip(PROCESS_STEPS).enumerate() {
        svg.add_rect(
            *step,
            BORDER_RADIUS,
            &Paint::fill(&c.surface).with_stroke(&c.accent_aqua, 2.0),
        );
        let mid = step.center();
        svg.add_text(
            &format!("STEP {}", i + 1),
            mid.offset(0.0, -20.0),
            &TextStyle::new(24.0, 600).centered().with_fill(&c.accent_aqua),
        );
        svg.add_text(
            name,
            mid.offset(0.0, 40.0),
            &TextStyle::new(44.0, 600).centered(),
        );
    }

    svg.add_comment("Connectors");
    for pair in steps.windows(2) {
        let y = pair[0].center().y;
        svg.add_line(
            Point::new(pair[0].right() + 12.0, y),
            Point::new(pair[1].x - 12.0, y),
            &connector,
        );
    }

    svg.build()
}

/// Text column on the left, a visual panel on the right
pub(super) fn split_content(palette: &Palette) -> String {
    let c = &palette.colors;
    let mut svg = SvgBuilder::new(palette);
    let halves = canvas::bounds()
        .inset(MARGIN)
        .split(2, SPACING, Direction::Horizontal);
    let (text, visual) = (halves[0], halves[1]);

    svg.add_text(
        "Built to last",
        text.origin().offset(0.0, 120.0),
        &TextStyle::new(72.0, 600),
    );
    svg.add_rect(
        BoundingBox::new(text.x, text.y + 170.0, 240.0, 4.0),
        0.0,
        &Paint::fill(&c.accent_purple),
    );
    svg.add_text_lines(
        &[
            "Recycled aluminum enclosure.",
            "Repairable by design.",
            "Carbon neutral shipping.",
        ],
        text.origin().offset(0.0, 280.0),
        56.0,
        &TextStyle::new(36.0, 400).with_fill(&c.text_muted),
    );

    card(&mut svg, visual);
    svg.add_ellipse(
        visual.center(),
        visual.width / 3.0,
        visual.height / 4.0,
        &Paint::fill(&c.accent_purple).with_opacity(0.35),
    );

    svg.build()
}

/// Two rows of three cards, each with a title and a short note
pub(super) fn card_layout(palette: &Palette) -> String {
    let c = &palette.colors;
    let mut svg = SvgBuilder::new(palette);
    let cells = body_area().grid(2, 3, 40.0);

    slide_heading(&mut svg, "Everything included", "Six reasons to upgrade");

    for (i, cell) in cells.iter().enumerate() {
        card(&mut svg, *cell);
        svg.add_circle(
            cell.origin().offset(64.0, 64.0),
            24.0,
            &Paint::fill(&c.accent_blue).with_opacity(0.8),
        );
        svg.add_text(
            &format!("Card {}", i + 1),
            cell.origin().offset(40.0, 150.0),
            &TextStyle::new(36.0, 600),
        );
        svg.add_text(
            "Short supporting note",
            cell.origin().offset(40.0, 200.0),
            &TextStyle::new(24.0, 400).with_fill(&c.text_muted),
        );
    }

    svg.build()
}

const CYCLE_ITEMS: [&str; 4] = ["Listen", "Learn", "Build", "Measure"];

/// Four items around a ring with a labelled core
pub(super) fn diagram(palette: &Palette) -> String {
    let c = &palette.colors;
    let mut svg = SvgBuilder::new(palette);
    let center = canvas::center().offset(0.0, 60.0);
    let radius = 300.0;

    svg.add_text(
        "Continuous cycle",
        Point::new(WIDTH / 2.0, 140.0),
        &TextStyle::new(56.0, 600).centered(),
    );

    svg.add_comment("Orbit");
    svg.add_circle(
        center,
        radius,
        &Paint::outline(&c.text_muted, 2.0).with_opacity(0.4),
    );

    svg.add_comment("Core");
    svg.add_circle(
        center,
        110.0,
        &Paint::fill(&c.surface).with_stroke(&c.accent_blue, 3.0),
    );
    svg.add_text(
        "Core",
        center.offset(0.0, 14.0),
        &TextStyle::new(40.0, 600).centered(),
    );

    let positions = ring_points(center, radius, CYCLE_ITEMS.len(), 0.0);
    for (at, item) in positions.iter().zip(CYCLE_ITEMS) {
        svg.add_rect(
            BoundingBox::centered_at(*at, 240.0, 100.0),
            BORDER_RADIUS,
            &Paint::fill(&c.surface).with_stroke(&c.accent_aqua, 2.0),
        );
        svg.add_text(
            item,
            at.offset(0.0, 12.0),
            &TextStyle::new(32.0, 600).centered(),
        );
    }

    svg.build()
}

/// Oversized quotation mark, the quote, and a right-aligned attribution
pub(super) fn quote(palette: &Palette) -> String {
    let c = &palette.colors;
    let mut svg = SvgBuilder::new(palette);

    svg.add_text(
        "“",
        Point::new(MARGIN, 480.0),
        &TextStyle::new(320.0, 700)
            .with_fill(&c.accent_blue)
            .with_opacity(0.4),
    );
    svg.add_text_lines(
        &["Simplicity is the", "ultimate sophistication."],
        Point::new(MARGIN + 200.0, 440.0),
        96.0,
        &TextStyle::new(80.0, 600),
    );
    svg.add_rect(
        BoundingBox::new(WIDTH - MARGIN - 200.0, 700.0, 200.0, 4.0),
        0.0,
        &Paint::fill(&c.text_muted),
    );
    svg.add_text(
        "Leonardo da Vinci",
        Point::new(WIDTH - MARGIN, 770.0),
        &TextStyle::new(36.0, 400).end().with_fill(&c.text_muted),
    );

    svg.build()
}

/// Image placeholder with a caption, talking points beside it
pub(super) fn image_text(palette: &Palette) -> String {
    let c = &palette.colors;
    let mut svg = SvgBuilder::new(palette);
    let image = BoundingBox::new(MARGIN, 200.0, 800.0, 600.0);
    let wash = svg.add_gradient(
        &Gradient::diagonal("imageTextGrad")
            .with_stop(0.0, &c.accent_purple, 0.5)
            .with_stop(100.0, &c.accent_blue, 0.5),
    );

    svg.add_comment("Image");
    card(&mut svg, image);
    svg.add_rect(image, BORDER_RADIUS, &Paint::fill(wash));
    svg.add_text(
        "Shot on iPhone",
        Point::new(image.x, image.bottom() + 60.0),
        &TextStyle::new(24.0, 400).with_fill(&c.text_muted),
    );

    let text_x = image.right() + SPACING;
    svg.add_comment("Talking points");
    svg.add_text("Pro camera system", Point::new(text_x, 300.0), &TextStyle::new(56.0, 600));
    svg.add_text_lines(
        &[
            "• 48MP main camera",
            "• 5× telephoto",
            "• Night mode portraits",
            "• 4K Dolby Vision",
        ],
        Point::new(text_x, 400.0),
        60.0,
        &TextStyle::new(32.0, 400).with_fill(&c.text_muted),
    );

    svg.build()
}

const METRICS: [(&str, &str, &str); 6] = [
    ("Active users", "42M", "+8%"),
    ("Retention", "91%", "+3%"),
    ("Avg. session", "12m", "+15%"),
    ("Crash-free", "99.9%", "+0.2%"),
    ("Rating", "4.8", "+0.1"),
    ("Countries", "175", "+12"),
];

/// Two rows of three KPI cards: label, value, delta
pub(super) fn metric_dashboard(palette: &Palette) -> String {
    let c = &palette.colors;
    let mut svg = SvgBuilder::new(palette);
    let cells = body_area().grid(2, 3, 40.0);

    slide_heading(&mut svg, "Dashboard", "Quarter at a glance");

    for (cell, (label, value, delta)) in cells.iter().zip(METRICS) {
        card(&mut svg, *cell);
        svg.start_group(cell.origin());
        svg.add_text(
            label,
            Point::new(40.0, 60.0),
            &TextStyle::new(24.0, 400).with_fill(&c.text_muted),
        );
        svg.add_text(value, Point::new(40.0, 160.0), &TextStyle::new(88.0, 700));
        svg.add_text(
            delta,
            Point::new(40.0, cell.height - 40.0),
            &TextStyle::new(28.0, 600).with_fill(&c.accent_green),
        );
        svg.end_group();
    }

    svg.build()
}

/// Section title over a faint oversized section number
pub(super) fn section_divider(palette: &Palette) -> String {
    let c = &palette.colors;
    let mut svg = SvgBuilder::new(palette);
    let center = canvas::center();

    svg.add_comment("Ghost number");
    svg.add_text(
        "01",
        center.offset(0.0, 160.0),
        &TextStyle::new(480.0, 700)
            .centered()
            .with_fill(&c.text)
            .with_opacity(0.08),
    );
    svg.add_text(
        "Introduction",
        center.offset(0.0, 30.0),
        &TextStyle::new(96.0, 600).centered(),
    );
    svg.add_rect(
        BoundingBox::centered_at(center.offset(0.0, 90.0), 160.0, 6.0),
        0.0,
        &Paint::fill(&c.accent_blue),
    );

    svg.build()
}

/// Final call for questions with a row of accent dots
pub(super) fn end_slide(palette: &Palette) -> String {
    let c = &palette.colors;
    let mut svg = SvgBuilder::new(palette);
    let center = canvas::center();

    svg.add_text(
        "Questions?",
        center.offset(0.0, -40.0),
        &TextStyle::new(120.0, 600).centered(),
    );
    svg.add_text(
        "apple.com/keynote",
        center.offset(0.0, 60.0),
        &TextStyle::new(36.0, 400).centered().with_fill(&c.text_muted),
    );
    let dots = [&c.accent_blue, &c.accent_green, &c.accent_orange];
    let xs = evenly_spaced(center.x - 60.0, center.x + 60.0, dots.len());
    for (x, color) in xs.into_iter().zip(dots) {
        svg.add_circle(Point::new(x, center.y + 160.0), 12.0, &Paint::fill(color));
    }

    svg.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_triangle_has_three_edges_and_nodes() {
        let svg = feature_comparison(&Palette::default());
        assert_eq!(svg.matches("<line").count(), 3);
        for pillar in PILLARS {
            assert!(svg.contains(&format!(">{}</text>", pillar)));
        }
    }

    #[test]
    fn test_gauge_arc_uses_large_arc_flag() {
        let svg = stat_highlight(&Palette::default());
        assert_eq!(svg.matches("<path").count(), 1);
        assert!(svg.contains("A260.00 260.00 0 1 1"));
        assert!(svg.contains(">72%</text>"));
    }

    #[test]
    fn test_process_flow_connects_neighbours() {
        let svg = process_flow(&Palette::default());
        assert_eq!(svg.matches("<line").count(), PROCESS_STEPS.len() - 1);
        assert!(svg.contains(">STEP 4</text>"));
    }

    #[test]
    fn test_card_layout_is_a_two_by_three_grid() {
        let svg = card_layout(&Palette::default());
        assert_eq!(svg.matches("<circle").count(), 6);
        assert!(svg.contains(">Card 6</text>"));
    }

    #[test]
    fn test_diagram_places_items_on_ring() {
        let svg = diagram(&Palette::default());
        // Orbit, core, nothing else round
        assert_eq!(svg.matches("<circle").count(), 2);
        for item in CYCLE_ITEMS {
            assert!(svg.contains(&format!(">{}</text>", item)));
        }
        // First item sits at 12 o'clock
        assert!(svg.contains(r#"<rect x="840" y="250" width="240" height="100""#));
    }

    #[test]
    fn test_metric_dashboard_shows_every_metric() {
        let svg = metric_dashboard(&Palette::default());
        for (_, value, _) in METRICS {
            assert!(svg.contains(&format!(">{}</text>", value)));
        }
        assert_eq!(svg.matches("<g transform").count(), 6);
    }

    #[test]
    fn test_section_number_is_faint() {
        let svg = section_divider(&Palette::default());
        assert!(svg.contains(r#"opacity="0.08">01</text>"#));
    }

    #[test]
    fn test_quote_attribution_is_right_aligned() {
        let svg = quote(&Palette::default());
        assert!(svg.contains(r#"<text x="1760" y="770" text-anchor="end""#));
    }
}
