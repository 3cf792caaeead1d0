//! Product keynote slides: title, chip specs, benchmarks, battery, pricing

use crate::canvas::{self, BORDER_RADIUS, HEIGHT, WIDTH};
use crate::layout::{BoundingBox, Point};
use crate::palette::Palette;
use crate::renderer::{Gradient, Paint, SvgBuilder, TextStyle};

/// Two centered lines of text and nothing else
pub(super) fn hero_title(palette: &Palette) -> String {
    let c = &palette.colors;
    let mut svg = SvgBuilder::new(palette);
    let center = canvas::center();

    svg.add_text(
        "Think Different",
        center.offset(0.0, -100.0),
        &TextStyle::new(160.0, 600).centered(),
    );
    svg.add_text(
        "Innovation that matters",
        center.offset(0.0, 80.0),
        &TextStyle::new(64.0, 400).centered().with_fill(&c.text_muted),
    );

    svg.build()
}

/// Heading, accent rule, and bullet list at `origin`
fn spec_column(svg: &mut SvgBuilder, origin: Point, heading: &str, bullets: &[&str]) {
    let c = &svg.palette().colors;

    svg.start_group(origin);
    svg.add_text(heading, Point::new(0.0, 0.0), &TextStyle::new(72.0, 600));
    svg.add_rect(
        BoundingBox::new(0.0, 100.0, 300.0, 4.0),
        0.0,
        &Paint::fill(&c.accent_aqua),
    );
    svg.add_text_lines(
        bullets,
        Point::new(0.0, 180.0),
        50.0,
        &TextStyle::new(32.0, 400).with_fill(&c.text_muted),
    );
    svg.end_group();
}

/// Framed chip tile with a tinted core and a centered caption
fn chip_tile(svg: &mut SvgBuilder, origin: Point, caption: &str, font_size: f64) {
    let c = &svg.palette().colors;
    let frame = Paint::fill(&c.surface).with_stroke(&c.accent_aqua, 2.0);
    let core = Paint::fill(&c.accent_aqua).with_opacity(0.2);

    svg.start_group(origin);
    svg.add_rect(BoundingBox::new(0.0, 0.0, 400.0, 400.0), 48.0, &frame);
    svg.add_rect(BoundingBox::new(80.0, 80.0, 240.0, 240.0), 32.0, &core);
    svg.add_text(
        caption,
        Point::new(200.0, 220.0),
        &TextStyle::new(font_size, 700).centered(),
    );
    svg.end_group();
}

/// Spec list on the left, chip tile on the right
pub(super) fn cpu_spec(palette: &Palette) -> String {
    let mut svg = SvgBuilder::new(palette);

    spec_column(
        &mut svg,
        Point::new(200.0, HEIGHT / 2.0 - 200.0),
        "M4 Chip",
        &["• 10-core CPU", "• 4 performance cores", "• 6 efficiency cores"],
    );
    chip_tile(
        &mut svg,
        Point::new(WIDTH - 500.0, HEIGHT / 2.0 - 250.0),
        "M4",
        96.0,
    );

    svg.build()
}

/// Mirror of the CPU slide: chip tile left, spec list right
pub(super) fn gpu_spec(palette: &Palette) -> String {
    let mut svg = SvgBuilder::new(palette);

    chip_tile(
        &mut svg,
        Point::new(200.0, HEIGHT / 2.0 - 250.0),
        "GPU",
        72.0,
    );
    spec_column(
        &mut svg,
        Point::new(WIDTH - 800.0, HEIGHT / 2.0 - 200.0),
        "10-core GPU",
        &["• Dynamic caching", "• Hardware ray tracing", "• Mesh shading"],
    );

    svg.build()
}

/// One benchmark entry: label, bar length, score
struct Benchmark {
    name: &'static str,
    length: f64,
    score: &'static str,
}

const BENCHMARKS: [Benchmark; 3] = [
    Benchmark {
        name: "M4",
        length: 1000.0,
        score: "2.0×",
    },
    Benchmark {
        name: "M3",
        length: 700.0,
        score: "1.4×",
    },
    Benchmark {
        name: "M1",
        length: 500.0,
        score: "1.0×",
    },
];

fn section_heading(svg: &mut SvgBuilder, text: &str) {
    svg.add_text(
        text,
        Point::new(WIDTH / 2.0, 200.0),
        &TextStyle::new(64.0, 600).centered(),
    );
}

/// Horizontal bars whose lengths encode the score; the leader is highlighted
pub(super) fn benchmark_bars(palette: &Palette) -> String {
    let c = &palette.colors;
    let mut svg = SvgBuilder::new(palette);

    section_heading(&mut svg, "Performance Comparison");

    for (i, bench) in BENCHMARKS.iter().enumerate() {
        let leader = i == 0;
        let (bar, label) = if leader {
            (
                Paint::fill(&c.accent_aqua).with_opacity(0.9),
                TextStyle::new(48.0, 600),
            )
        } else {
            (
                Paint::fill(&c.text_muted).with_opacity(0.3 - 0.1 * (i as f64 - 1.0)),
                TextStyle::new(48.0, 600).with_fill(&c.text_muted),
            )
        };

        svg.start_group(Point::new(400.0, 400.0 + 130.0 * i as f64));
        svg.add_rect(
            BoundingBox::new(0.0, 0.0, bench.length, 100.0),
            BORDER_RADIUS,
            &bar,
        );
        svg.add_text(bench.name, Point::new(40.0, 60.0), &label);
        svg.add_text(
            bench.score,
            Point::new(bench.length - 80.0, 60.0),
            &label.clone().end(),
        );
        svg.end_group();
    }

    svg.build()
}

/// Bordered cards with a thin progress bar under each benchmark
pub(super) fn benchmark_cards(palette: &Palette) -> String {
    let c = &palette.colors;
    let mut svg = SvgBuilder::new(palette);

    section_heading(&mut svg, "Performance Comparison");

    let captions = ["2.0× faster", "1.4× faster", "1.0× baseline"];
    let progress = [(800.0, 1.0), (560.0, 0.5), (400.0, 0.3)];

    for (i, (bench, caption)) in BENCHMARKS.iter().zip(captions).enumerate() {
        let leader = i == 0;
        let (frame, text) = if leader {
            (
                Paint::fill(&c.surface).with_stroke(&c.accent_aqua, 2.0),
                TextStyle::new(42.0, 600),
            )
        } else {
            (
                Paint::fill(&c.surface).with_stroke(&c.text_muted, 1.0),
                TextStyle::new(42.0, 600).with_fill(&c.text_muted),
            )
        };
        let (bar_width, bar_opacity) = progress[i];
        let bar_color = if leader { &c.accent_aqua } else { &c.text_muted };

        svg.start_group(Point::new(400.0, 350.0 + 170.0 * i as f64));
        svg.add_rect(BoundingBox::new(0.0, 0.0, 1100.0, 140.0), BORDER_RADIUS, &frame);
        svg.add_rect(
            BoundingBox::new(20.0, 95.0, bar_width, 20.0),
            10.0,
            &Paint::fill(bar_color).with_opacity(bar_opacity),
        );
        svg.add_text(bench.name, Point::new(40.0, 60.0), &text);
        svg.add_text(caption, Point::new(1000.0, 60.0), &text.clone().end());
        svg.end_group();
    }

    svg.build()
}

/// Device silhouette flanked by six spec tiles
pub(super) fn product_highlights(palette: &Palette) -> String {
    let c = &palette.colors;
    let mut svg = SvgBuilder::new(palette);

    svg.add_rect(
        BoundingBox::centered_at(canvas::center(), 400.0, 600.0),
        40.0,
        &Paint::fill(&c.surface).with_stroke(&c.text_muted, 2.0),
    );

    let tiles = [
        ("Retina Display", "True Tone"),
        ("Touch ID", "Fast and Secure"),
        ("All-day Battery", "Up to 24 hours"),
        ("5G Ready", "Ultra-fast"),
        ("Camera", "12MP Wide"),
        ("Storage", "Up to 2TB"),
    ];
    let columns = [200.0, WIDTH - 500.0];
    let rows = [150.0, 480.0, 810.0];

    let tile = Paint::fill(&c.surface).with_stroke(&c.text_muted, 1.0);
    for (i, (title, subtitle)) in tiles.iter().enumerate() {
        let origin = Point::new(columns[i / rows.len()], rows[i % rows.len()]);
        svg.start_group(origin);
        svg.add_rect(BoundingBox::new(0.0, 0.0, 280.0, 140.0), 20.0, &tile);
        svg.add_text(
            title,
            Point::new(140.0, 60.0),
            &TextStyle::new(28.0, 600).centered(),
        );
        svg.add_text(
            subtitle,
            Point::new(140.0, 95.0),
            &TextStyle::new(20.0, 400).centered().with_fill(&c.text_muted),
        );
        svg.end_group();
    }

    svg.build()
}

/// A full battery glyph with the runtime printed across the charge
pub(super) fn battery(palette: &Palette) -> String {
    let c = &palette.colors;
    let mut svg = SvgBuilder::new(palette);

    svg.start_group(canvas::center().offset(-350.0, -150.0));
    svg.add_comment("Battery body");
    svg.add_rect(
        BoundingBox::new(0.0, 0.0, 700.0, 300.0),
        40.0,
        &Paint::fill(&c.surface).with_stroke(&c.text_muted, 4.0),
    );
    svg.add_rect(
        BoundingBox::new(20.0, 20.0, 660.0, 260.0),
        30.0,
        &Paint::fill(&c.accent_green).with_opacity(0.9),
    );
    svg.add_comment("Battery terminal");
    svg.add_rect(
        BoundingBox::new(700.0, 110.0, 40.0, 80.0),
        8.0,
        &Paint::fill(&c.text_muted),
    );
    svg.add_text(
        "24 hrs",
        Point::new(350.0, 185.0),
        &TextStyle::new(96.0, 700).centered().with_fill(&c.background),
    );
    svg.end_group();

    svg.build()
}

/// Spotlit product name and price over a device placeholder
pub(super) fn pricing(palette: &Palette) -> String {
    let c = &palette.colors;
    let mut svg = SvgBuilder::new(palette);

    let spotlight = svg.add_gradient(
        &Gradient::radial("spotlightGrad", 50.0, 40.0)
            .with_stop(0.0, &c.accent_blue, 0.3)
            .with_stop(100.0, &c.background, 0.0),
    );
    svg.add_ellipse(
        canvas::center().offset(0.0, -100.0),
        600.0,
        400.0,
        &Paint::fill(spotlight),
    );

    svg.start_group(Point::new(WIDTH / 2.0, 250.0));
    svg.add_text(
        "MacBook Pro",
        Point::new(0.0, 0.0),
        &TextStyle::new(64.0, 600).centered(),
    );
    svg.add_text(
        "14-inch",
        Point::new(0.0, 100.0),
        &TextStyle::new(48.0, 400).centered().with_fill(&c.text_muted),
    );
    svg.add_text(
        "$1,599",
        Point::new(0.0, 200.0),
        &TextStyle::new(96.0, 700).centered(),
    );
    svg.end_group();

    svg.add_comment("Device placeholder");
    svg.add_rect(
        BoundingBox::new(WIDTH / 2.0 - 250.0, 600.0, 500.0, 320.0),
        20.0,
        &Paint::fill(&c.surface).with_opacity(0.5),
    );

    svg.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hero_title_is_text_only() {
        let svg = hero_title(&Palette::default());
        assert_eq!(svg.matches("<text").count(), 2);
        assert_eq!(svg.matches(r#"text-anchor="middle""#).count(), 2);
        // Only the background rect from the preamble
        assert_eq!(svg.matches("<rect").count(), 1);
        assert!(!svg.contains("<circle"));
        assert!(!svg.contains("<line"));
        assert!(!svg.contains("<path"));
    }

    #[test]
    fn test_bars_scale_with_score() {
        let svg = benchmark_bars(&Palette::default());
        assert!(svg.contains(r#"width="1000" height="100""#));
        assert!(svg.contains(r#"width="700" height="100""#));
        assert!(svg.contains(r#"width="500" height="100""#));
        assert!(svg.contains(r#"<text x="920" y="60" text-anchor="end""#));
    }

    #[test]
    fn test_product_highlights_has_six_tiles() {
        let svg = product_highlights(&Palette::default());
        assert_eq!(svg.matches(r#"width="280" height="140""#).count(), 6);
        assert!(svg.contains("translate(1420, 810)"));
    }

    #[test]
    fn test_pricing_references_its_gradient() {
        let svg = pricing(&Palette::default());
        assert!(svg.contains(r#"<radialGradient id="spotlightGrad""#));
        assert!(svg.contains(r#"fill="url(#spotlightGrad)""#));
    }

    #[test]
    fn test_battery_text_uses_background_color() {
        let svg = battery(&Palette::default());
        assert!(svg.contains(r##"fill="#000000">24 hrs</text>"##));
    }
}
