//! Structural checks on every rendered slide, through a real XML parser

use roxmltree::{Document, Node};

use slide_mockups::{render_slide, Palette, SlideCategory, SLIDE_COUNT};

fn elements<'a, 'input>(doc: &'a Document<'input>, tag: &str) -> Vec<Node<'a, 'input>> {
    doc.descendants()
        .filter(|n| n.is_element() && n.tag_name().name() == tag)
        .collect()
}

/// Elements outside `<defs>`, the background rect included
fn drawn<'a, 'input>(doc: &'a Document<'input>, tag: &str) -> Vec<Node<'a, 'input>> {
    elements(doc, tag)
        .into_iter()
        .filter(|n| !n.ancestors().any(|a| a.tag_name().name() == "defs"))
        .collect()
}

#[test]
fn test_every_slide_parses_with_canvas_root() {
    let palette = Palette::default();
    for index in (0..=SLIDE_COUNT + 1).chain([1000]) {
        let svg = render_slide(index, &palette);
        let doc = Document::parse(&svg)
            .unwrap_or_else(|e| panic!("slide {} is not well-formed: {}", index, e));
        let root = doc.root_element();

        assert_eq!(root.tag_name().name(), "svg");
        assert_eq!(root.tag_name().namespace(), Some("http://www.w3.org/2000/svg"));
        assert_eq!(root.attribute("width"), Some("1920"));
        assert_eq!(root.attribute("height"), Some("1080"));
        assert_eq!(root.attribute("viewBox"), Some("0 0 1920 1080"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }
}

#[test]
fn test_first_drawn_element_is_full_background() {
    let palette = Palette::default();
    for index in 1..=SLIDE_COUNT {
        let svg = render_slide(index, &palette);
        let doc = Document::parse(&svg).unwrap();
        let background = drawn(&doc, "rect").into_iter().next().unwrap();
        assert_eq!(background.attribute("width"), Some("1920"));
        assert_eq!(background.attribute("height"), Some("1080"));
        assert_eq!(background.attribute("fill"), Some("#000000"));
    }
}

#[test]
fn test_gradient_references_resolve_in_same_file() {
    let palette = Palette::default();
    for index in 1..=SLIDE_COUNT {
        let svg = render_slide(index, &palette);
        let doc = Document::parse(&svg).unwrap();
        for node in doc.descendants().filter(|n| n.is_element()) {
            let Some(fill) = node.attribute("fill") else {
                continue;
            };
            if let Some(id) = fill.strip_prefix("url(#").and_then(|s| s.strip_suffix(')')) {
                let defined = doc
                    .descendants()
                    .any(|n| n.attribute("id") == Some(id));
                assert!(defined, "slide {} references undefined #{}", index, id);
            }
        }
    }
}

#[test]
fn test_hero_title_is_two_centered_texts() {
    let svg = render_slide(SlideCategory::HeroTitle.index(), &Palette::default());
    let doc = Document::parse(&svg).unwrap();

    let texts = drawn(&doc, "text");
    assert_eq!(texts.len(), 2);
    assert!(texts
        .iter()
        .all(|t| t.attribute("text-anchor") == Some("middle")));
    // Only the background
    assert_eq!(drawn(&doc, "rect").len(), 1);
    for shape in ["circle", "ellipse", "line", "path"] {
        assert!(drawn(&doc, shape).is_empty(), "hero title draws a {}", shape);
    }
}

#[test]
fn test_timeline_nodes_and_labels() {
    let svg = render_slide(SlideCategory::Timeline.index(), &Palette::default());
    let doc = Document::parse(&svg).unwrap();

    let lines = drawn(&doc, "line");
    assert_eq!(lines.len(), 1);
    let circles = drawn(&doc, "circle");
    assert_eq!(circles.len(), 5);
    let labels = drawn(&doc, "text");
    assert_eq!(labels.len(), 5);

    let x1: f64 = lines[0].attribute("x1").unwrap().parse().unwrap();
    let x2: f64 = lines[0].attribute("x2").unwrap().parse().unwrap();
    let xs: Vec<f64> = circles
        .iter()
        .map(|c| c.attribute("cx").unwrap().parse().unwrap())
        .collect();

    assert_eq!(xs.first(), Some(&x1));
    assert_eq!(xs.last(), Some(&x2));
    let step = (x2 - x1) / 4.0;
    for (i, x) in xs.iter().enumerate() {
        assert!((x - (x1 + step * i as f64)).abs() < 0.01);
    }

    for (label, x) in labels.iter().zip(&xs) {
        let label_x: f64 = label.attribute("x").unwrap().parse().unwrap();
        assert_eq!(label_x, *x);
        let runs: Vec<_> = label.children().filter(|n| n.is_element()).collect();
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[1].text(), Some("Milestone"));
    }
}

#[test]
fn test_pie_chart_draws_four_wedges() {
    let svg = render_slide(SlideCategory::PieChart.index(), &Palette::default());
    let doc = Document::parse(&svg).unwrap();

    let wedges = drawn(&doc, "path");
    assert_eq!(wedges.len(), 4);
    let fills: Vec<_> = wedges.iter().map(|w| w.attribute("fill").unwrap()).collect();
    assert_eq!(fills, ["#0A84FF", "#30D158", "#8B5CF6", "#FF9F0A"]);
    // No share exceeds half the circle
    assert!(wedges
        .iter()
        .all(|w| w.attribute("d").unwrap().contains(" 0 0 1 ")));
}

#[test]
fn test_placeholder_for_unmapped_index() {
    let svg = render_slide(33, &Palette::default());
    let doc = Document::parse(&svg).unwrap();

    let texts: Vec<_> = drawn(&doc, "text")
        .iter()
        .filter_map(|t| t.text())
        .collect();
    assert_eq!(texts, ["Slide 033", "Slide 33"]);
}
