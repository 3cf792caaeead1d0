//! SVG document assembly

use crate::canvas;
use crate::layout::{BoundingBox, Point};
use crate::palette::Palette;

use super::path::ResolvedPath;
use super::style::{Gradient, Paint, TextAnchor, TextStyle};

/// Opening markup shared by every slide
///
/// XML declaration, the 1920x1080 root element, an embedded style block
/// importing the web font, and the full-canvas background.
pub fn document_preamble(palette: &Palette) -> String {
    let w = fmt_num(canvas::WIDTH);
    let h = fmt_num(canvas::HEIGHT);
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<svg width="{w}" height="{h}" viewBox="0 0 {w} {h}" xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink">
  <defs>
    <style>
      @import url('{font_url}');
      text {{
        font-family: {font_stack};
        fill: {text};
      }}
    </style>
  </defs>
  <rect width="{w}" height="{h}" fill="{background}"/>
"#,
        font_url = canvas::FONT_IMPORT_URL,
        font_stack = canvas::FONT_STACK,
        text = palette.colors.text,
        background = palette.colors.background,
    )
}

/// Closing markup shared by every slide
pub fn document_postamble() -> &'static str {
    "</svg>\n"
}

/// Build a slide document incrementally
///
/// Gradients land in their own `<defs>` block right after the preamble;
/// everything else is emitted in insertion order, so later primitives
/// paint over earlier ones.
pub struct SvgBuilder<'a> {
    palette: &'a Palette,
    defs: Vec<String>,
    elements: Vec<String>,
    indent: usize,
}

impl<'a> SvgBuilder<'a> {
    /// Create a new builder drawing with the given palette
    pub fn new(palette: &'a Palette) -> Self {
        Self {
            palette,
            defs: vec![],
            elements: vec![],
            indent: 1,
        }
    }

    /// The palette this builder draws with
    pub fn palette(&self) -> &'a Palette {
        self.palette
    }

    fn indent_str(&self) -> String {
        "  ".repeat(self.indent)
    }

    fn push(&mut self, element: String) {
        let line = format!("{}{}", self.indent_str(), element);
        self.elements.push(line);
    }

    /// Declare a gradient and return its `url(#id)` reference
    pub fn add_gradient(&mut self, gradient: &Gradient) -> String {
        self.defs.push(gradient.to_svg("    "));
        gradient.url()
    }

    /// Add a rectangle; a zero radius omits `rx`
    pub fn add_rect(&mut self, bounds: BoundingBox, rx: f64, paint: &Paint) {
        let rx_attr = if rx > 0.0 {
            format!(r#" rx="{}""#, fmt_num(rx))
        } else {
            String::new()
        };
        self.push(format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}"{}{}/>"#,
            fmt_num(bounds.x),
            fmt_num(bounds.y),
            fmt_num(bounds.width),
            fmt_num(bounds.height),
            rx_attr,
            paint.to_attrs()
        ));
    }

    /// Add a circle element
    pub fn add_circle(&mut self, center: Point, r: f64, paint: &Paint) {
        self.push(format!(
            r#"<circle cx="{}" cy="{}" r="{}"{}/>"#,
            fmt_num(center.x),
            fmt_num(center.y),
            fmt_num(r),
            paint.to_attrs()
        ));
    }

    /// Add an ellipse element
    pub fn add_ellipse(&mut self, center: Point, rx: f64, ry: f64, paint: &Paint) {
        self.push(format!(
            r#"<ellipse cx="{}" cy="{}" rx="{}" ry="{}"{}/>"#,
            fmt_num(center.x),
            fmt_num(center.y),
            fmt_num(rx),
            fmt_num(ry),
            paint.to_attrs()
        ));
    }

    /// Add a line element
    pub fn add_line(&mut self, from: Point, to: Point, paint: &Paint) {
        self.push(format!(
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}"{}/>"#,
            fmt_num(from.x),
            fmt_num(from.y),
            fmt_num(to.x),
            fmt_num(to.y),
            paint.to_attrs()
        ));
    }

    /// Add a path element
    pub fn add_path(&mut self, path: &ResolvedPath, paint: &Paint) {
        self.push(format!(
            r#"<path d="{}"{}/>"#,
            path.to_svg_d(),
            paint.to_attrs()
        ));
    }

    /// Add a single-line text element
    pub fn add_text(&mut self, content: &str, at: Point, style: &TextStyle) {
        self.push(format!(
            r#"<text x="{}" y="{}"{}>{}</text>"#,
            fmt_num(at.x),
            fmt_num(at.y),
            style.to_attrs(),
            escape_xml(content)
        ));
    }

    /// Add a multi-line text element, one `tspan` per line
    pub fn add_text_lines(&mut self, lines: &[&str], at: Point, line_height: f64, style: &TextStyle) {
        let x = fmt_num(at.x);
        self.push(format!(
            r#"<text x="{}" y="{}"{}>"#,
            x,
            fmt_num(at.y),
            style.to_attrs()
        ));
        self.indent += 1;
        for (i, line) in lines.iter().enumerate() {
            let dy = if i == 0 { 0.0 } else { line_height };
            self.push(format!(
                r#"<tspan x="{}" dy="{}">{}</tspan>"#,
                x,
                fmt_num(dy),
                escape_xml(line)
            ));
        }
        self.indent -= 1;
        self.push("</text>".to_string());
    }

    /// Add a text element made of separately styled runs
    ///
    /// Each run is `(text, dy, style)`. Runs take their size, weight, and
    /// fill from `style`; position and anchor belong to the element.
    pub fn add_text_runs(&mut self, at: Point, anchor: TextAnchor, runs: &[(&str, f64, TextStyle)]) {
        let x = fmt_num(at.x);
        self.push(format!(
            r#"<text x="{}" y="{}" text-anchor="{}">"#,
            x,
            fmt_num(at.y),
            anchor.as_str()
        ));
        self.indent += 1;
        for (text, dy, style) in runs {
            let mut attrs = format!(
                r#" font-size="{}" font-weight="{}""#,
                fmt_num(style.font_size),
                style.font_weight
            );
            if let Some(fill) = &style.fill {
                attrs.push_str(&format!(r#" fill="{}""#, fill));
            }
            self.push(format!(
                r#"<tspan x="{}" dy="{}"{}>{}</tspan>"#,
                x,
                fmt_num(*dy),
                attrs,
                escape_xml(text)
            ));
        }
        self.indent -= 1;
        self.push("</text>".to_string());
    }

    /// Add a comment naming the part of the slide that follows
    pub fn add_comment(&mut self, text: &str) {
        self.push(format!("<!-- {} -->", text.replace("--", "- -")));
    }

    /// Open a group translated to `origin`
    pub fn start_group(&mut self, origin: Point) {
        self.push(format!(
            r#"<g transform="translate({}, {})">"#,
            fmt_num(origin.x),
            fmt_num(origin.y)
        ));
        self.indent += 1;
    }

    /// Close a group element
    pub fn end_group(&mut self) {
        self.indent = self.indent.saturating_sub(1);
        self.push("</g>".to_string());
    }

    /// Build the final SVG string
    pub fn build(self) -> String {
        let mut svg = document_preamble(self.palette);

        if !self.defs.is_empty() {
            svg.push_str("  <defs>\n");
            for def in &self.defs {
                svg.push_str(def);
                svg.push('\n');
            }
            svg.push_str("  </defs>\n");
        }

        for elem in &self.elements {
            svg.push_str(elem);
            svg.push('\n');
        }

        svg.push_str(document_postamble());
        svg
    }
}

/// Format a coordinate: at most two decimals, no trailing zeros
pub fn fmt_num(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    // Avoid "-0"
    if rounded == 0.0 {
        return "0".to_string();
    }
    format!("{}", rounded)
}

/// Escape special XML characters
pub fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
