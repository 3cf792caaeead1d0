//! Presentation attributes for shapes, text, and gradients

use super::svg::fmt_num;

/// Fill, stroke, and opacity attributes for a shape
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Paint {
    pub fill: Option<String>,
    pub stroke: Option<String>,
    pub stroke_width: Option<f64>,
    pub opacity: Option<f64>,
}

impl Paint {
    /// Solid fill, no stroke
    pub fn fill(color: impl Into<String>) -> Self {
        Self {
            fill: Some(color.into()),
            ..Self::default()
        }
    }

    /// Stroke only, with an explicit `fill="none"`
    pub fn outline(color: impl Into<String>, width: f64) -> Self {
        Self::fill("none").with_stroke(color, width)
    }

    /// Stroke without touching fill (for lines)
    pub fn stroke(color: impl Into<String>, width: f64) -> Self {
        Self::default().with_stroke(color, width)
    }

    pub fn with_stroke(mut self, color: impl Into<String>, width: f64) -> Self {
        self.stroke = Some(color.into());
        self.stroke_width = Some(width);
        self
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }

    /// Format as SVG attributes, each with a leading space
    pub fn to_attrs(&self) -> String {
        let mut parts = vec![];
        if let Some(fill) = &self.fill {
            parts.push(format!(r#" fill="{}""#, fill));
        }
        if let Some(stroke) = &self.stroke {
            parts.push(format!(r#" stroke="{}""#, stroke));
        }
        if let Some(sw) = self.stroke_width {
            parts.push(format!(r#" stroke-width="{}""#, fmt_num(sw)));
        }
        if let Some(op) = self.opacity {
            if op < 1.0 {
                parts.push(format!(r#" opacity="{}""#, fmt_num(op)));
            }
        }
        parts.join("")
    }
}

/// Horizontal text alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

impl TextAnchor {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        }
    }
}

/// Font and color attributes for a text element
///
/// Text without an explicit fill inherits the default text color from the
/// document's style block.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub font_size: f64,
    pub font_weight: u16,
    pub fill: Option<String>,
    pub anchor: TextAnchor,
    pub opacity: Option<f64>,
}

impl TextStyle {
    pub fn new(font_size: f64, font_weight: u16) -> Self {
        Self {
            font_size,
            font_weight,
            fill: None,
            anchor: TextAnchor::Start,
            opacity: None,
        }
    }

    pub fn centered(mut self) -> Self {
        self.anchor = TextAnchor::Middle;
        self
    }

    pub fn end(mut self) -> Self {
        self.anchor = TextAnchor::End;
        self
    }

    pub fn with_fill(mut self, color: impl Into<String>) -> Self {
        self.fill = Some(color.into());
        self
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }

    /// Format as SVG attributes, each with a leading space
    pub fn to_attrs(&self) -> String {
        let mut attrs = String::new();
        if self.anchor != TextAnchor::Start {
            attrs.push_str(&format!(r#" text-anchor="{}""#, self.anchor.as_str()));
        }
        attrs.push_str(&format!(
            r#" font-size="{}" font-weight="{}""#,
            fmt_num(self.font_size),
            self.font_weight
        ));
        if let Some(fill) = &self.fill {
            attrs.push_str(&format!(r#" fill="{}""#, fill));
        }
        if let Some(op) = self.opacity {
            if op < 1.0 {
                attrs.push_str(&format!(r#" opacity="{}""#, fmt_num(op)));
            }
        }
        attrs
    }
}

/// One color stop of a gradient
#[derive(Debug, Clone, PartialEq)]
pub struct GradientStop {
    /// Offset in percent (0-100)
    pub offset: f64,
    pub color: String,
    pub opacity: f64,
}

/// Gradient geometry
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GradientKind {
    /// Diagonal from top-left to bottom-right of the filled shape
    Diagonal,
    /// Radial with its center given in percent of the filled shape
    Radial { cx: f64, cy: f64 },
}

/// A gradient definition referenced by id from the same document
#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    pub id: String,
    pub kind: GradientKind,
    pub stops: Vec<GradientStop>,
}

impl Gradient {
    pub fn diagonal(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: GradientKind::Diagonal,
            stops: vec![],
        }
    }

    pub fn radial(id: impl Into<String>, cx: f64, cy: f64) -> Self {
        Self {
            id: id.into(),
            kind: GradientKind::Radial { cx, cy },
            stops: vec![],
        }
    }

    pub fn with_stop(mut self, offset: f64, color: impl Into<String>, opacity: f64) -> Self {
        self.stops.push(GradientStop {
            offset,
            color: color.into(),
            opacity,
        });
        self
    }

    /// Paint reference for use as a fill
    pub fn url(&self) -> String {
        format!("url(#{})", self.id)
    }

    /// Render the gradient element, one line per stop
    pub fn to_svg(&self, indent: &str) -> String {
        let (tag, open) = match self.kind {
            GradientKind::Diagonal => (
                "linearGradient",
                format!(
                    r#"<linearGradient id="{}" x1="0%" y1="0%" x2="100%" y2="100%">"#,
                    self.id
                ),
            ),
            GradientKind::Radial { cx, cy } => (
                "radialGradient",
                format!(
                    r#"<radialGradient id="{}" cx="{}%" cy="{}%">"#,
                    self.id,
                    fmt_num(cx),
                    fmt_num(cy)
                ),
            ),
        };
        let mut out = format!("{indent}{open}\n");
        for stop in &self.stops {
            out.push_str(&format!(
                r#"{indent}  <stop offset="{}%" stop-color="{}" stop-opacity="{}"/>"#,
                fmt_num(stop.offset),
                stop.color,
                fmt_num(stop.opacity)
            ));
            out.push('\n');
        }
        out.push_str(&format!("{indent}</{tag}>"));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paint_attrs() {
        let paint = Paint::fill("#ff0000")
            .with_stroke("#000000", 2.0)
            .with_opacity(0.5);
        assert_eq!(
            paint.to_attrs(),
            r##" fill="#ff0000" stroke="#000000" stroke-width="2" opacity="0.5""##
        );
    }

    #[test]
    fn test_full_opacity_is_omitted() {
        let paint = Paint::fill("#fff").with_opacity(1.0);
        assert!(!paint.to_attrs().contains("opacity"));
    }

    #[test]
    fn test_outline_has_no_fill() {
        let paint = Paint::outline("#A1A1AA", 3.0);
        assert!(paint.to_attrs().starts_with(r#" fill="none""#));
    }

    #[test]
    fn test_text_style_attrs() {
        let style = TextStyle::new(64.0, 400).centered().with_fill("#A1A1AA");
        assert_eq!(
            style.to_attrs(),
            r##" text-anchor="middle" font-size="64" font-weight="400" fill="#A1A1AA""##
        );
    }

    #[test]
    fn test_start_anchor_is_implicit() {
        let style = TextStyle::new(32.0, 600);
        assert!(!style.to_attrs().contains("text-anchor"));
    }

    #[test]
    fn test_gradient_svg() {
        let g = Gradient::radial("spot", 50.0, 40.0)
            .with_stop(0.0, "#0A84FF", 0.3)
            .with_stop(100.0, "#000000", 0.0);
        let svg = g.to_svg("");
        assert!(svg.starts_with(r#"<radialGradient id="spot" cx="50%" cy="40%">"#));
        assert!(svg.contains(r##"<stop offset="0%" stop-color="#0A84FF" stop-opacity="0.3"/>"##));
        assert!(svg.ends_with("</radialGradient>"));
        assert_eq!(g.url(), "url(#spot)");
    }
}
