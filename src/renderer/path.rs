//! Arc path construction for pie wedges and ring gauges
//!
//! Converts angular spans into SVG path `d` attribute strings. Angles
//! follow [`crate::layout::polar`]: degrees, clockwise from 12 o'clock.

use crate::layout::{polar_point, Point};

/// A segment in a resolved path
#[derive(Debug, Clone, PartialEq)]
pub enum PathSegment {
    /// Move to starting point
    MoveTo(Point),
    /// Straight line to point
    LineTo(Point),
    /// Circular arc to point
    ArcTo {
        end: Point,
        radius: f64,
        large_arc: bool,
        sweep: bool, // true = clockwise in SVG coordinates (y-down)
    },
    /// Close path back to start
    Close,
}

/// A resolved path ready for SVG rendering
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResolvedPath {
    pub segments: Vec<PathSegment>,
}

impl ResolvedPath {
    /// Convert to SVG path `d` attribute string
    pub fn to_svg_d(&self) -> String {
        if self.segments.is_empty() {
            return String::new();
        }

        let mut d = String::new();

        for seg in &self.segments {
            if !d.is_empty() {
                d.push(' ');
            }
            match seg {
                PathSegment::MoveTo(p) => {
                    d.push_str(&format!("M{:.2} {:.2}", p.x, p.y));
                }
                PathSegment::LineTo(p) => {
                    d.push_str(&format!("L{:.2} {:.2}", p.x, p.y));
                }
                PathSegment::ArcTo {
                    end,
                    radius,
                    large_arc,
                    sweep,
                } => {
                    let large = if *large_arc { 1 } else { 0 };
                    let sw = if *sweep { 1 } else { 0 };
                    // A rx ry x-axis-rotation large-arc-flag sweep-flag x y
                    d.push_str(&format!(
                        "A{:.2} {:.2} 0 {} {} {:.2} {:.2}",
                        radius, radius, large, sw, end.x, end.y
                    ));
                }
                PathSegment::Close => {
                    d.push('Z');
                }
            }
        }

        d
    }
}

/// Whether an arc spanning `span_degrees` needs the SVG large-arc flag
pub fn large_arc_flag(span_degrees: f64) -> bool {
    span_degrees > 180.0
}

/// Clockwise arc segments from `start_degrees` over `span_degrees`
///
/// A span of a full turn or more cannot be expressed as a single SVG arc
/// (start and end coincide), so it is split into two half turns.
fn arc_segments(center: Point, radius: f64, start_degrees: f64, span_degrees: f64) -> Vec<PathSegment> {
    if span_degrees >= 360.0 {
        let half = polar_point(center, radius, start_degrees + 180.0);
        let start = polar_point(center, radius, start_degrees);
        return vec![
            PathSegment::ArcTo {
                end: half,
                radius,
                large_arc: false,
                sweep: true,
            },
            PathSegment::ArcTo {
                end: start,
                radius,
                large_arc: false,
                sweep: true,
            },
        ];
    }
    vec![PathSegment::ArcTo {
        end: polar_point(center, radius, start_degrees + span_degrees),
        radius,
        large_arc: large_arc_flag(span_degrees),
        sweep: true,
    }]
}

/// An open arc along a circle, used for ring gauges
pub fn arc_path(center: Point, radius: f64, start_degrees: f64, span_degrees: f64) -> ResolvedPath {
    let mut segments = vec![PathSegment::MoveTo(polar_point(
        center,
        radius,
        start_degrees,
    ))];
    segments.extend(arc_segments(center, radius, start_degrees, span_degrees));
    ResolvedPath { segments }
}

/// One slice of a pie chart
#[derive(Debug, Clone, PartialEq)]
pub struct PieWedge {
    pub center: Point,
    pub radius: f64,
    pub start_degrees: f64,
    pub span_degrees: f64,
    /// Point on the circle where the wedge starts
    pub start: Point,
    /// Point on the circle where the wedge ends
    pub end: Point,
    pub large_arc: bool,
}

impl PieWedge {
    /// Closed wedge path: center, out to the start, around, and back
    pub fn to_path(&self) -> ResolvedPath {
        if self.span_degrees >= 360.0 {
            let mut segments = vec![PathSegment::MoveTo(self.start)];
            segments.extend(arc_segments(
                self.center,
                self.radius,
                self.start_degrees,
                self.span_degrees,
            ));
            segments.push(PathSegment::Close);
            return ResolvedPath { segments };
        }
        ResolvedPath {
            segments: vec![
                PathSegment::MoveTo(self.center),
                PathSegment::LineTo(self.start),
                PathSegment::ArcTo {
                    end: self.end,
                    radius: self.radius,
                    large_arc: self.large_arc,
                    sweep: true,
                },
                PathSegment::Close,
            ],
        }
    }
}

/// Split a circle into wedges proportional to `percentages`
///
/// Each wedge spans `p / 100 * 360` degrees and starts where the previous
/// one ended, beginning at 12 o'clock.
pub fn pie_wedges(center: Point, radius: f64, percentages: &[f64]) -> Vec<PieWedge> {
    let mut start_degrees = 0.0;
    percentages
        .iter()
        .map(|percent| {
            let span_degrees = percent / 100.0 * 360.0;
            let end_degrees = start_degrees + span_degrees;
            let wedge = PieWedge {
                center,
                radius,
                start_degrees,
                span_degrees,
                start: polar_point(center, radius, start_degrees),
                end: polar_point(center, radius, end_degrees),
                large_arc: large_arc_flag(span_degrees),
            };
            start_degrees = end_degrees;
            wedge
        })
        .collect()
}
