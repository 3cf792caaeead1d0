//! Polar placement for pie, cycle, and triangle layouts
//!
//! Angles are in degrees, measured clockwise from 12 o'clock. With the
//! canvas y axis pointing down this means 90° is 3 o'clock and 180° is
//! 6 o'clock.

use super::types::Point;

/// Point on a circle at the given angle
pub fn polar_point(center: Point, radius: f64, degrees: f64) -> Point {
    let theta = (degrees - 90.0).to_radians();
    Point::new(
        center.x + radius * theta.cos(),
        center.y + radius * theta.sin(),
    )
}

/// `count` points evenly spaced around a circle, starting at `start_degrees`
pub fn ring_points(center: Point, radius: f64, count: usize, start_degrees: f64) -> Vec<Point> {
    if count == 0 {
        return vec![];
    }
    let step = 360.0 / count as f64;
    (0..count)
        .map(|i| polar_point(center, radius, start_degrees + step * i as f64))
        .collect()
}
