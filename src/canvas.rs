//! Canvas constants shared by every slide
//!
//! All mockups are drawn on the same 1920x1080 canvas with the same
//! typography. Nothing here is configurable at runtime.

use crate::layout::{BoundingBox, Point};

/// Canvas width in user units
pub const WIDTH: f64 = 1920.0;

/// Canvas height in user units
pub const HEIGHT: f64 = 1080.0;

/// Corner radius for cards and bars
pub const BORDER_RADIUS: f64 = 24.0;

/// Base spacing unit
pub const SPACING: f64 = 80.0;

/// Web font pulled in by the embedded style block.
/// The ampersand is already escaped for inclusion in XML.
pub const FONT_IMPORT_URL: &str =
    "https://fonts.googleapis.com/css2?family=Inter:wght@300;400;600;700&amp;display=swap";

/// Font stack applied to every text element
pub const FONT_STACK: &str =
    "'Inter', 'SF Pro Display', -apple-system, BlinkMacSystemFont, sans-serif";

/// Center of the canvas
pub fn center() -> Point {
    Point::new(WIDTH / 2.0, HEIGHT / 2.0)
}

/// Full canvas bounds
pub fn bounds() -> BoundingBox {
    BoundingBox::new(0.0, 0.0, WIDTH, HEIGHT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_is_middle_of_bounds() {
        assert_eq!(center(), bounds().center());
        assert_eq!(center(), Point::new(960.0, 540.0));
    }
}
