//! Core geometry types for slide composition

/// A 2D point in canvas coordinates (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Offset this point by the given deltas
    pub fn offset(&self, dx: f64, dy: f64) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }

    /// Euclidean distance to another point
    pub fn distance_to(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Axis along which a box is divided
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Horizontal,
    Vertical,
}

/// A bounding box representing the spatial extent of an element
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a box of the given size centered on a point
    pub fn centered_at(center: Point, width: f64, height: f64) -> Self {
        Self::new(center.x - width / 2.0, center.y - height / 2.0, width, height)
    }

    /// Top-left corner
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Right edge x-coordinate
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge y-coordinate
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Center point of the bounding box
    pub fn center(&self) -> Point {
        Point {
            x: self.x + self.width / 2.0,
            y: self.y + self.height / 2.0,
        }
    }

    /// Shrink the box by `amount` on every side
    pub fn inset(&self, amount: f64) -> BoundingBox {
        BoundingBox::new(
            self.x + amount,
            self.y + amount,
            (self.width - 2.0 * amount).max(0.0),
            (self.height - 2.0 * amount).max(0.0),
        )
    }

    /// Divide the box into `count` equal pieces separated by `gap`
    ///
    /// Pieces run left to right for [`Direction::Horizontal`] and top to
    /// bottom for [`Direction::Vertical`]. A count of zero yields no pieces.
    pub fn split(&self, count: usize, gap: f64, direction: Direction) -> Vec<BoundingBox> {
        if count == 0 {
            return vec![];
        }
        let total_gap = gap * (count - 1) as f64;
        match direction {
            Direction::Horizontal => {
                let width = (self.width - total_gap) / count as f64;
                (0..count)
                    .map(|i| {
                        BoundingBox::new(
                            self.x + i as f64 * (width + gap),
                            self.y,
                            width,
                            self.height,
                        )
                    })
                    .collect()
            }
            Direction::Vertical => {
                let height = (self.height - total_gap) / count as f64;
                (0..count)
                    .map(|i| {
                        BoundingBox::new(
                            self.x,
                            self.y + i as f64 * (height + gap),
                            self.width,
                            height,
                        )
                    })
                    .collect()
            }
        }
    }

    /// Divide the box into a `rows` x `cols` grid, row by row
    pub fn grid(&self, rows: usize, cols: usize, gap: f64) -> Vec<BoundingBox> {
        self.split(rows, gap, Direction::Vertical)
            .iter()
            .flat_map(|row| row.split(cols, gap, Direction::Horizontal))
            .collect()
    }
}

/// Evenly spaced positions from `start` to `end` inclusive
///
/// A single position sits at `start`; zero positions yield an empty list.
pub fn evenly_spaced(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => vec![],
        1 => vec![start],
        _ => {
            let step = (end - start) / (count - 1) as f64;
            (0..count).map(|i| start + step * i as f64).collect()
        }
    }
}
