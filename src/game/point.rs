/// A cell on the game grid, also used for direction deltas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Translate this point by a delta
    pub fn offset(&self, delta: Point) -> Self {
        Self {
            x: self.x + delta.x,
            y: self.y + delta.y,
        }
    }

    /// Vector from `other` to this point
    pub fn delta_from(&self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// True if both coordinates lie within `[-bound, bound]`
    pub fn within_bound(&self, bound: i32) -> bool {
        self.x.abs() <= bound && self.y.abs() <= bound
    }
}
