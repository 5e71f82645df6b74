use super::point::Point;

/// Compass heading of the snake, cyclically ordered Up -> Right -> Down -> Left
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// One step forward in the cycle (index + 1 mod 4)
    pub fn turned_left(&self) -> Direction {
        match self {
            Direction::Up => Direction::Right,
            Direction::Right => Direction::Down,
            Direction::Down => Direction::Left,
            Direction::Left => Direction::Up,
        }
    }

    /// One step back in the cycle (index - 1 mod 4, wrapping)
    pub fn turned_right(&self) -> Direction {
        match self {
            Direction::Up => Direction::Left,
            Direction::Left => Direction::Down,
            Direction::Down => Direction::Right,
            Direction::Right => Direction::Up,
        }
    }

    /// Unit grid delta for moving in this direction
    pub fn delta(&self) -> Point {
        match self {
            Direction::Up => Point::new(0, 1),
            Direction::Right => Point::new(1, 0),
            Direction::Down => Point::new(0, -1),
            Direction::Left => Point::new(-1, 0),
        }
    }

    /// Heading for a unit delta, used for segment orientation hints
    pub fn from_delta(delta: Point) -> Option<Direction> {
        match (delta.x, delta.y) {
            (0, 1) => Some(Direction::Up),
            (1, 0) => Some(Direction::Right),
            (0, -1) => Some(Direction::Down),
            (-1, 0) => Some(Direction::Left),
            _ => None,
        }
    }
}

/// A relative turn intent, buffered until the next tick's move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Left,
    Right,
}

impl Turn {
    pub fn apply(&self, direction: Direction) -> Direction {
        match self {
            Turn::Left => direction.turned_left(),
            Turn::Right => direction.turned_right(),
        }
    }
}
