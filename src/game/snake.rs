use super::direction::{Direction, Turn};
use super::point::Point;

/// The snake's body and movement state machine.
///
/// The body is head-first. Turn intents are buffered (last write wins)
/// and applied at the start of the next `advance`. The tail cell dropped
/// by the most recent `advance` is retained so `grow` can re-append it.
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body cells, head at index 0, tail last. Never empty.
    pub body: Vec<Point>,
    /// Heading applied on the next advance
    pub direction: Direction,
    pending_turn: Option<Turn>,
    last_removed_tail: Option<Point>,
}

impl Snake {
    /// Canonical starting snake: a vertical line of `length` cells with
    /// the head at the origin, heading Down.
    pub fn new(length: usize) -> Self {
        let length = length.max(1);
        Self {
            body: (0..length as i32).map(|y| Point::new(0, y)).collect(),
            direction: Direction::Down,
            pending_turn: None,
            last_removed_tail: None,
        }
    }

    pub fn reset(&mut self, length: usize) {
        *self = Snake::new(length);
    }

    pub fn head(&self) -> Point {
        self.body[0]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Buffer a left turn for the next advance. A second intent within
    /// the same tick overwrites the first.
    pub fn turn_left(&mut self) {
        self.pending_turn = Some(Turn::Left);
    }

    /// Buffer a right turn for the next advance
    pub fn turn_right(&mut self) {
        self.pending_turn = Some(Turn::Right);
    }

    /// The heading the next advance will use, with any buffered turn applied
    pub fn next_direction(&self) -> Direction {
        match self.pending_turn {
            Some(turn) => turn.apply(self.direction),
            None => self.direction,
        }
    }

    /// The head cell the next advance would produce
    pub fn next_head(&self) -> Point {
        self.head().offset(self.next_direction().delta())
    }

    /// True if the next advance keeps the head within `[-bound, bound]`
    /// on both axes. Evaluated before the move is committed so an
    /// out-of-bounds segment never enters the body.
    pub fn can_advance(&self, bound: i32) -> bool {
        self.next_head().within_bound(bound)
    }

    /// Commit one move: apply the buffered turn, prepend the new head,
    /// drop the tail. Body length is unchanged; the dropped tail is kept
    /// for a following `grow`.
    pub fn advance(&mut self) {
        self.direction = self.next_direction();
        self.pending_turn = None;

        let new_head = self.head().offset(self.direction.delta());
        self.last_removed_tail = self.body.pop();
        self.body.insert(0, new_head);
    }

    /// Re-append the tail cell dropped by the last advance. A no-op when
    /// no advance happened since the previous grow.
    pub fn grow(&mut self) {
        if let Some(tail) = self.last_removed_tail.take() {
            self.body.push(tail);
        }
    }

    /// True iff a non-head body cell occupies the head's position
    pub fn ate_itself(&self) -> bool {
        let head = self.head();
        self.body[1..].contains(&head)
    }

    /// The tail cell removed by the most recent advance, if not yet
    /// consumed by `grow`
    pub fn last_removed_tail(&self) -> Option<Point> {
        self.last_removed_tail
    }

    /// Heading hint for the tail segment: the direction from the tail
    /// toward its neighbor. None for a single-cell body.
    pub fn tail_heading(&self) -> Option<Direction> {
        if self.body.len() < 2 {
            return None;
        }
        let tail = self.body[self.body.len() - 1];
        let before_tail = self.body[self.body.len() - 2];
        Direction::from_delta(before_tail.delta_from(tail))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_reset() {
        let snake = Snake::new(4);
        assert_eq!(
            snake.body,
            vec![
                Point::new(0, 0),
                Point::new(0, 1),
                Point::new(0, 2),
                Point::new(0, 3),
            ]
        );
        assert_eq!(snake.direction, Direction::Down);
        assert_eq!(snake.last_removed_tail(), None);
        assert!(!snake.ate_itself());
    }

    #[test]
    fn test_advance_keeps_length_and_saves_tail() {
        let mut snake = Snake::new(4);
        let old_tail = Point::new(0, 3);

        snake.advance();

        assert_eq!(snake.len(), 4);
        assert_eq!(snake.head(), Point::new(0, -1));
        assert_eq!(
            snake.body,
            vec![
                Point::new(0, -1),
                Point::new(0, 0),
                Point::new(0, 1),
                Point::new(0, 2),
            ]
        );
        assert_eq!(snake.last_removed_tail(), Some(old_tail));
    }

    #[test]
    fn test_grow_restores_removed_tail() {
        let mut snake = Snake::new(4);
        snake.advance();
        snake.grow();

        assert_eq!(snake.len(), 5);
        assert_eq!(*snake.body.last().unwrap(), Point::new(0, 3));
        assert_eq!(snake.last_removed_tail(), None);
    }

    #[test]
    fn test_grow_without_advance_is_noop() {
        let mut snake = Snake::new(4);
        snake.grow();
        assert_eq!(snake.len(), 4);

        // A second grow without an intervening advance is also a no-op
        snake.advance();
        snake.grow();
        snake.grow();
        assert_eq!(snake.len(), 5);
    }

    #[test]
    fn test_buffered_turn_applies_on_advance() {
        let mut snake = Snake::new(4);
        snake.turn_left();
        assert_eq!(snake.direction, Direction::Down);

        snake.advance();
        assert_eq!(snake.direction, Direction::Left);
        assert_eq!(snake.head(), Point::new(-1, 0));
    }

    #[test]
    fn test_last_turn_intent_wins() {
        let mut snake = Snake::new(4);
        snake.turn_left();
        snake.turn_right();
        snake.advance();

        // Down turned right steps back through the cycle to Right
        assert_eq!(snake.direction, Direction::Right);
        assert_eq!(snake.head(), Point::new(1, 0));
    }

    #[test]
    fn test_turn_buffer_clears_after_advance() {
        let mut snake = Snake::new(4);
        snake.turn_left();
        snake.advance();
        snake.advance();
        // Only one turn applied, then straight ahead
        assert_eq!(snake.direction, Direction::Left);
        assert_eq!(snake.head(), Point::new(-2, 0));
    }

    #[test]
    fn test_can_advance_boundary() {
        let mut snake = Snake::new(4);
        assert!(snake.can_advance(7));

        // Head at (7, 0) heading Right would exit the grid
        snake.body = vec![
            Point::new(7, 0),
            Point::new(6, 0),
            Point::new(5, 0),
            Point::new(4, 0),
        ];
        snake.direction = Direction::Right;
        assert!(!snake.can_advance(7));

        // Turning away from the wall makes the move legal again
        snake.turn_left();
        assert!(snake.can_advance(7));
    }

    #[test]
    fn test_ate_itself_on_overlap() {
        let mut snake = Snake::new(4);
        snake.body = vec![
            Point::new(0, 0),
            Point::new(1, 0),
            Point::new(2, 0),
            Point::new(0, 0),
        ];
        assert!(snake.ate_itself());
    }

    #[test]
    fn test_square_walk_self_collision() {
        // Grow to 5 cells, then walk a tight square until the head
        // re-enters the body.
        let mut snake = Snake::new(5);
        snake.advance(); // head (0,-1)
        snake.turn_left(); // heading Left next
        snake.advance(); // head (-1,-1)
        snake.turn_left(); // cyclic: Left -> Up
        snake.advance(); // head (-1,0)
        snake.turn_left(); // Up -> Right
        snake.advance(); // head (0,0), occupied by the body
        assert!(snake.ate_itself());
    }
}
