//! Read-only snapshot of a session for render collaborators.
//!
//! The simulation stays plain data; whatever draws it (here, the
//! terminal renderer) takes a [`SceneView`] after each tick instead of
//! reaching into the model.

use crate::game::{Direction, GameState, Point};

/// Role of one body cell within the snake
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    Head,
    Body,
    Tail,
}

/// One renderable body cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentView {
    pub pos: Point,
    pub kind: SegmentKind,
    /// Orientation hint: the head faces the current travel direction,
    /// the tail faces its neighboring segment. Plain body cells carry
    /// no hint.
    pub heading: Option<Direction>,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct SceneView {
    /// Segments in body order, head first
    pub segments: Vec<SegmentView>,
    pub food: Point,
    pub score: u32,
    pub game_over: bool,
    pub bound: i32,
}

impl SceneView {
    pub fn of(state: &GameState) -> Self {
        let last = state.snake.len() - 1;
        let segments = state
            .snake
            .body
            .iter()
            .enumerate()
            .map(|(i, &pos)| {
                let (kind, heading) = if i == 0 {
                    (SegmentKind::Head, Some(state.snake.direction))
                } else if i == last {
                    (SegmentKind::Tail, state.snake.tail_heading())
                } else {
                    (SegmentKind::Body, None)
                };
                SegmentView { pos, kind, heading }
            })
            .collect();

        Self {
            segments,
            food: state.food,
            score: state.score,
            game_over: state.is_over,
            bound: state.bound,
        }
    }

    /// The segment occupying `pos`, head winning on transient overlap
    pub fn segment_at(&self, pos: Point) -> Option<&SegmentView> {
        self.segments.iter().find(|s| s.pos == pos)
    }
}
