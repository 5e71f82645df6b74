use rand::rngs::StdRng;
use rand::SeedableRng;

use super::config::GameConfig;
use super::food::{place_food, PlacementError};
use super::point::Point;
use super::snake::Snake;

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionKind {
    /// The next move would have left the playable grid
    OutOfBounds,
    /// The head moved onto another body cell
    SelfCollision,
}

/// What one tick did. The fatal collision of a session shows up in
/// exactly one tick's result; later ticks on a finished session report
/// nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickResult {
    /// Food was eaten and the snake grew this tick
    pub ate_food: bool,
    /// Set on the tick that ended the session
    pub collision: Option<CollisionKind>,
    /// The session is over (this tick or earlier)
    pub game_over: bool,
}

impl TickResult {
    fn running(ate_food: bool) -> Self {
        Self {
            ate_food,
            collision: None,
            game_over: false,
        }
    }

    fn fatal(collision: CollisionKind) -> Self {
        Self {
            ate_food: false,
            collision: Some(collision),
            game_over: true,
        }
    }

    fn idle() -> Self {
        Self {
            ate_food: false,
            collision: None,
            game_over: true,
        }
    }
}

/// Live session state, plain data queried by the render adapter
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Point,
    pub score: u32,
    pub is_over: bool,
    /// Movement boundary the session was created with
    pub bound: i32,
}

/// The simulation core. Owns the configuration and the RNG; the host
/// owns the scheduling and calls `tick` at its own cadence.
pub struct GameEngine {
    config: GameConfig,
    rng: StdRng,
}

impl GameEngine {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            rng: StdRng::from_entropy(),
        }
    }

    /// Engine with a fixed RNG seed, for reproducible sessions
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Fresh session: canonical snake, food placed off the body,
    /// score zero.
    pub fn reset(&mut self) -> Result<GameState, PlacementError> {
        let snake = Snake::new(self.config.initial_length);
        let food = place_food(&mut self.rng, self.config.food_bound, &snake.body)?;

        Ok(GameState {
            snake,
            food,
            score: 0,
            is_over: false,
            bound: self.config.bound,
        })
    }

    /// Advance the session by one step.
    ///
    /// The boundary check gates the move: a move that would exit the
    /// grid is never committed. Self-collision is checked after the move
    /// has been applied, since the overlap only exists once the new head
    /// is part of the body.
    pub fn tick(&mut self, state: &mut GameState) -> Result<TickResult, PlacementError> {
        if state.is_over {
            return Ok(TickResult::idle());
        }

        if !state.snake.can_advance(state.bound) {
            state.is_over = true;
            return Ok(TickResult::fatal(CollisionKind::OutOfBounds));
        }

        state.snake.advance();

        if state.snake.ate_itself() {
            state.is_over = true;
            return Ok(TickResult::fatal(CollisionKind::SelfCollision));
        }

        let ate_food = state.snake.head() == state.food;
        if ate_food {
            state.snake.grow();
            state.food = place_food(&mut self.rng, self.config.food_bound, &state.snake.body)?;
            state.score += 1;
        }

        Ok(TickResult::running(ate_food))
    }
}
