use serde::{Deserialize, Serialize};

/// Configuration for a game session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Maximum absolute coordinate the snake's head may reach
    pub bound: i32,
    /// Half-extent of the food placement interior; food samples
    /// `[-food_bound, food_bound - 1]` on each axis. Configured
    /// independently of `bound`.
    pub food_bound: i32,
    /// Body length of a freshly reset snake
    pub initial_length: usize,
    /// Milliseconds between simulation ticks
    pub tick_interval_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            bound: 7,
            food_bound: 7,
            initial_length: 4,
            tick_interval_ms: 500,
        }
    }
}

impl GameConfig {
    /// Configuration with a custom boundary, food interior matching
    pub fn with_bound(bound: i32) -> Self {
        Self {
            bound,
            food_bound: bound,
            ..Default::default()
        }
    }

    /// A cramped grid for tests
    pub fn small() -> Self {
        Self::with_bound(3)
    }
}
