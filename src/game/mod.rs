//! The snake simulation core.
//!
//! Plain data plus transition functions, no I/O and no rendering: the
//! host owns the clock and calls [`GameEngine::tick`], then queries the
//! state (or a [`crate::render::SceneView`] snapshot) for display.

pub mod config;
pub mod direction;
pub mod engine;
pub mod food;
pub mod point;
pub mod snake;

// Re-export commonly used types
pub use config::GameConfig;
pub use direction::{Direction, Turn};
pub use engine::{CollisionKind, GameEngine, GameState, TickResult};
pub use food::{place_food, PlacementError};
pub use point::Point;
pub use snake::Snake;
