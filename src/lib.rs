//! grid_snake - a discrete grid-based snake simulation with a terminal
//! front end
//!
//! This library provides:
//! - The simulation core: movement, growth, collision, food placement,
//!   scoring, game over (game module)
//! - A read-only render snapshot for display collaborators (render module)
//! - Keyboard mapping to turn intents (input module)
//! - Session totals shown in the TUI header (metrics module)
//! - The interactive terminal driver (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
