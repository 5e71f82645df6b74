use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{stderr, Stderr};
use std::time::Duration;
use tokio::time::interval;

use crate::game::{GameConfig, GameEngine, GameState, Turn};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::SessionMetrics;
use crate::render::{Renderer, SceneView};

/// Interactive terminal session. Owns the tick cadence and feeds
/// keyboard turn intents into the simulation; the engine itself never
/// sees a clock or a key event.
pub struct HumanMode {
    engine: GameEngine,
    state: GameState,
    metrics: SessionMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    should_quit: bool,
}

impl HumanMode {
    pub fn new(config: GameConfig) -> Result<Self> {
        let mut engine = GameEngine::new(config);
        let state = engine.reset().context("Failed to set up the board")?;

        Ok(Self {
            engine,
            state,
            metrics: SessionMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            should_quit: false,
        })
    }

    /// Engine seeded for a reproducible session
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self> {
        let mut engine = GameEngine::with_seed(config, seed);
        let state = engine.reset().context("Failed to set up the board")?;

        Ok(Self {
            engine,
            state,
            metrics: SessionMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            should_quit: false,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        let result = self.run_game_loop(&mut terminal).await;

        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        let tick_interval = Duration::from_millis(self.engine.config().tick_interval_ms);
        let mut tick_timer = interval(tick_interval);

        // Render at 30 FPS; the simulation only changes on ticks but the
        // clock in the header keeps moving
        let render_interval = Duration::from_millis(33);
        let mut render_timer = interval(render_interval);

        loop {
            tokio::select! {
                // Keyboard events; handled in the same task as the tick,
                // so an intent is never read mid-tick
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event)?;
                    }
                }

                // Simulation tick
                _ = tick_timer.tick() => {
                    self.update_game()?;
                }

                // Render frame
                _ = render_timer.tick() => {
                    let view = SceneView::of(&self.state);
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &view, &self.metrics);
                    }).context("Failed to draw frame")?;
                }

                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) -> Result<()> {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return Ok(());
            }

            match self.input_handler.handle_key_event(key) {
                KeyAction::Turn(Turn::Left) => self.state.snake.turn_left(),
                KeyAction::Turn(Turn::Right) => self.state.snake.turn_right(),
                KeyAction::Restart => self.reset_game()?,
                KeyAction::Quit => self.should_quit = true,
                KeyAction::None => {}
            }
        }

        Ok(())
    }

    fn update_game(&mut self) -> Result<()> {
        let result = self
            .engine
            .tick(&mut self.state)
            .context("Simulation tick failed")?;
        self.metrics.record_tick(&result, self.state.score);

        Ok(())
    }

    /// A placement failure here means the grid has no free interior
    /// cell, a configuration problem; it tears the session down rather
    /// than leaving the old board on screen.
    fn reset_game(&mut self) -> Result<()> {
        self.state = self.engine.reset().context("Failed to set up the board")?;
        self.metrics.on_session_start();
        Ok(())
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_initialization() {
        let mode = HumanMode::with_seed(GameConfig::default(), 1).unwrap();
        assert!(!mode.state.is_over);
        assert_eq!(mode.state.score, 0);
        assert_eq!(mode.state.snake.len(), 4);
    }

    #[test]
    fn test_restart_starts_a_fresh_session() {
        let mut mode = HumanMode::with_seed(GameConfig::default(), 1).unwrap();
        mode.state.score = 10;
        mode.state.is_over = true;

        mode.reset_game().unwrap();

        assert_eq!(mode.state.score, 0);
        assert!(!mode.state.is_over);
    }

    #[test]
    fn test_exhausted_food_interior_is_an_error() {
        // A zero food interior has no free cell; session setup must
        // fail loudly instead of leaving a stale board
        let config = GameConfig {
            food_bound: 0,
            ..GameConfig::default()
        };
        assert!(HumanMode::with_seed(config, 1).is_err());
    }

    #[test]
    fn test_game_over_recorded_once() {
        let mut mode = HumanMode::with_seed(GameConfig::default(), 1).unwrap();
        // Park the snake against the wall, heading out
        mode.state.snake.body = vec![crate::game::Point::new(0, -7)];
        mode.update_game().unwrap();
        assert!(mode.state.is_over);
        assert_eq!(mode.metrics.games_played, 1);

        // Further ticks on the finished session change nothing
        mode.update_game().unwrap();
        assert_eq!(mode.metrics.games_played, 1);
    }
}
