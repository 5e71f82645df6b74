use std::time::{Duration, Instant};

use crate::game::TickResult;

/// Scoreboard for one program run, folded from the engine's tick
/// results. The engine reports a session's fatal collision in exactly
/// one result, so feeding every result through `record_tick` counts
/// each session once.
pub struct SessionMetrics {
    session_started: Instant,
    pub high_score: u32,
    pub games_played: u32,
}

impl SessionMetrics {
    pub fn new() -> Self {
        Self {
            session_started: Instant::now(),
            high_score: 0,
            games_played: 0,
        }
    }

    /// Fold one tick into the totals. `score` is the session score at
    /// the time of the tick.
    pub fn record_tick(&mut self, result: &TickResult, score: u32) {
        if result.collision.is_some() {
            self.games_played += 1;
            self.high_score = self.high_score.max(score);
        }
    }

    /// Restart the session clock after a reset
    pub fn on_session_start(&mut self) {
        self.session_started = Instant::now();
    }

    /// Elapsed session time as mm:ss for the header
    pub fn format_time(&self) -> String {
        format_mm_ss(self.session_started.elapsed())
    }
}

impl Default for SessionMetrics {
    fn default() -> Self {
        Self::new()
    }
}

fn format_mm_ss(elapsed: Duration) -> String {
    let total_secs = elapsed.as_secs();
    format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
}
