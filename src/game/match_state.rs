//! End-condition evaluator.
//!
//! Derives the match phase from the live player roster and elapsed time.
//! Over is terminal; only a fresh `initialize_game` builds a new match.

use serde::{Deserialize, Serialize};

use crate::game::entities::Player;
use crate::game::types::PlayerId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    NotStarted,
    Running,
    Paused,
    /// Terminal. `winner` is the sole survivor, or `None` on a draw.
    Over { winner: Option<PlayerId> },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchState {
    pub phase: MatchPhase,
    pub started_at_ms: u64,
    pub duration_ms: u64,
}

impl MatchState {
    pub fn new(duration_ms: u64) -> Self {
        MatchState { phase: MatchPhase::NotStarted, started_at_ms: 0, duration_ms }
    }

    pub fn start(&mut self, now_ms: u64) {
        self.started_at_ms = now_ms;
        self.phase = MatchPhase::Running;
    }

    pub fn is_running(&self) -> bool {
        self.phase == MatchPhase::Running
    }

    pub fn is_paused(&self) -> bool {
        self.phase == MatchPhase::Paused
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, MatchPhase::Over { .. })
    }

    /// Flip Running⇄Paused. No effect in any other phase.
    pub fn toggle_pause(&mut self) {
        self.phase = match self.phase {
            MatchPhase::Running => MatchPhase::Paused,
            MatchPhase::Paused => MatchPhase::Running,
            other => other,
        };
    }

    pub fn elapsed_ms(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.started_at_ms)
    }

    pub fn time_remaining_ms(&self, now_ms: u64) -> u64 {
        self.duration_ms.saturating_sub(self.elapsed_ms(now_ms))
    }

    /// Remaining match time formatted MM:SS.
    pub fn time_remaining_text(&self, now_ms: u64) -> String {
        let secs = self.time_remaining_ms(now_ms).div_ceil(1000);
        format!("{:02}:{:02}", secs / 60, secs % 60)
    }

    /// Evaluate the end condition against the roster. Running ends when at
    /// most one player is left alive (last-survivor rule) or the match
    /// clock runs out (draw).
    pub fn evaluate(&mut self, players: &[Player], now_ms: u64) {
        if self.phase != MatchPhase::Running {
            return;
        }
        let alive: Vec<PlayerId> = players.iter().filter(|p| p.alive).map(|p| p.id).collect();
        if alive.len() <= 1 {
            self.phase = MatchPhase::Over { winner: alive.first().copied() };
        } else if self.elapsed_ms(now_ms) >= self.duration_ms {
            self.phase = MatchPhase::Over { winner: None };
        }
    }
}
