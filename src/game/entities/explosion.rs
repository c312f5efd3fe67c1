//! Explosion entity logic.
//!
//! One explosion entity is created per affected cell when a bomb detonates.
//! It is a transient damage/render record layered over the tile; the tile's
//! own explosion timer reverts terrain independently.

use serde::{Deserialize, Serialize};

use crate::game::types::Position;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Explosion {
    pub pos: Position,
    pub created_at_ms: u64,
    pub duration_ms: u64,
    pub active: bool,
}

impl Explosion {
    pub fn new(pos: Position, created_at_ms: u64, duration_ms: u64) -> Self {
        Explosion { pos, created_at_ms, duration_ms, active: true }
    }

    pub fn is_expired(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.created_at_ms) >= self.duration_ms
    }

    /// Whether this explosion still damages players standing on its cell.
    pub fn damages(&self, now_ms: u64) -> bool {
        self.active && !self.is_expired(now_ms)
    }

    /// Lifetime progress in 0.0–1.0, for render fade-out.
    pub fn progress(&self, now_ms: u64) -> f32 {
        if self.duration_ms == 0 {
            return 1.0;
        }
        let elapsed = now_ms.saturating_sub(self.created_at_ms) as f32;
        (elapsed / self.duration_ms as f32).clamp(0.0, 1.0)
    }
}
