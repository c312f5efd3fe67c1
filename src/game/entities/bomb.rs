//! Bomb entity logic.
//!
//! A bomb is created by `place_bomb`, lives until its fuse elapses, and is
//! removed from the registry in the same tick its explosion is resolved.

use serde::{Deserialize, Serialize};

use crate::game::types::{PlayerId, Position};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bomb {
    pub pos: Position,
    /// Back-reference to the owning player, lookup only.
    pub owner: PlayerId,
    /// Blast radius captured by value at placement time; later range
    /// power-ups do not affect an already-placed bomb.
    pub range: u32,
    pub placed_at_ms: u64,
    pub fuse_ms: u64,
    exploded: bool,
}

impl Bomb {
    pub fn new(pos: Position, owner: PlayerId, range: u32, placed_at_ms: u64, fuse_ms: u64) -> Self {
        Bomb { pos, owner, range, placed_at_ms, fuse_ms, exploded: false }
    }

    /// One-shot fuse check: true once elapsed time reaches the fuse, never
    /// again after the bomb has been marked exploded.
    pub fn should_explode(&self, now_ms: u64) -> bool {
        !self.exploded && now_ms.saturating_sub(self.placed_at_ms) >= self.fuse_ms
    }

    pub fn has_exploded(&self) -> bool {
        self.exploded
    }

    pub fn mark_exploded(&mut self) {
        self.exploded = true;
    }

    /// Force the fuse to count as elapsed, used when a blast ray reaches
    /// this bomb and chains it into the current detonation pass.
    pub fn force_due(&mut self, now_ms: u64) {
        self.placed_at_ms = now_ms.saturating_sub(self.fuse_ms);
    }

    pub fn time_remaining_ms(&self, now_ms: u64) -> u64 {
        (self.placed_at_ms + self.fuse_ms).saturating_sub(now_ms)
    }

    /// Fuse progress in 0.0–1.0, for blink animation.
    pub fn progress(&self, now_ms: u64) -> f32 {
        if self.fuse_ms == 0 {
            return 1.0;
        }
        let elapsed = now_ms.saturating_sub(self.placed_at_ms) as f32;
        (elapsed / self.fuse_ms as f32).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fuse_is_strict_threshold() {
        let bomb = Bomb::new(Position::new(1, 1), 0, 2, 100, 1500);
        assert!(!bomb.should_explode(100));
        assert!(!bomb.should_explode(1599));
        assert!(bomb.should_explode(1600));
        assert!(bomb.should_explode(5000));
    }

    #[test]
    fn fuse_is_one_shot() {
        let mut bomb = Bomb::new(Position::new(1, 1), 0, 2, 0, 1500);
        assert!(bomb.should_explode(1500));
        bomb.mark_exploded();
        assert!(!bomb.should_explode(1500));
        assert!(!bomb.should_explode(10_000));
    }

    #[test]
    fn progress_and_remaining() {
        let bomb = Bomb::new(Position::new(1, 1), 0, 2, 0, 1000);
        assert_eq!(bomb.time_remaining_ms(250), 750);
        assert!((bomb.progress(250) - 0.25).abs() < f32::EPSILON);
        assert_eq!(bomb.time_remaining_ms(2000), 0);
        assert_eq!(bomb.progress(2000), 1.0);
    }

    #[test]
    fn force_due_makes_fuse_elapsed() {
        let mut bomb = Bomb::new(Position::new(1, 1), 0, 2, 500, 1500);
        assert!(!bomb.should_explode(600));
        bomb.force_due(600);
        assert!(bomb.should_explode(600));
    }
}
