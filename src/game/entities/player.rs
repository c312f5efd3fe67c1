//! Player entity logic.

use serde::{Deserialize, Serialize};

use crate::game::types::{PlayerId, Position, PowerUpKind};

/// Render color assigned to a player by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerColor {
    Blue,
    Red,
    Green,
    Yellow,
}

impl PlayerColor {
    pub fn for_id(id: PlayerId) -> Self {
        match id % 4 {
            0 => PlayerColor::Blue,
            1 => PlayerColor::Red,
            2 => PlayerColor::Green,
            _ => PlayerColor::Yellow,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub color: PlayerColor,
    pub pos: Position,
    /// Derived from the grid position, for rendering only.
    pub pixel_pos: (f32, f32),
    /// Binary health: 1 = alive, 0 = dead. No partial damage.
    pub lives: u32,
    pub score: u32,
    /// Bombs currently in flight for this player.
    pub bomb_count: u32,
    pub max_bombs: u32,
    pub explosion_range: u32,
    pub alive: bool,
}

impl Player {
    pub fn new(id: PlayerId, pos: Position, max_bombs: u32, explosion_range: u32, tile_size: f32) -> Self {
        Player {
            id,
            name: format!("Player {}", id + 1),
            color: PlayerColor::for_id(id),
            pos,
            pixel_pos: (pos.x as f32 * tile_size, pos.y as f32 * tile_size),
            lives: 1,
            score: 0,
            bomb_count: 0,
            max_bombs,
            explosion_range,
            alive: true,
        }
    }

    /// Move to a new cell, updating the grid and pixel positions together.
    pub fn move_to(&mut self, pos: Position, tile_size: f32) {
        self.pos = pos;
        self.pixel_pos = (pos.x as f32 * tile_size, pos.y as f32 * tile_size);
    }

    /// Instantaneous death: a single hit clears all lives.
    pub fn kill(&mut self) {
        self.lives = 0;
        self.alive = false;
    }

    pub fn award(&mut self, points: u32) {
        self.score += points;
    }

    /// Apply a collected power-up.
    pub fn apply_powerup(&mut self, kind: PowerUpKind) {
        match kind {
            PowerUpKind::ExtraBomb => self.max_bombs += 1,
            PowerUpKind::ExtraRange => self.explosion_range += 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kill_keeps_alive_in_sync_with_lives() {
        let mut player = Player::new(0, Position::new(1, 1), 1, 2, 40.0);
        assert!(player.alive);
        assert_eq!(player.lives, 1);
        player.kill();
        assert!(!player.alive);
        assert_eq!(player.lives, 0);
    }

    #[test]
    fn move_to_updates_both_positions() {
        let mut player = Player::new(0, Position::new(1, 1), 1, 2, 40.0);
        player.move_to(Position::new(2, 1), 40.0);
        assert_eq!(player.pos, Position::new(2, 1));
        assert_eq!(player.pixel_pos, (80.0, 40.0));
    }

    #[test]
    fn powerups_raise_caps() {
        let mut player = Player::new(0, Position::new(1, 1), 1, 2, 40.0);
        player.apply_powerup(PowerUpKind::ExtraBomb);
        player.apply_powerup(PowerUpKind::ExtraRange);
        assert_eq!(player.max_bombs, 2);
        assert_eq!(player.explosion_range, 3);
    }
}
