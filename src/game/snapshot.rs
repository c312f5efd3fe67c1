//! Read-only snapshot surface for the render/UI collaborator.
//!
//! Every accessor on the engine returns owned copies of these view structs,
//! never live references into the registries, so external code can only
//! mutate the match through the command API.

use serde::Serialize;

use crate::game::entities::PlayerColor;
use crate::game::match_state::MatchPhase;
use crate::game::types::{PlayerId, Position, TileType};

/// Map dimensions plus a row-major copy of every tile's type.
#[derive(Debug, Clone, Serialize)]
pub struct MapView {
    pub width: usize,
    pub height: usize,
    pub tiles: Vec<TileType>,
}

impl MapView {
    pub fn tile(&self, x: usize, y: usize) -> Option<TileType> {
        if x < self.width && y < self.height {
            Some(self.tiles[y * self.width + x])
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayerView {
    pub id: PlayerId,
    pub name: String,
    pub color: PlayerColor,
    pub pos: Position,
    pub pixel_pos: (f32, f32),
    pub lives: u32,
    pub alive: bool,
    pub score: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct BombView {
    pub pos: Position,
    pub owner: PlayerId,
    pub time_remaining_ms: u64,
    /// Fuse progress 0.0–1.0, for blink animation.
    pub progress: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExplosionView {
    pub pos: Position,
    /// Lifetime progress 0.0–1.0, for fade-out.
    pub progress: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchStatus {
    pub phase: MatchPhase,
    pub running: bool,
    pub paused: bool,
    pub over: bool,
    pub winner: Option<PlayerId>,
    pub time_remaining_ms: u64,
    /// Remaining match time formatted MM:SS.
    pub time_remaining: String,
}
