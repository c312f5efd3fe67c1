/// Game configuration constants.
///
/// This module defines the main gameplay parameters such as grid dimensions,
/// bomb fuse duration, explosion lifetimes, and match duration, plus the
/// [`GameConfig`] aggregate handed to the engine at initialization.
use serde::{Deserialize, Serialize};

use crate::game::map::MapPattern;

/// Number of columns in the game grid.
pub const GRID_WIDTH: usize = 15;

/// Number of rows in the game grid.
pub const GRID_HEIGHT: usize = 13;

/// Delay (in milliseconds) between bomb placement and automatic detonation.
pub const BOMB_FUSE_MS: u64 = 1500;

/// Lifetime (in milliseconds) of an explosion entity, bounding its damage window.
pub const EXPLOSION_DURATION_MS: u64 = 1000;

/// Lifetime (in engine ticks) of a tile in the Explosion state before it
/// reverts to Floor. Independent from [`EXPLOSION_DURATION_MS`]; the tile
/// timer drives terrain revert, the entity duration drives damage.
pub const TILE_EXPLOSION_TICKS: u32 = 60;

/// Total match duration in milliseconds.
pub const MATCH_DURATION_MS: u64 = 180_000;

/// Minimum number of players in a match.
pub const MIN_PLAYERS: usize = 2;

/// Maximum number of players in a match.
pub const MAX_PLAYERS: usize = 4;

/// Concurrent-bomb budget each player starts with.
pub const DEFAULT_MAX_BOMBS: u32 = 1;

/// Blast radius (in cells per direction) each player starts with.
pub const DEFAULT_EXPLOSION_RANGE: u32 = 2;

/// Score awarded to a bomb's owner when it detonates.
pub const BOMB_SCORE_BONUS: u32 = 10;

/// Edge length of one tile in pixels, used to derive pixel positions.
pub const TILE_SIZE: f32 = 40.0;

/// Probability that an interior cell is a destructible wall in the random
/// map variant.
pub const RANDOM_WALL_PROBABILITY: f64 = 0.4;

/// Probability that a destroyed wall reveals a power-up. Zero by default so
/// the deterministic map pattern stays reproducible.
pub const POWERUP_DROP_CHANCE: f64 = 0.0;

/// Aggregate gameplay configuration, constructed explicitly and passed to the
/// engine at initialization. Defaults mirror the constants above.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    pub grid_width: usize,
    pub grid_height: usize,
    pub map_pattern: MapPattern,
    pub bomb_fuse_ms: u64,
    pub explosion_duration_ms: u64,
    pub tile_explosion_ticks: u32,
    pub match_duration_ms: u64,
    pub default_max_bombs: u32,
    pub default_explosion_range: u32,
    pub bomb_score_bonus: u32,
    pub powerup_drop_chance: f64,
    pub tile_size: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            grid_width: GRID_WIDTH,
            grid_height: GRID_HEIGHT,
            map_pattern: MapPattern::Checkerboard,
            bomb_fuse_ms: BOMB_FUSE_MS,
            explosion_duration_ms: EXPLOSION_DURATION_MS,
            tile_explosion_ticks: TILE_EXPLOSION_TICKS,
            match_duration_ms: MATCH_DURATION_MS,
            default_max_bombs: DEFAULT_MAX_BOMBS,
            default_explosion_range: DEFAULT_EXPLOSION_RANGE,
            bomb_score_bonus: BOMB_SCORE_BONUS,
            powerup_drop_chance: POWERUP_DROP_CHANCE,
            tile_size: TILE_SIZE,
        }
    }
}
