//! Command rejection taxonomy.
//!
//! Invalid commands are rejected silently: the caller gets a typed error,
//! nothing mutates, nothing panics across the command boundary.

use thiserror::Error;

use crate::game::types::PlayerId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown player id {0}")]
    UnknownPlayer(PlayerId),
    #[error("player {0} is dead")]
    PlayerDead(PlayerId),
    #[error("target cell is out of bounds")]
    OutOfBounds,
    #[error("target cell is not walkable")]
    Blocked,
    #[error("step must be a single-cell cardinal offset")]
    InvalidStep,
    #[error("player {0} has no bomb capacity left")]
    BombCapacity(PlayerId),
    #[error("a bomb already occupies the cell")]
    TileOccupied,
    #[error("match is not running")]
    NotRunning,
    #[error("player count must be between {min} and {max}")]
    InvalidPlayerCount { min: usize, max: usize },
}
