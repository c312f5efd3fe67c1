//! Simulation engine for a grid-based bomb arena.
//!
//! Players move on a grid, place time-fused bombs, and bombs detonate in
//! cross-shaped blasts that destroy terrain and kill players. The crate
//! exposes the engine's command API (`initialize_game`, `update`,
//! `move_player`, `place_bomb`, `toggle_pause`) and read-only snapshot
//! accessors for a rendering/input layer to drive; rendering itself,
//! networking, and persistence live outside this crate.

pub mod config;
pub mod error;
pub mod game;


pub use crate::config::game::GameConfig;
pub use crate::error::CommandError;
pub use crate::game::engine::GameEngine;
pub use crate::game::shared::SharedEngine;
