//! Thread-shared engine handle.
//!
//! Commands may arrive from an input thread while the tick loop drives
//! `update`; one coarse mutex around the whole engine guarantees a command
//! applies entirely before or after a tick, never mid-tick.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::error::CommandError;
use crate::game::engine::GameEngine;
use crate::game::snapshot::{BombView, ExplosionView, MapView, MatchStatus, PlayerView};
use crate::game::types::PlayerId;

/// Cloneable handle to a mutex-guarded [`GameEngine`]. Every call locks the
/// whole aggregate for its duration; no call blocks on anything else, so
/// lock hold times are bounded.
#[derive(Clone)]
pub struct SharedEngine {
    inner: Arc<Mutex<GameEngine>>,
}

impl SharedEngine {
    pub fn new(engine: GameEngine) -> Self {
        SharedEngine { inner: Arc::new(Mutex::new(engine)) }
    }

    /// Run a closure with exclusive access to the engine.
    pub fn with<R>(&self, f: impl FnOnce(&mut GameEngine) -> R) -> R {
        // Engine calls never panic mid-mutation, so a poisoned lock still
        // holds a coherent state.
        let mut guard = self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&mut guard)
    }

    pub fn initialize_game(&self, player_count: usize) -> Result<(), CommandError> {
        self.with(|engine| engine.initialize_game(player_count))
    }

    pub fn update(&self, delta: Duration) {
        self.with(|engine| engine.update(delta));
    }

    pub fn move_player(&self, player_id: PlayerId, dx: i32, dy: i32) -> Result<(), CommandError> {
        self.with(|engine| engine.move_player(player_id, dx, dy))
    }

    pub fn place_bomb(&self, player_id: PlayerId) -> Result<(), CommandError> {
        self.with(|engine| engine.place_bomb(player_id))
    }

    pub fn toggle_pause(&self) {
        self.with(|engine| engine.toggle_pause());
    }

    pub fn map_view(&self) -> MapView {
        self.with(|engine| engine.map_view())
    }

    pub fn player_views(&self) -> Vec<PlayerView> {
        self.with(|engine| engine.player_views())
    }

    pub fn bomb_views(&self) -> Vec<BombView> {
        self.with(|engine| engine.bomb_views())
    }

    pub fn explosion_views(&self) -> Vec<ExplosionView> {
        self.with(|engine| engine.explosion_views())
    }

    pub fn match_status(&self) -> MatchStatus {
        self.with(|engine| engine.match_status())
    }
}
