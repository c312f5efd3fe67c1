//! Simulation engine and tick loop.
//!
//! Owns the map and the player/bomb/explosion registries, applies commands
//! from the input layer, and advances the simulation once per `update` call
//! in a fixed order: bomb fuses, explosion decay, player collisions, end
//! condition.

use std::time::Duration;

use log::{debug, info};

use crate::config::game::{GameConfig, MAX_PLAYERS, MIN_PLAYERS};
use crate::error::CommandError;
use crate::game::clock::MatchClock;
use crate::game::entities::{Bomb, Explosion, Player};
use crate::game::map::GameMap;
use crate::game::match_state::{MatchPhase, MatchState};
use crate::game::snapshot::{BombView, ExplosionView, MapView, MatchStatus, PlayerView};
use crate::game::systems::{
    apply_explosion_hits, collect_powerup, decay_explosions, move_player, resolve_due_bombs,
};
use crate::game::types::PlayerId;

#[derive(Debug)]
pub struct GameEngine {
    config: GameConfig,
    map: GameMap,
    players: Vec<Player>,
    bombs: Vec<Bomb>,
    explosions: Vec<Explosion>,
    clock: MatchClock,
    match_state: MatchState,
}

impl GameEngine {
    /// Build an idle engine. Nothing runs until `initialize_game`.
    pub fn new(config: GameConfig) -> Self {
        let spawns = GameMap::default_spawn_corners(config.grid_width, config.grid_height);
        let map = GameMap::generate(config.grid_width, config.grid_height, config.map_pattern, &spawns);
        let match_state = MatchState::new(config.match_duration_ms);
        GameEngine {
            config,
            map,
            players: Vec::new(),
            bombs: Vec::new(),
            explosions: Vec::new(),
            clock: MatchClock::new(),
            match_state,
        }
    }

    /// Start a fresh match: regenerate the map, spawn `player_count` players
    /// on the corner cells, reset the clock, and enter Running.
    pub fn initialize_game(&mut self, player_count: usize) -> Result<(), CommandError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&player_count) {
            return Err(CommandError::InvalidPlayerCount { min: MIN_PLAYERS, max: MAX_PLAYERS });
        }

        self.map.reset();
        self.bombs.clear();
        self.explosions.clear();
        self.clock.reset();

        let spawns = GameMap::default_spawn_corners(self.map.width(), self.map.height());
        self.players = (0..player_count)
            .map(|id| {
                Player::new(
                    id as PlayerId,
                    spawns[id],
                    self.config.default_max_bombs,
                    self.config.default_explosion_range,
                    self.config.tile_size,
                )
            })
            .collect();

        self.match_state = MatchState::new(self.config.match_duration_ms);
        self.match_state.start(self.clock.now_ms());
        info!("match initialized with {player_count} players");
        Ok(())
    }

    /// Advance the simulation by `delta`. No-op unless the match is Running.
    /// Step order is fixed: (a) resolve bomb fuse expiries, (b) decay tile
    /// and entity explosions, (c) apply explosion-vs-player hits, (d)
    /// evaluate the end condition.
    pub fn update(&mut self, delta: Duration) {
        if !self.match_state.is_running() {
            return;
        }
        self.clock.advance(delta);
        let now = self.clock.now_ms();

        let detonated = resolve_due_bombs(
            &mut self.map,
            &mut self.bombs,
            &mut self.explosions,
            &mut self.players,
            now,
            &self.config,
        );
        if detonated > 0 {
            debug_assert!(self.map.check_consistency());
        }

        self.map.tick_explosions();
        let _ = decay_explosions(&mut self.explosions, now);

        for id in apply_explosion_hits(&mut self.players, &self.explosions, now) {
            info!("player {id} was caught in an explosion");
        }

        self.match_state.evaluate(&self.players, now);
        if let MatchPhase::Over { winner } = self.match_state.phase {
            match winner {
                Some(id) => info!("match over, player {id} wins"),
                None => info!("match over, draw"),
            }
        }
    }

    /// Step the player one cell in a cardinal direction. Rejected without
    /// state change when the player is unknown or dead, the step is not a
    /// unit cardinal offset, or the target is out of bounds, unwalkable, or
    /// bomb-occupied.
    pub fn move_player(&mut self, player_id: PlayerId, dx: i32, dy: i32) -> Result<(), CommandError> {
        if !self.match_state.is_running() {
            return Err(CommandError::NotRunning);
        }
        let tile_size = self.config.tile_size;
        let player = self
            .players
            .iter_mut()
            .find(|p| p.id == player_id)
            .ok_or(CommandError::UnknownPlayer(player_id))?;
        match move_player(&self.map, player, dx, dy, tile_size) {
            Ok(_) => {
                let _ = collect_powerup(&mut self.map, player);
                Ok(())
            }
            Err(err) => {
                debug!("move rejected for player {player_id}: {err}");
                Err(err)
            }
        }
    }

    /// Drop a bomb on the player's current cell, capturing their current
    /// explosion range by value. The in-flight count only increments after
    /// the map accepts the placement, so a tile-level rejection leaves the
    /// player's capacity untouched.
    pub fn place_bomb(&mut self, player_id: PlayerId) -> Result<(), CommandError> {
        if !self.match_state.is_running() {
            return Err(CommandError::NotRunning);
        }
        let now = self.clock.now_ms();
        let player = self
            .players
            .iter_mut()
            .find(|p| p.id == player_id)
            .ok_or(CommandError::UnknownPlayer(player_id))?;
        if !player.alive {
            debug!("place_bomb rejected: player {player_id} is dead");
            return Err(CommandError::PlayerDead(player_id));
        }
        if player.bomb_count >= player.max_bombs {
            debug!("place_bomb rejected: player {player_id} is at capacity");
            return Err(CommandError::BombCapacity(player_id));
        }
        if self.map.has_bomb(player.pos) || !self.map.place_bomb_tile(player.pos) {
            debug!("place_bomb rejected: tile at ({}, {}) is occupied", player.pos.x, player.pos.y);
            return Err(CommandError::TileOccupied);
        }

        self.bombs.push(Bomb::new(
            player.pos,
            player_id,
            player.explosion_range,
            now,
            self.config.bomb_fuse_ms,
        ));
        player.bomb_count += 1;
        debug!("player {player_id} placed a bomb at ({}, {})", player.pos.x, player.pos.y);
        Ok(())
    }

    /// Flip Running⇄Paused. Pausing freezes the match clock, so bomb fuses,
    /// explosion lifetimes, and the match timer all stop with it.
    pub fn toggle_pause(&mut self) {
        self.match_state.toggle_pause();
        info!("match {}", if self.match_state.is_paused() { "paused" } else { "resumed" });
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Simulated time since match start, in milliseconds.
    pub fn now_ms(&self) -> u64 {
        self.clock.now_ms()
    }

    // Read-only snapshot accessors. Each returns owned copies so the
    // render/UI layer can never mutate engine state directly.

    pub fn map_view(&self) -> MapView {
        MapView {
            width: self.map.width(),
            height: self.map.height(),
            tiles: self.map.tile_types(),
        }
    }

    pub fn player_views(&self) -> Vec<PlayerView> {
        self.players
            .iter()
            .map(|p| PlayerView {
                id: p.id,
                name: p.name.clone(),
                color: p.color,
                pos: p.pos,
                pixel_pos: p.pixel_pos,
                lives: p.lives,
                alive: p.alive,
                score: p.score,
            })
            .collect()
    }

    pub fn bomb_views(&self) -> Vec<BombView> {
        let now = self.clock.now_ms();
        self.bombs
            .iter()
            .map(|b| BombView {
                pos: b.pos,
                owner: b.owner,
                time_remaining_ms: b.time_remaining_ms(now),
                progress: b.progress(now),
            })
            .collect()
    }

    pub fn explosion_views(&self) -> Vec<ExplosionView> {
        let now = self.clock.now_ms();
        self.explosions
            .iter()
            .map(|e| ExplosionView { pos: e.pos, progress: e.progress(now) })
            .collect()
    }

    pub fn match_status(&self) -> MatchStatus {
        let now = self.clock.now_ms();
        let winner = match self.match_state.phase {
            MatchPhase::Over { winner } => winner,
            _ => None,
        };
        MatchStatus {
            phase: self.match_state.phase,
            running: self.match_state.is_running(),
            paused: self.match_state.is_paused(),
            over: self.match_state.is_over(),
            winner,
            time_remaining_ms: self.match_state.time_remaining_ms(now),
            time_remaining: self.match_state.time_remaining_text(now),
        }
    }

    // Internal accessors for systems-level assertions in tests.

    #[cfg(test)]
    pub(crate) fn map(&self) -> &GameMap {
        &self.map
    }

    #[cfg(test)]
    pub(crate) fn map_mut(&mut self) -> &mut GameMap {
        &mut self.map
    }

    #[cfg(test)]
    pub(crate) fn players(&self) -> &[Player] {
        &self.players
    }

    #[cfg(test)]
    pub(crate) fn players_mut(&mut self) -> &mut Vec<Player> {
        &mut self.players
    }

    #[cfg(test)]
    pub(crate) fn bombs(&self) -> &[Bomb] {
        &self.bombs
    }

    #[cfg(test)]
    pub(crate) fn bombs_mut(&mut self) -> &mut Vec<Bomb> {
        &mut self.bombs
    }

    #[cfg(test)]
    pub(crate) fn explosions(&self) -> &[Explosion] {
        &self.explosions
    }
}
