//! Tile store and map generation.
//!
//! This module owns the width×height tile array, the auxiliary position
//! indexes for destructible walls and bombs, and the two map generators
//! (deterministic checkerboard and random-with-safe-corners).

use std::collections::HashSet;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::game::types::{Position, PowerUpKind, TileType};

/// One cell of the grid. The explosion timer is only meaningful while the
/// type is [`TileType::Explosion`]; `pending_powerup` records what the tile
/// becomes once that timer runs out.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    pub tile_type: TileType,
    pub explosion_timer: u32,
    pub pending_powerup: Option<PowerUpKind>,
}

impl Tile {
    fn new(tile_type: TileType) -> Self {
        Tile { tile_type, explosion_timer: 0, pending_powerup: None }
    }
}

/// Map generation strategy, remembered for `reset`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MapPattern {
    /// Border walls, destructible walls on every even/even interior cell,
    /// floor elsewhere. Bit-for-bit reproducible.
    Checkerboard,
    /// Border walls, destructible walls with the given probability, spawn
    /// corners and their adjacent escape cells kept clear.
    Random { wall_probability: f64 },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameMap {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
    destructible_walls: HashSet<Position>,
    bomb_positions: HashSet<Position>,
    pattern: MapPattern,
    spawn_corners: Vec<Position>,
}

impl GameMap {
    /// Build a map with the given pattern. Spawn corners (and, for the
    /// random pattern, their cardinal neighbors) are forced to Floor.
    pub fn generate(width: usize, height: usize, pattern: MapPattern, spawn_corners: &[Position]) -> Self {
        let mut map = GameMap {
            width,
            height,
            tiles: Vec::new(),
            destructible_walls: HashSet::new(),
            bomb_positions: HashSet::new(),
            pattern,
            spawn_corners: spawn_corners.to_vec(),
        };
        map.apply_pattern();
        map
    }

    /// Deterministic checkerboard map.
    pub fn checkerboard(width: usize, height: usize, spawn_corners: &[Position]) -> Self {
        Self::generate(width, height, MapPattern::Checkerboard, spawn_corners)
    }

    /// Randomized map with safe spawn corners.
    pub fn random(width: usize, height: usize, wall_probability: f64, spawn_corners: &[Position]) -> Self {
        Self::generate(width, height, MapPattern::Random { wall_probability }, spawn_corners)
    }

    /// The four corner spawn cells for a map of the given dimensions, in
    /// player-id order (opposite corners first so two-player matches start
    /// diagonal).
    pub fn default_spawn_corners(width: usize, height: usize) -> [Position; 4] {
        let (w, h) = (width as i32, height as i32);
        [
            Position::new(1, 1),
            Position::new(w - 2, h - 2),
            Position::new(w - 2, 1),
            Position::new(1, h - 2),
        ]
    }

    fn apply_pattern(&mut self) {
        self.destructible_walls.clear();
        self.bomb_positions.clear();
        self.tiles = vec![Tile::new(TileType::Floor); self.width * self.height];

        // Cells that must stay clear: each spawn corner and its cardinal
        // neighbors, so a spawned player always has an escape route.
        let mut forced_floor: HashSet<Position> = HashSet::new();
        for corner in &self.spawn_corners {
            forced_floor.insert(*corner);
            for (dx, dy) in [(0, -1), (0, 1), (-1, 0), (1, 0)] {
                forced_floor.insert(corner.offset(dx, dy));
            }
        }

        let mut rng = rand::rng();
        for y in 0..self.height as i32 {
            for x in 0..self.width as i32 {
                let pos = Position::new(x, y);
                let on_border = x == 0 || y == 0 || x == self.width as i32 - 1 || y == self.height as i32 - 1;
                let tile_type = if on_border {
                    TileType::Wall
                } else if forced_floor.contains(&pos) {
                    TileType::Floor
                } else {
                    match self.pattern {
                        MapPattern::Checkerboard => {
                            if x % 2 == 0 && y % 2 == 0 {
                                TileType::DestructibleWall
                            } else {
                                TileType::Floor
                            }
                        }
                        MapPattern::Random { wall_probability } => {
                            if rng.random_bool(wall_probability.clamp(0.0, 1.0)) {
                                TileType::DestructibleWall
                            } else {
                                TileType::Floor
                            }
                        }
                    }
                };
                let idx = self.index(pos);
                self.tiles[idx] = Tile::new(tile_type);
                if tile_type == TileType::DestructibleWall {
                    let _ = self.destructible_walls.insert(pos);
                }
            }
        }
    }

    /// Reapply the initial pattern and clear both index sets. The random
    /// pattern rerolls its wall layout.
    pub fn reset(&mut self) {
        self.apply_pattern();
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn index(&self, pos: Position) -> usize {
        pos.y as usize * self.width + pos.x as usize
    }

    pub fn is_valid_position(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// Tile at the given coordinates, or `None` when out of bounds. Never
    /// panics on out-of-range input.
    pub fn tile(&self, x: i32, y: i32) -> Option<&Tile> {
        if self.is_valid_position(x, y) {
            Some(&self.tiles[y as usize * self.width + x as usize])
        } else {
            None
        }
    }

    pub fn tile_at(&self, pos: Position) -> Option<&Tile> {
        self.tile(pos.x, pos.y)
    }

    /// Bounds check plus tile walkability.
    pub fn is_walkable(&self, pos: Position) -> bool {
        self.tile_at(pos).is_some_and(|t| t.tile_type.is_walkable())
    }

    /// O(1) bomb-occupancy check via the position index.
    pub fn has_bomb(&self, pos: Position) -> bool {
        self.bomb_positions.contains(&pos)
    }

    pub fn destructible_wall_count(&self) -> usize {
        self.destructible_walls.len()
    }

    /// Mutate a tile's type in place, keeping both index sets in sync.
    /// Ignores out-of-bounds positions.
    pub fn set_tile_type(&mut self, pos: Position, tile_type: TileType) {
        if !self.is_valid_position(pos.x, pos.y) {
            return;
        }
        let idx = self.index(pos);
        let _ = self.destructible_walls.remove(&pos);
        let _ = self.bomb_positions.remove(&pos);
        self.tiles[idx] = Tile::new(tile_type);
        match tile_type {
            TileType::DestructibleWall => {
                let _ = self.destructible_walls.insert(pos);
            }
            TileType::Bomb => {
                let _ = self.bomb_positions.insert(pos);
            }
            _ => {}
        }
    }

    /// Mark a floor tile as bomb-occupied. Returns false (without mutating)
    /// when the tile is missing, not plain floor, or already bomb-occupied.
    pub fn place_bomb_tile(&mut self, pos: Position) -> bool {
        match self.tile_at(pos) {
            Some(tile) if tile.tile_type == TileType::Floor && !self.has_bomb(pos) => {
                self.set_tile_type(pos, TileType::Bomb);
                true
            }
            _ => false,
        }
    }

    /// Put a tile into the Explosion state with the given revert timer. The
    /// optional power-up is what the tile reveals once the timer expires.
    pub fn set_explosion(&mut self, pos: Position, ticks: u32, reveal: Option<PowerUpKind>) {
        if !self.is_valid_position(pos.x, pos.y) {
            return;
        }
        self.set_tile_type(pos, TileType::Explosion);
        let idx = self.index(pos);
        self.tiles[idx].explosion_timer = ticks;
        self.tiles[idx].pending_powerup = reveal;
    }

    /// Advance every exploding tile by one tick, reverting expired ones to
    /// Floor (or the power-up the destroyed wall revealed).
    pub fn tick_explosions(&mut self) {
        for idx in 0..self.tiles.len() {
            if self.tiles[idx].tile_type != TileType::Explosion {
                continue;
            }
            self.tiles[idx].explosion_timer = self.tiles[idx].explosion_timer.saturating_sub(1);
            if self.tiles[idx].explosion_timer == 0 {
                let revealed = self.tiles[idx].pending_powerup.take();
                self.tiles[idx] = match revealed {
                    Some(kind) => Tile::new(TileType::PowerUp(kind)),
                    None => Tile::new(TileType::Floor),
                };
            }
        }
    }

    /// Row-major copy of all tile types, for the snapshot surface.
    pub fn tile_types(&self) -> Vec<TileType> {
        self.tiles.iter().map(|t| t.tile_type).collect()
    }

    /// Verify the index sets against the tile array and the border-wall
    /// invariant. Index desync is a programming error, not user-recoverable.
    pub fn check_consistency(&self) -> bool {
        for y in 0..self.height as i32 {
            for x in 0..self.width as i32 {
                let pos = Position::new(x, y);
                let tile_type = self.tiles[self.index(pos)].tile_type;
                let on_border = x == 0 || y == 0 || x == self.width as i32 - 1 || y == self.height as i32 - 1;
                if on_border && tile_type != TileType::Wall {
                    return false;
                }
                if (tile_type == TileType::Bomb) != self.bomb_positions.contains(&pos) {
                    return false;
                }
                if (tile_type == TileType::DestructibleWall) != self.destructible_walls.contains(&pos) {
                    return false;
                }
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corners(w: usize, h: usize) -> Vec<Position> {
        GameMap::default_spawn_corners(w, h).to_vec()
    }

    #[test]
    fn checkerboard_pattern() {
        let map = GameMap::checkerboard(15, 13, &corners(15, 13));
        for y in 0..13 {
            for x in 0..15 {
                let tile_type = map.tile(x, y).unwrap().tile_type;
                let on_border = x == 0 || y == 0 || x == 14 || y == 12;
                if on_border {
                    assert_eq!(tile_type, TileType::Wall, "border at ({x},{y})");
                } else if x % 2 == 0 && y % 2 == 0 {
                    assert_eq!(tile_type, TileType::DestructibleWall, "pillar at ({x},{y})");
                } else {
                    assert_eq!(tile_type, TileType::Floor, "floor at ({x},{y})");
                }
            }
        }
        assert!(map.check_consistency());
    }

    #[test]
    fn reset_reproduces_checkerboard_bit_for_bit() {
        let mut map = GameMap::checkerboard(15, 13, &corners(15, 13));
        let pristine = map.tile_types();

        map.set_tile_type(Position::new(2, 2), TileType::Floor);
        map.set_explosion(Position::new(3, 3), 10, None);
        assert!(map.place_bomb_tile(Position::new(5, 5)));

        map.reset();
        assert_eq!(map.tile_types(), pristine);
        assert!(!map.has_bomb(Position::new(5, 5)));
        assert!(map.check_consistency());
    }

    #[test]
    fn random_map_keeps_borders_and_spawns_clear() {
        let spawns = corners(15, 13);
        let map = GameMap::random(15, 13, 0.9, &spawns);
        for x in 0..15 {
            assert_eq!(map.tile(x, 0).unwrap().tile_type, TileType::Wall);
            assert_eq!(map.tile(x, 12).unwrap().tile_type, TileType::Wall);
        }
        for spawn in &spawns {
            assert_eq!(map.tile_at(*spawn).unwrap().tile_type, TileType::Floor);
        }
        // Escape cells next to (1,1) must be clear too.
        assert_eq!(map.tile(2, 1).unwrap().tile_type, TileType::Floor);
        assert_eq!(map.tile(1, 2).unwrap().tile_type, TileType::Floor);
        assert!(map.check_consistency());
    }

    #[test]
    fn out_of_bounds_returns_none() {
        let map = GameMap::checkerboard(15, 13, &corners(15, 13));
        assert!(map.tile(-1, 0).is_none());
        assert!(map.tile(0, -1).is_none());
        assert!(map.tile(15, 0).is_none());
        assert!(map.tile(0, 13).is_none());
        assert!(!map.is_walkable(Position::new(-1, -1)));
    }

    #[test]
    fn bomb_tile_round_trip() {
        let mut map = GameMap::checkerboard(15, 13, &corners(15, 13));
        let pos = Position::new(3, 3);
        assert!(map.place_bomb_tile(pos));
        assert!(map.has_bomb(pos));
        // Occupied tile rejects a second placement.
        assert!(!map.place_bomb_tile(pos));
        map.set_tile_type(pos, TileType::Floor);
        assert!(!map.has_bomb(pos));
        assert!(map.check_consistency());
    }

    #[test]
    fn exploding_tile_reverts_after_timer() {
        let mut map = GameMap::checkerboard(15, 13, &corners(15, 13));
        let pos = Position::new(3, 3);
        map.set_explosion(pos, 3, None);
        map.tick_explosions();
        map.tick_explosions();
        assert_eq!(map.tile_at(pos).unwrap().tile_type, TileType::Explosion);
        map.tick_explosions();
        assert_eq!(map.tile_at(pos).unwrap().tile_type, TileType::Floor);
    }

    #[test]
    fn exploding_tile_can_reveal_powerup() {
        let mut map = GameMap::checkerboard(15, 13, &corners(15, 13));
        let pos = Position::new(3, 3);
        map.set_explosion(pos, 1, Some(PowerUpKind::ExtraRange));
        map.tick_explosions();
        assert_eq!(
            map.tile_at(pos).unwrap().tile_type,
            TileType::PowerUp(PowerUpKind::ExtraRange)
        );
    }
}
