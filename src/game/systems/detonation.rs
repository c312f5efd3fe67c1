//! Bomb and explosion lifecycle system.
//!
//! Resolves fuse expiries into cross-shaped blast patterns, destroys
//! terrain, chains bombs caught in a blast, decays explosion entities, and
//! applies explosion-vs-player hits.

use log::debug;
use rand::Rng;

use crate::config::game::GameConfig;
use crate::game::entities::{Bomb, Explosion, Player};
use crate::game::map::GameMap;
use crate::game::types::{Direction, PlayerId, PowerUpKind, TileType};

/// Resolve every bomb whose fuse has elapsed, including bombs chained into
/// the blast by a ray. All due bombs are fully detonated before the caller
/// runs any collision check; resolution order is the registry's insertion
/// order. Detonated bombs are removed from the registry. Returns how many
/// bombs went off.
pub fn resolve_due_bombs(
    map: &mut GameMap,
    bombs: &mut Vec<Bomb>,
    explosions: &mut Vec<Explosion>,
    players: &mut [Player],
    now_ms: u64,
    config: &GameConfig,
) -> usize {
    let mut detonated = 0;
    loop {
        let due: Vec<usize> = bombs
            .iter()
            .enumerate()
            .filter(|(_, b)| b.should_explode(now_ms))
            .map(|(i, _)| i)
            .collect();
        if due.is_empty() {
            break;
        }
        for idx in due {
            detonate(idx, map, bombs, explosions, players, now_ms, config);
            detonated += 1;
        }
    }
    bombs.retain(|b| !b.has_exploded());
    detonated
}

/// Detonate one bomb: emit an explosion at its cell, ray-march the four
/// cardinal directions, then return capacity and score to the owner.
fn detonate(
    idx: usize,
    map: &mut GameMap,
    bombs: &mut [Bomb],
    explosions: &mut Vec<Explosion>,
    players: &mut [Player],
    now_ms: u64,
    config: &GameConfig,
) {
    bombs[idx].mark_exploded();
    let center = bombs[idx].pos;
    let range = bombs[idx].range;
    let owner = bombs[idx].owner;

    // The source cell explodes unconditionally, releasing the bomb tile and
    // its position-index entry.
    map.set_explosion(center, config.tile_explosion_ticks, None);
    explosions.push(Explosion::new(center, now_ms, config.explosion_duration_ms));

    for dir in Direction::ALL {
        let (dx, dy) = dir.delta();
        for step in 1..=range as i32 {
            let cell = center.offset(dx * step, dy * step);
            let Some(tile) = map.tile_at(cell) else {
                break;
            };
            if tile.tile_type.blocks_explosion() {
                break;
            }
            if tile.tile_type == TileType::Bomb {
                // Chain reaction: the blast forces this bomb due; it will be
                // picked up in the same resolution pass. The ray stops here.
                if let Some(other) = bombs.iter_mut().find(|b| b.pos == cell && !b.has_exploded()) {
                    other.force_due(now_ms);
                }
                break;
            }
            let hit_wall = tile.tile_type.is_destructible();
            let reveal = if hit_wall { roll_powerup(config) } else { None };
            map.set_explosion(cell, config.tile_explosion_ticks, reveal);
            explosions.push(Explosion::new(cell, now_ms, config.explosion_duration_ms));
            if hit_wall {
                // A destructible wall absorbs the blast after being
                // destroyed: exactly one cell of penetration.
                break;
            }
        }
    }

    if let Some(player) = players.iter_mut().find(|p| p.id == owner) {
        player.bomb_count = player.bomb_count.saturating_sub(1);
        player.award(config.bomb_score_bonus);
    }
    debug!("bomb at ({}, {}) detonated (owner {owner}, range {range})", center.x, center.y);
}

fn roll_powerup(config: &GameConfig) -> Option<PowerUpKind> {
    if config.powerup_drop_chance <= 0.0 {
        return None;
    }
    let mut rng = rand::rng();
    if rng.random_bool(config.powerup_drop_chance.clamp(0.0, 1.0)) {
        Some(if rng.random_bool(0.5) { PowerUpKind::ExtraBomb } else { PowerUpKind::ExtraRange })
    } else {
        None
    }
}

/// Deactivate and purge explosion entities whose duration has elapsed.
/// Returns how many were purged.
pub fn decay_explosions(explosions: &mut Vec<Explosion>, now_ms: u64) -> usize {
    let before = explosions.len();
    for explosion in explosions.iter_mut() {
        if explosion.is_expired(now_ms) {
            explosion.active = false;
        }
    }
    explosions.retain(|e| e.active);
    before - explosions.len()
}

/// Kill every living player standing on a damage-capable explosion cell.
/// A hit is instantaneous death; dead players are never re-hit.
pub fn apply_explosion_hits(players: &mut [Player], explosions: &[Explosion], now_ms: u64) -> Vec<PlayerId> {
    let mut killed = Vec::new();
    for player in players.iter_mut().filter(|p| p.alive) {
        if explosions.iter().any(|e| e.damages(now_ms) && e.pos == player.pos) {
            player.kill();
            killed.push(player.id);
        }
    }
    killed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::types::Position;

    fn config() -> GameConfig {
        GameConfig::default()
    }

    fn open_map() -> GameMap {
        // 9x9 checkerboard; interior pillars at even/even cells.
        let spawns = GameMap::default_spawn_corners(9, 9);
        GameMap::checkerboard(9, 9, &spawns)
    }

    #[test]
    fn blast_covers_cross_and_stops_at_border() {
        let mut map = open_map();
        let mut bombs = vec![Bomb::new(Position::new(3, 3), 0, 2, 0, 1500)];
        let mut explosions = Vec::new();
        let mut players = [Player::new(0, Position::new(7, 7), 1, 2, 40.0)];
        map.set_tile_type(Position::new(3, 3), TileType::Bomb);

        let count = resolve_due_bombs(&mut map, &mut bombs, &mut explosions, &mut players, 1500, &config());
        assert_eq!(count, 1);
        assert!(bombs.is_empty());

        let cells: Vec<Position> = explosions.iter().map(|e| e.pos).collect();
        assert!(cells.contains(&Position::new(3, 3)));
        for pos in [(1, 3), (2, 3), (4, 3), (5, 3), (3, 1), (3, 2), (3, 4), (3, 5)] {
            assert!(cells.contains(&Position::new(pos.0, pos.1)), "missing {pos:?}");
        }
        assert_eq!(cells.len(), 9);
    }

    #[test]
    fn destructible_wall_absorbs_after_breaking() {
        let mut map = open_map();
        // Pillar at (4,4); bomb to its left with range 3.
        let mut bombs = vec![Bomb::new(Position::new(3, 4), 0, 3, 0, 0)];
        let mut explosions = Vec::new();
        let mut players = [Player::new(0, Position::new(7, 7), 1, 2, 40.0)];
        map.set_tile_type(Position::new(3, 4), TileType::Bomb);
        assert_eq!(map.tile(4, 4).unwrap().tile_type, TileType::DestructibleWall);

        resolve_due_bombs(&mut map, &mut bombs, &mut explosions, &mut players, 0, &config());

        let cells: Vec<Position> = explosions.iter().map(|e| e.pos).collect();
        // Ray east reaches the wall cell and stops; (5,4) untouched.
        assert!(cells.contains(&Position::new(4, 4)));
        assert!(!cells.contains(&Position::new(5, 4)));
        assert_eq!(map.tile(4, 4).unwrap().tile_type, TileType::Explosion);
    }

    #[test]
    fn indestructible_wall_blocks_the_ray_outright() {
        let mut map = open_map();
        let mut bombs = vec![Bomb::new(Position::new(1, 1), 0, 3, 0, 0)];
        let mut explosions = Vec::new();
        let mut players = [Player::new(0, Position::new(7, 7), 1, 2, 40.0)];
        map.set_tile_type(Position::new(1, 1), TileType::Bomb);

        resolve_due_bombs(&mut map, &mut bombs, &mut explosions, &mut players, 0, &config());

        let cells: Vec<Position> = explosions.iter().map(|e| e.pos).collect();
        // North and west rays die on the border wall immediately.
        assert!(!cells.contains(&Position::new(0, 1)));
        assert!(!cells.contains(&Position::new(1, 0)));
        assert!(cells.contains(&Position::new(2, 1)));
        assert!(cells.contains(&Position::new(1, 2)));
    }

    #[test]
    fn owner_gets_capacity_back_and_score() {
        let mut map = open_map();
        let mut players = [Player::new(0, Position::new(7, 7), 1, 2, 40.0)];
        players[0].bomb_count = 1;
        let mut bombs = vec![Bomb::new(Position::new(3, 3), 0, 2, 0, 0)];
        let mut explosions = Vec::new();
        map.set_tile_type(Position::new(3, 3), TileType::Bomb);

        resolve_due_bombs(&mut map, &mut bombs, &mut explosions, &mut players, 0, &config());
        assert_eq!(players[0].bomb_count, 0);
        assert_eq!(players[0].score, config().bomb_score_bonus);
    }

    #[test]
    fn chained_bomb_resolves_in_the_same_pass() {
        let mut map = open_map();
        let mut players = [Player::new(0, Position::new(7, 7), 2, 2, 40.0)];
        players[0].bomb_count = 2;
        // Second bomb two cells east, fuse far from due.
        let mut bombs = vec![
            Bomb::new(Position::new(3, 3), 0, 2, 0, 1500),
            Bomb::new(Position::new(5, 3), 0, 2, 1400, 1500),
        ];
        let mut explosions = Vec::new();
        map.set_tile_type(Position::new(3, 3), TileType::Bomb);
        map.set_tile_type(Position::new(5, 3), TileType::Bomb);

        let count = resolve_due_bombs(&mut map, &mut bombs, &mut explosions, &mut players, 1500, &config());
        assert_eq!(count, 2);
        assert!(bombs.is_empty());
        assert_eq!(players[0].bomb_count, 0);
        // The chained bomb's own blast reaches (7,3).
        assert!(explosions.iter().any(|e| e.pos == Position::new(7, 3)));
    }

    #[test]
    fn unexpired_bombs_stay_in_the_registry() {
        let mut map = open_map();
        let mut players = [Player::new(0, Position::new(7, 7), 1, 2, 40.0)];
        let mut bombs = vec![Bomb::new(Position::new(3, 3), 0, 2, 0, 1500)];
        let mut explosions = Vec::new();
        map.set_tile_type(Position::new(3, 3), TileType::Bomb);

        let count = resolve_due_bombs(&mut map, &mut bombs, &mut explosions, &mut players, 1499, &config());
        assert_eq!(count, 0);
        assert_eq!(bombs.len(), 1);
        assert!(explosions.is_empty());
        assert!(map.has_bomb(Position::new(3, 3)));
    }

    #[test]
    fn decay_purges_only_expired_explosions() {
        let mut explosions = vec![
            Explosion::new(Position::new(1, 1), 0, 1000),
            Explosion::new(Position::new(2, 1), 600, 1000),
        ];
        assert_eq!(decay_explosions(&mut explosions, 1000), 1);
        assert_eq!(explosions.len(), 1);
        assert_eq!(explosions[0].pos, Position::new(2, 1));
    }

    #[test]
    fn hits_kill_exactly_once() {
        let mut players = [
            Player::new(0, Position::new(3, 3), 1, 2, 40.0),
            Player::new(1, Position::new(5, 5), 1, 2, 40.0),
        ];
        let explosions = vec![Explosion::new(Position::new(3, 3), 0, 1000)];

        let killed = apply_explosion_hits(&mut players, &explosions, 500);
        assert_eq!(killed, vec![0]);
        assert!(!players[0].alive);
        assert!(players[1].alive);

        // Dead players are never re-hit.
        let killed = apply_explosion_hits(&mut players, &explosions, 600);
        assert!(killed.is_empty());
    }

    #[test]
    fn expired_explosions_do_not_damage() {
        let mut players = [Player::new(0, Position::new(3, 3), 1, 2, 40.0)];
        let explosions = vec![Explosion::new(Position::new(3, 3), 0, 1000)];
        let killed = apply_explosion_hits(&mut players, &explosions, 1000);
        assert!(killed.is_empty());
        assert!(players[0].alive);
    }
}
