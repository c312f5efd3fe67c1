//! Player movement system.
//!
//! Validates and applies single-cell cardinal steps. Invalid moves are
//! rejected without any state change.

use crate::error::CommandError;
use crate::game::entities::Player;
use crate::game::map::GameMap;
use crate::game::types::{Direction, Position, TileType};

/// Attempt to step the player by (dx, dy). The step must be one of the four
/// cardinal unit offsets; the target must be in bounds, walkable, and free
/// of bombs. On success the grid and pixel positions update together.
pub fn move_player(
    map: &GameMap,
    player: &mut Player,
    dx: i32,
    dy: i32,
    tile_size: f32,
) -> Result<Position, CommandError> {
    if Direction::from_delta(dx, dy).is_none() {
        return Err(CommandError::InvalidStep);
    }
    if !player.alive {
        return Err(CommandError::PlayerDead(player.id));
    }

    let target = player.pos.offset(dx, dy);
    if !map.is_valid_position(target.x, target.y) {
        return Err(CommandError::OutOfBounds);
    }
    if !map.is_walkable(target) {
        return Err(CommandError::Blocked);
    }
    // An un-detonated bomb blocks entry regardless of tile walkability.
    if map.has_bomb(target) {
        return Err(CommandError::TileOccupied);
    }

    player.move_to(target, tile_size);
    Ok(target)
}

/// Consume a power-up under the player, if any. Returns true on pickup.
pub fn collect_powerup(map: &mut GameMap, player: &mut Player) -> bool {
    match map.tile_at(player.pos).map(|t| t.tile_type) {
        Some(TileType::PowerUp(kind)) => {
            player.apply_powerup(kind);
            map.set_tile_type(player.pos, TileType::Floor);
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::map::GameMap;
    use crate::game::types::PowerUpKind;

    fn setup() -> (GameMap, Player) {
        let spawns = GameMap::default_spawn_corners(15, 13);
        let map = GameMap::checkerboard(15, 13, &spawns);
        let player = Player::new(0, Position::new(1, 1), 1, 2, 40.0);
        (map, player)
    }

    #[test]
    fn valid_step_moves_the_player() {
        let (map, mut player) = setup();
        assert_eq!(move_player(&map, &mut player, 1, 0, 40.0), Ok(Position::new(2, 1)));
        assert_eq!(player.pixel_pos, (80.0, 40.0));
    }

    #[test]
    fn diagonal_and_multi_cell_steps_are_rejected() {
        let (map, mut player) = setup();
        assert_eq!(move_player(&map, &mut player, 1, 1, 40.0), Err(CommandError::InvalidStep));
        assert_eq!(move_player(&map, &mut player, 2, 0, 40.0), Err(CommandError::InvalidStep));
        assert_eq!(move_player(&map, &mut player, 0, 0, 40.0), Err(CommandError::InvalidStep));
        assert_eq!(player.pos, Position::new(1, 1));
    }

    #[test]
    fn walls_block_movement() {
        let (map, mut player) = setup();
        // (1,0) is border wall, (2,2) is a destructible pillar.
        assert_eq!(move_player(&map, &mut player, 0, -1, 40.0), Err(CommandError::Blocked));
        player.move_to(Position::new(2, 1), 40.0);
        assert_eq!(move_player(&map, &mut player, 0, 1, 40.0), Err(CommandError::Blocked));
    }

    #[test]
    fn bombs_block_movement_even_on_walkable_tiles() {
        let (mut map, mut player) = setup();
        assert!(map.place_bomb_tile(Position::new(2, 1)));
        assert_eq!(move_player(&map, &mut player, 1, 0, 40.0), Err(CommandError::TileOccupied));
        assert_eq!(player.pos, Position::new(1, 1));
    }

    #[test]
    fn dead_players_cannot_move() {
        let (map, mut player) = setup();
        player.kill();
        assert_eq!(move_player(&map, &mut player, 1, 0, 40.0), Err(CommandError::PlayerDead(0)));
    }

    #[test]
    fn powerup_is_consumed_on_pickup() {
        let (mut map, mut player) = setup();
        map.set_tile_type(Position::new(2, 1), TileType::PowerUp(PowerUpKind::ExtraBomb));
        assert!(move_player(&map, &mut player, 1, 0, 40.0).is_ok());
        assert!(collect_powerup(&mut map, &mut player));
        assert_eq!(player.max_bombs, 2);
        assert_eq!(map.tile_at(player.pos).unwrap().tile_type, TileType::Floor);
        assert!(!collect_powerup(&mut map, &mut player));
    }
}
