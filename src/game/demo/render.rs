//! Game rendering system (terminal).
//!
//! This module provides functions to print the map and entity snapshots for
//! debugging/demo.

use crate::game::snapshot::{BombView, ExplosionView, MapView, MatchStatus, PlayerView};
use crate::game::types::TileType;

/// Print the map, players, bombs, and explosions to the terminal.
pub fn print_map(map: &MapView, players: &[PlayerView], bombs: &[BombView], explosions: &[ExplosionView]) {
    for y in 0..map.height {
        for x in 0..map.width {
            let mut symbol = match map.tile(x, y) {
                Some(TileType::Wall) => "██".to_string(),
                Some(TileType::DestructibleWall) => "▒▒".to_string(),
                Some(TileType::Bomb) => "()".to_string(),
                Some(TileType::Explosion) => "**".to_string(),
                Some(TileType::PowerUp(_)) => "+?".to_string(),
                Some(TileType::Floor) | None => "  ".to_string(),
            };

            // If a player is alive on this cell, display the player.
            if let Some(player) = players
                .iter()
                .find(|p| p.pos.x == x as i32 && p.pos.y == y as i32 && p.alive)
            {
                symbol = format!("P{}", player.id + 1);
            }
            // If no player, but a ticking bomb is present, display it.
            else if bombs.iter().any(|b| b.pos.x == x as i32 && b.pos.y == y as i32) {
                symbol = "()".to_string();
            } else if explosions.iter().any(|e| e.pos.x == x as i32 && e.pos.y == y as i32) {
                symbol = "**".to_string();
            }

            print!("{symbol}");
        }
        println!();
    }
}

/// Print the current roster and match status.
pub fn print_status(players: &[PlayerView], status: &MatchStatus) {
    for player in players {
        println!(
            "{} ({:?}): {} | score {}",
            player.name,
            player.color,
            if player.alive { "alive" } else { "dead" },
            player.score,
        );
    }
    println!("time remaining: {}", status.time_remaining);
    if status.paused {
        println!("[paused]");
    }
    if let Some(winner) = status.winner {
        println!("winner: Player {}", winner + 1);
    } else if status.over {
        println!("draw!");
    }
    println!();
}
