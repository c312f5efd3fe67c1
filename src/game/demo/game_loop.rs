//! Standalone game loop for local testing/demo.
//!
//! This module provides an interactive loop for playing the engine in the
//! terminal. It stands in for the excluded UI layer: it maps keystrokes to
//! commands, advances the simulation a fixed amount per input, and prints
//! snapshots. The simulated clock only moves when a turn is taken, so a
//! bomb's 1500 ms fuse elapses after a few inputs.

use std::io::{self, Write};
use std::time::Duration;

use crate::config::game::GameConfig;
use crate::game::demo::render::{print_map, print_status};
use crate::game::engine::GameEngine;
use crate::game::types::PlayerId;

/// Simulated time advanced per accepted input.
const STEP_MS: u64 = 250;
/// Tick granularity while advancing.
const TICK_MS: u64 = 10;

enum DemoInput {
    Move(i32, i32),
    Bomb,
    Pause,
    Dump,
    Quit,
    None,
}

fn get_player_input() -> DemoInput {
    print!("Move with zqsd/wasd, b = bomb, p = pause, j = dump json, x = quit, then press Enter: ");
    io::stdout().flush().unwrap();

    let mut input = String::new();
    io::stdin().read_line(&mut input).unwrap();

    match input.trim() {
        "z" | "w" => DemoInput::Move(0, -1),
        "s" => DemoInput::Move(0, 1),
        "q" | "a" => DemoInput::Move(-1, 0),
        "d" => DemoInput::Move(1, 0),
        "b" => DemoInput::Bomb,
        "p" => DemoInput::Pause,
        "j" => DemoInput::Dump,
        "x" => DemoInput::Quit,
        _ => DemoInput::None,
    }
}

/// Run the demo loop: player 0 is on the keyboard, the rest of the roster
/// just stands there.
pub fn run_demo() {
    let player_id: PlayerId = 0;
    let mut engine = GameEngine::new(GameConfig::default());
    engine.initialize_game(2).expect("demo player count is in range");

    println!("Game start!");
    print_map(&engine.map_view(), &engine.player_views(), &engine.bomb_views(), &engine.explosion_views());
    print_status(&engine.player_views(), &engine.match_status());

    loop {
        match get_player_input() {
            DemoInput::Move(dx, dy) => {
                if let Err(err) = engine.move_player(player_id, dx, dy) {
                    println!("move rejected: {err}");
                }
            }
            DemoInput::Bomb => {
                if let Err(err) = engine.place_bomb(player_id) {
                    println!("bomb rejected: {err}");
                }
            }
            DemoInput::Pause => engine.toggle_pause(),
            DemoInput::Dump => {
                match serde_json::to_string_pretty(&engine.match_status()) {
                    Ok(text) => println!("{text}"),
                    Err(err) => println!("failed to serialize status: {err}"),
                }
                continue;
            }
            DemoInput::Quit => break,
            DemoInput::None => {}
        }

        // Advance the simulation by one turn's worth of ticks.
        for _ in 0..(STEP_MS / TICK_MS) {
            engine.update(Duration::from_millis(TICK_MS));
        }

        print_map(&engine.map_view(), &engine.player_views(), &engine.bomb_views(), &engine.explosion_views());
        print_status(&engine.player_views(), &engine.match_status());

        if engine.match_status().over {
            println!("Game Over!");
            break;
        }
    }
}
