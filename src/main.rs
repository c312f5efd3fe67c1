//! Main entry point for the standalone demo.
//!
//! Initializes logging and runs the terminal demo loop that drives the
//! simulation engine in place of a real UI layer.

use blast_grid::game::demo::game_loop::run_demo;

fn main() {
    // Initialize logger from environment variable (default to info level).
    env_logger::init();

    run_demo();
}
