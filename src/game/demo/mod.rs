// Demo module for the game. Provides the terminal input loop and the ASCII
// renderer used when running the engine standalone.
pub mod game_loop;
pub mod render;
