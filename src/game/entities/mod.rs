//! Game entities module.
//!
//! This module organizes player, bomb, and explosion entity logic.

pub mod bomb;
pub mod explosion;
pub mod player;

pub use bomb::*;
pub use explosion::*;
pub use player::*;
