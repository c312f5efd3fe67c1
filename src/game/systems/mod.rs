//! Game systems module.
//!
//! Pure-ish mutation passes run by the engine: player movement and the
//! bomb/explosion lifecycle.

pub mod detonation;
pub mod movement;

pub use detonation::*;
pub use movement::*;
