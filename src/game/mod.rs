pub mod clock;
pub mod engine;
pub mod entities;
pub mod map;
pub mod match_state;
pub mod shared;
pub mod snapshot;
pub mod types;

pub mod demo;
pub mod systems;
