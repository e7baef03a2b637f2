//! World state the engine discovers navigation data from

pub mod nav_world;

pub use nav_world::{Entity, World};
