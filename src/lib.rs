//! Tacnav - grid-based tactical pathfinding engine

pub mod core;
pub mod nav;
pub mod simulation;
pub mod world;
