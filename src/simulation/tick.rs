//! Tick system - cooperative frame glue for the pathfinding engine
//!
//! The frame loop drives the engine exactly once per tick, purely for the
//! lazy grid-capture side effect. Queries themselves never go through the
//! tick: gameplay and AI code call the engine synchronously, on demand.

use crate::nav::engine::PathfindingEngine;
use crate::world::World;

/// Events generated during a frame tick
///
/// Returned by `run_tick` for callers that surface engine state changes
/// (debug overlays, logs).
#[derive(Debug, Clone, Default)]
pub struct TickEvents {
    /// The engine captured its navigation grid this tick
    pub grid_captured: bool,
}

/// Advance the world one tick and drive the engine's lazy discovery
pub fn run_tick(world: &mut World, engine: &mut PathfindingEngine) -> TickEvents {
    let had_grid = engine.grid().is_some();

    engine.on_tick(world);

    let events = TickEvents {
        grid_captured: !had_grid && engine.grid().is_some(),
    };
    if events.grid_captured {
        tracing::debug!("engine bound to navigation grid on tick {}", world.current_tick);
    }

    world.tick();
    events
}
