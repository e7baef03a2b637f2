pub mod tick;

pub use tick::{run_tick, TickEvents};
