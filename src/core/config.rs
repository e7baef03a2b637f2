//! Engine configuration with documented constants
//!
//! All tunables are collected here with explanations of their purpose
//! and how they interact with each other.

/// Configuration for the pathfinding engine
#[derive(Debug, Clone)]
pub struct NavConfig {
    /// Optional cap on A* node expansions per query
    ///
    /// `None` (the default) runs every search to completion, matching the
    /// legacy engine: callers are responsible for bounding grid size. When
    /// set, a search that exhausts the budget reports an explicit abort
    /// instead of a normal "no path" result, so callers can tell the two
    /// apart.
    pub max_expansions: Option<usize>,

    /// Cost multiplier assumed for walkable cells with no explicit entry
    ///
    /// Applied when a navigation grid is asked for the entering cost of a
    /// cell that has no stored multiplier. The classic uniform-cost grid
    /// is this value everywhere.
    pub default_cell_cost: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            max_expansions: None,
            default_cell_cost: 1.0,
        }
    }
}

impl NavConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.default_cell_cost <= 0.0 {
            return Err(format!(
                "default_cell_cost ({}) must be strictly positive",
                self.default_cell_cost
            ));
        }

        if self.max_expansions == Some(0) {
            return Err("max_expansions of 0 would abort every search".into());
        }

        Ok(())
    }
}

// === GLOBAL CONFIG ACCESS ===

use std::sync::OnceLock;

static CONFIG: OnceLock<NavConfig> = OnceLock::new();

/// Get the global engine config (initializes with defaults if not set)
pub fn config() -> &'static NavConfig {
    CONFIG.get_or_init(NavConfig::default)
}

/// Set the global engine config (can only be called once)
///
/// Returns Err if config was already set.
pub fn set_config(config: NavConfig) -> Result<(), NavConfig> {
    CONFIG.set(config)
}
