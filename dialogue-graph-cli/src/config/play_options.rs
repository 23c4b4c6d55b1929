//! Optional overrides for a play session (CLI args or programmatic).
//!
//! Used by [`PlayConfig::apply_options`](super::PlayConfig::apply_options) and
//! [`play`](crate::play). Only set fields override the env-based config.

use std::path::PathBuf;

/// Optional overrides: line delay, step budget and world file.
#[derive(Clone, Debug, Default)]
pub struct PlayOptions {
    /// Pause after each dialogue line, in milliseconds.
    pub line_delay_ms: Option<u64>,
    /// Maximum number of node evaluations before the walk is stopped.
    pub max_steps: Option<usize>,
    /// World file with characters, quests and inventory.
    pub world: Option<PathBuf>,
}
