//! Settings chosen before entering the caves.

use serde::{Deserialize, Serialize};

use crate::player::STARTING_ARROWS;

/// How a new hunt is set up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Seed for the dungeon layout and every later draw. `None` seeds from
    /// the operating system.
    pub seed: Option<u64>,
    /// Arrows in the quiver at the start, never less than one.
    pub arrows: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            arrows: STARTING_ARROWS,
        }
    }
}

impl GameConfig {
    /// Replay the same dungeon and the same luck.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Start with `arrows` in the quiver. Zero is raised to one, since a hunt
    /// with an empty quiver is already lost.
    pub fn with_arrows(mut self, arrows: u32) -> Self {
        self.arrows = arrows.max(1);
        self
    }
}
