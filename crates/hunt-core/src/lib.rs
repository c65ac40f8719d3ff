//! Dungeon state machine for Hunt the Wumpus.
//!
//! Twenty caves on a dodecahedron, a sleeping wumpus, two bottomless pits,
//! two colonies of super bats, and a hunter with five crooked arrows. This
//! crate owns the cave graph, entity placement and movement, hazard
//! warnings, and arrow flight. [`Game`] strings them together into turns;
//! presentation is left to the caller.

/// Crooked arrow paths and flight resolution.
pub mod arrow;
/// Validated cave identifiers.
pub mod cave;
/// Game configuration.
pub mod config;
/// Per-game cave contents and movement.
pub mod dungeon;
/// Error types for the crate.
pub mod error;
/// Turn orchestration and terminal outcomes.
pub mod game;
/// The fixed dodecahedron cave graph.
pub mod graph;
/// Cave occupants and the warnings they give off.
pub mod occupant;
/// The hunter's quiver.
pub mod player;
/// Injectable random source.
pub mod random;

pub use arrow::{ArrowFlight, ArrowOutcome, ArrowPath, MAX_ARROW_PATH, resolve_arrow_path};
pub use cave::{CAVE_COUNT, CaveId};
pub use config::GameConfig;
pub use dungeon::{Cave, Dungeon};
pub use error::{HuntError, HuntResult};
pub use game::{Game, GameOver, GameView, Turn, TurnEvent};
pub use occupant::{NOTHING_NEARBY, Occupant};
pub use player::{Player, STARTING_ARROWS};
pub use random::CaveRandom;
