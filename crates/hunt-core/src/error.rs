//! Error types for the dungeon and game session.

use thiserror::Error;

use crate::arrow::MAX_ARROW_PATH;
use crate::cave::CAVE_COUNT;
use crate::occupant::Occupant;

/// Result type for hunt operations.
pub type HuntResult<T> = Result<T, HuntError>;

/// Errors raised by validating caller input against the dungeon.
///
/// Internal state is consistent by construction, so every variant describes
/// a request that should be rejected rather than a broken game.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HuntError {
    /// A cave number outside the dungeon.
    #[error("there is no cave {0} (caves are numbered 1 to {max})", max = CAVE_COUNT)]
    InvalidCave(u32),

    /// An arrow was fired with no target caves.
    #[error("an arrow needs at least one cave to fly through")]
    EmptyArrowPath,

    /// An arrow path named more caves than an arrow can fly through.
    #[error("an arrow can fly through at most {max} caves, not {0}", max = MAX_ARROW_PATH)]
    ArrowPathTooLong(usize),

    /// A shot was attempted with an empty quiver.
    #[error("you have no arrows left")]
    OutOfArrows,

    /// An action was attempted after the game ended.
    #[error("the game is over")]
    GameOver,

    /// A query needed an occupant the dungeon does not hold.
    #[error("no {0} in the dungeon")]
    MissingOccupant(Occupant),
}
