//! Crooked arrows.
//!
//! The hunter names up to five caves and the arrow tries to fly through
//! them in order. Each hop must follow a tunnel out of the cave the arrow is
//! in. When it cannot, the arrow glances off the rock into a random
//! neighboring cave and stops there. An arrow that reaches the hunter's own
//! cave hits the hunter; one that reaches the wumpus kills it.

use serde::{Deserialize, Serialize};

use crate::cave::CaveId;
use crate::dungeon::Dungeon;
use crate::error::{HuntError, HuntResult};
use crate::random::CaveRandom;

/// Most caves an arrow can be aimed through.
pub const MAX_ARROW_PATH: usize = 5;

/// The caves a shot is aimed through, 1 to [`MAX_ARROW_PATH`] of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrowPath(Vec<CaveId>);

impl ArrowPath {
    /// Validate raw cave numbers from the hunter.
    pub fn new(caves: &[u32]) -> HuntResult<Self> {
        let caves = caves
            .iter()
            .map(|&n| CaveId::new(n))
            .collect::<HuntResult<Vec<_>>>()?;
        Self::from_caves(caves)
    }

    /// Wrap already validated caves, checking only the length.
    pub fn from_caves(caves: Vec<CaveId>) -> HuntResult<Self> {
        match caves.len() {
            0 => Err(HuntError::EmptyArrowPath),
            n if n > MAX_ARROW_PATH => Err(HuntError::ArrowPathTooLong(n)),
            _ => Ok(Self(caves)),
        }
    }

    /// The target caves in order.
    pub fn caves(&self) -> &[CaveId] {
        &self.0
    }
}

/// How a shot ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArrowOutcome {
    /// The arrow found the wumpus.
    WumpusHit,
    /// The arrow came back around to the hunter.
    SelfHit,
    /// The arrow hit nothing.
    Miss,
}

/// What an arrow did on its way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrowFlight {
    /// How the shot ended.
    pub outcome: ArrowOutcome,
    /// Caves the arrow entered, in order.
    pub visited: Vec<CaveId>,
    /// Whether the arrow glanced off into a random cave.
    pub deflected: bool,
}

/// Fly an arrow from `player_cave` along `path`.
///
/// Naming the hunter's own cave first drops the arrow at their feet. Any
/// other target that is not a tunnel out of the current cave, including the
/// current cave named again mid-flight, deflects the arrow into a random
/// neighbor, where it is checked for a hit once and then falls. Remaining
/// targets are ignored.
pub fn resolve_arrow_path<R: CaveRandom + ?Sized>(
    path: &ArrowPath,
    player_cave: CaveId,
    dungeon: &Dungeon,
    rng: &mut R,
) -> ArrowFlight {
    let wumpus = dungeon.wumpus_location();
    let hit_in = |cave: CaveId| {
        if cave == player_cave {
            Some(ArrowOutcome::SelfHit)
        } else if Some(cave) == wumpus {
            Some(ArrowOutcome::WumpusHit)
        } else {
            None
        }
    };

    let mut current = player_cave;
    let mut visited = Vec::with_capacity(path.caves().len());

    for &target in path.caves() {
        let in_place = target == current && current == player_cave;
        let deflected = !in_place && !dungeon.is_adjacent(current, target);
        current = if deflected {
            dungeon.random_adjacent_cave(current, rng)
        } else {
            target
        };
        visited.push(current);

        let outcome = hit_in(current);
        if outcome.is_some() || deflected {
            let flight = ArrowFlight {
                outcome: outcome.unwrap_or(ArrowOutcome::Miss),
                visited,
                deflected,
            };
            tracing::debug!(?flight, "arrow landed");
            return flight;
        }
    }

    let flight = ArrowFlight {
        outcome: ArrowOutcome::Miss,
        visited,
        deflected: false,
    };
    tracing::debug!(?flight, "arrow landed");
    flight
}
