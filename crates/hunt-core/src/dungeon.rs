//! The dungeon: who is in which cave, and how they move.
//!
//! Each cave keeps an ordered list of occupants. Pits and bats come in
//! pairs, so the list is a multiset rather than a set. When two hazards end
//! up sharing a cave, whichever arrived first is the one reported by
//! [`Dungeon::hazard_at_player_location`]; no priority rule applies.

use serde::{Deserialize, Serialize};

use crate::cave::{CAVE_COUNT, CaveId};
use crate::error::{HuntError, HuntResult};
use crate::graph;
use crate::occupant::{NOTHING_NEARBY, Occupant};
use crate::random::CaveRandom;

/// Occupants placed by a fresh population, one per cave, in draw order.
pub const POPULATION: [Occupant; 6] = [
    Occupant::Player,
    Occupant::Wumpus,
    Occupant::Pit,
    Occupant::Pit,
    Occupant::Bat,
    Occupant::Bat,
];

/// Read-only view of a single cave.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cave<'a> {
    /// The cave number.
    pub id: CaveId,
    /// Caves joined to this one by a tunnel, in table order.
    pub adjacent: [CaveId; 3],
    /// Occupants in arrival order.
    pub contents: &'a [Occupant],
}

impl Cave<'_> {
    /// Whether nothing occupies this cave.
    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    /// Whether at least one `occupant` is here.
    pub fn holds(&self, occupant: Occupant) -> bool {
        self.contents.contains(&occupant)
    }
}

/// Per-game state of all twenty caves.
///
/// Tunnels come from the fixed [`graph`]; only the contents are stored, so
/// a serialized dungeon cannot carry a corrupted map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dungeon {
    contents: [Vec<Occupant>; CAVE_COUNT],
}

impl Dungeon {
    /// A freshly populated dungeon.
    pub fn new<R: CaveRandom + ?Sized>(rng: &mut R) -> Self {
        let mut dungeon = Self::empty();
        dungeon.populate(rng);
        dungeon
    }

    /// Twenty caves with nobody in them.
    pub fn empty() -> Self {
        Self {
            contents: std::array::from_fn(|_| Vec::new()),
        }
    }

    /// Clear every cave and populate again.
    pub fn reset<R: CaveRandom + ?Sized>(&mut self, rng: &mut R) {
        for cave in &mut self.contents {
            cave.clear();
        }
        self.populate(rng);
    }

    /// Draw six distinct caves and drop one occupant of [`POPULATION`] in each.
    fn populate<R: CaveRandom + ?Sized>(&mut self, rng: &mut R) {
        let mut order: Vec<CaveId> = CaveId::all().collect();
        rng.shuffle_caves(&mut order);

        for (cave, occupant) in order.into_iter().zip(POPULATION) {
            self.place(occupant, cave);
        }
        tracing::debug!(
            player = ?self.location_of(Occupant::Player),
            wumpus = ?self.location_of(Occupant::Wumpus),
            pits = ?self.locations_of(Occupant::Pit),
            bats = ?self.locations_of(Occupant::Bat),
            "dungeon populated"
        );
    }

    /// Append `occupant` to a cave's contents.
    pub fn place(&mut self, occupant: Occupant, cave: CaveId) {
        self.contents[cave.index()].push(occupant);
    }

    /// View a single cave.
    pub fn cave(&self, id: CaveId) -> Cave<'_> {
        Cave {
            id,
            adjacent: graph::adjacent_caves(id),
            contents: &self.contents[id.index()],
        }
    }

    /// View every cave in ascending order.
    pub fn caves(&self) -> impl Iterator<Item = Cave<'_>> {
        CaveId::all().map(|id| self.cave(id))
    }

    /// The first cave, in ascending order, holding `occupant`.
    ///
    /// There are two pits and two bats; this finds only one of them. Use
    /// [`Dungeon::locations_of`] to see both.
    pub fn location_of(&self, occupant: Occupant) -> Option<CaveId> {
        self.caves().find(|c| c.holds(occupant)).map(|c| c.id)
    }

    /// Every cave holding `occupant`, in ascending order.
    pub fn locations_of(&self, occupant: Occupant) -> Vec<CaveId> {
        self.caves()
            .filter(|c| c.holds(occupant))
            .map(|c| c.id)
            .collect()
    }

    /// The player's cave.
    pub fn player_location(&self) -> HuntResult<CaveId> {
        self.location_of(Occupant::Player)
            .ok_or(HuntError::MissingOccupant(Occupant::Player))
    }

    /// The wumpus's cave, if there is a wumpus.
    pub fn wumpus_location(&self) -> Option<CaveId> {
        self.location_of(Occupant::Wumpus)
    }

    /// Whether `b` is one of `a`'s tunnels.
    pub fn is_adjacent(&self, a: CaveId, b: CaveId) -> bool {
        graph::is_adjacent(a, b)
    }

    /// One of `cave`'s three neighbors, uniformly.
    pub fn random_adjacent_cave<R: CaveRandom + ?Sized>(
        &self,
        cave: CaveId,
        rng: &mut R,
    ) -> CaveId {
        let adjacent = graph::adjacent_caves(cave);
        adjacent[rng.pick_index(adjacent.len())]
    }

    /// Move one `occupant` from `from` to `to`.
    ///
    /// Does nothing and returns `false` when `occupant` is not at `from`.
    pub fn move_entity(&mut self, occupant: Occupant, from: CaveId, to: CaveId) -> bool {
        let source = &mut self.contents[from.index()];
        let Some(pos) = source.iter().position(|&o| o == occupant) else {
            return false;
        };
        source.remove(pos);
        self.contents[to.index()].push(occupant);
        true
    }

    /// Tunnels out of the player's cave.
    pub fn player_adjacent_caves(&self) -> HuntResult<[CaveId; 3]> {
        Ok(graph::adjacent_caves(self.player_location()?))
    }

    /// Walk the player to `requested` if a tunnel leads there.
    ///
    /// Returns whether the player moved. A cave that is not adjacent leaves
    /// the player where they are.
    pub fn move_player(&mut self, requested: CaveId) -> HuntResult<bool> {
        let from = self.player_location()?;
        if !graph::is_adjacent(from, requested) {
            tracing::debug!(%from, %requested, "move rejected: no tunnel");
            return Ok(false);
        }
        self.move_entity(Occupant::Player, from, requested);
        tracing::debug!(%from, to = %requested, "player moved");
        Ok(true)
    }

    /// Drop the player in any other cave, uniformly. Returns the new cave.
    pub fn teleport_player_randomly<R: CaveRandom + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> HuntResult<CaveId> {
        let from = self.player_location()?;
        let others: Vec<CaveId> = CaveId::all().filter(|&c| c != from).collect();
        let to = others[rng.pick_index(others.len())];
        self.move_entity(Occupant::Player, from, to);
        tracing::debug!(%from, %to, "bats carried the player");
        Ok(to)
    }

    /// Move the wumpus through one of its tunnels. Returns the new cave.
    pub fn move_wumpus_randomly<R: CaveRandom + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> HuntResult<CaveId> {
        let from = self
            .wumpus_location()
            .ok_or(HuntError::MissingOccupant(Occupant::Wumpus))?;
        let to = self.random_adjacent_cave(from, rng);
        self.move_entity(Occupant::Wumpus, from, to);
        tracing::debug!(%from, %to, "wumpus moved");
        Ok(to)
    }

    /// The first hazard, in arrival order, sharing the player's cave.
    pub fn hazard_at_player_location(&self) -> HuntResult<Option<Occupant>> {
        let here = self.player_location()?;
        Ok(self
            .cave(here)
            .contents
            .iter()
            .copied()
            .find(|o| o.is_hazard()))
    }

    /// Warnings for hazards one tunnel away from the player.
    ///
    /// Each distinct warning appears once, in tunnel order then arrival
    /// order. With nothing nearby the list holds only [`NOTHING_NEARBY`].
    pub fn nearby_hazard_warnings(&self) -> HuntResult<Vec<&'static str>> {
        let mut warnings = Vec::new();
        for cave in self.player_adjacent_caves()? {
            for warning in self.cave(cave).contents.iter().filter_map(|o| o.warning()) {
                if !warnings.contains(&warning) {
                    warnings.push(warning);
                }
            }
        }
        if warnings.is_empty() {
            warnings.push(NOTHING_NEARBY);
        }
        Ok(warnings)
    }
}
