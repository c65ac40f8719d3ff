//! Cave identifiers.

use serde::{Deserialize, Serialize};

use crate::error::{HuntError, HuntResult};

/// Number of caves in the dungeon.
pub const CAVE_COUNT: usize = 20;

/// A cave number, always within `1..=20`.
///
/// Raw numbers from user input go through [`CaveId::new`], so an
/// out-of-range id is rejected before it reaches the graph or the dungeon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct CaveId(u8);

impl CaveId {
    /// Validate a raw cave number.
    pub fn new(number: u32) -> HuntResult<Self> {
        if (1..=CAVE_COUNT as u32).contains(&number) {
            Ok(Self(number as u8))
        } else {
            Err(HuntError::InvalidCave(number))
        }
    }

    /// Build an id from a number already known to be in range.
    pub(crate) const fn known(number: u8) -> Self {
        Self(number)
    }

    /// The cave number.
    pub fn get(self) -> u32 {
        u32::from(self.0)
    }

    /// Zero-based position in the cave table.
    pub(crate) fn index(self) -> usize {
        usize::from(self.0 - 1)
    }

    /// Every cave, in ascending order.
    pub fn all() -> impl Iterator<Item = CaveId> {
        (1..=CAVE_COUNT as u8).map(Self)
    }
}

impl TryFrom<u32> for CaveId {
    type Error = HuntError;

    fn try_from(number: u32) -> HuntResult<Self> {
        Self::new(number)
    }
}

impl From<CaveId> for u32 {
    fn from(cave: CaveId) -> Self {
        cave.get()
    }
}

impl std::fmt::Display for CaveId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_every_cave_number() {
        for n in 1..=20 {
            assert_eq!(CaveId::new(n).unwrap().get(), n);
        }
    }

    #[test]
    fn rejects_out_of_range() {
        assert_eq!(CaveId::new(0), Err(HuntError::InvalidCave(0)));
        assert_eq!(CaveId::new(21), Err(HuntError::InvalidCave(21)));
        assert_eq!(CaveId::new(u32::MAX), Err(HuntError::InvalidCave(u32::MAX)));
    }

    #[test]
    fn all_is_ordered_and_complete() {
        let ids: Vec<u32> = CaveId::all().map(CaveId::get).collect();
        assert_eq!(ids, (1..=20).collect::<Vec<_>>());
    }

    #[test]
    fn deserialize_validates() {
        let cave: CaveId = serde_json::from_str("7").unwrap();
        assert_eq!(cave.get(), 7);
        assert!(serde_json::from_str::<CaveId>("42").is_err());
        assert_eq!(serde_json::to_string(&cave).unwrap(), "7");
    }
}
