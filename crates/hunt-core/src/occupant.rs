//! Things that can occupy a cave.

use serde::{Deserialize, Serialize};

/// Warning shown when no neighboring cave holds a hazard.
pub const NOTHING_NEARBY: &str = "I don't sense anything nearby.";

/// An occupant of a cave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Occupant {
    /// The hunter.
    Player,
    /// The wumpus, asleep until disturbed.
    Wumpus,
    /// A bottomless pit.
    Pit,
    /// A colony of super bats.
    Bat,
}

impl Occupant {
    /// What the player senses when this occupant is one tunnel away.
    ///
    /// The player is not a hazard and gives no warning.
    pub fn warning(self) -> Option<&'static str> {
        match self {
            Self::Player => None,
            Self::Wumpus => Some("I smell a wumpus."),
            Self::Pit => Some("I feel a draft."),
            Self::Bat => Some("I can hear bats nearby."),
        }
    }

    /// Whether entering a cave with this occupant triggers something.
    pub fn is_hazard(self) -> bool {
        !matches!(self, Self::Player)
    }
}

impl std::fmt::Display for Occupant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Player => write!(f, "player"),
            Self::Wumpus => write!(f, "wumpus"),
            Self::Pit => write!(f, "pit"),
            Self::Bat => write!(f, "bat"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hazards_warn() {
        assert_eq!(Occupant::Wumpus.warning(), Some("I smell a wumpus."));
        assert_eq!(Occupant::Pit.warning(), Some("I feel a draft."));
        assert_eq!(Occupant::Bat.warning(), Some("I can hear bats nearby."));
        assert_eq!(Occupant::Player.warning(), None);
    }

    #[test]
    fn only_player_is_harmless() {
        assert!(!Occupant::Player.is_hazard());
        assert!(Occupant::Wumpus.is_hazard());
        assert!(Occupant::Pit.is_hazard());
        assert!(Occupant::Bat.is_hazard());
    }
}
