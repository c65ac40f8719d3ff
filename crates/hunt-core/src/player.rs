//! The hunter's quiver.

use serde::{Deserialize, Serialize};

/// Arrows in the quiver at the start of a game.
pub const STARTING_ARROWS: u32 = 5;

/// Arrow bookkeeping for the player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    arrows: u32,
}

impl Player {
    /// A player with a full quiver.
    pub fn new() -> Self {
        Self::with_arrows(STARTING_ARROWS)
    }

    /// A player carrying `arrows`.
    pub fn with_arrows(arrows: u32) -> Self {
        Self { arrows }
    }

    /// Spend one arrow. Check [`Player::is_out_of_arrows`] first.
    pub fn use_arrow(&mut self) {
        self.arrows = self.arrows.saturating_sub(1);
    }

    /// Whether the quiver is empty.
    pub fn is_out_of_arrows(&self) -> bool {
        self.arrows < 1
    }

    /// Arrows left.
    pub fn remaining_arrows(&self) -> u32 {
        self.arrows
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_five_arrows() {
        let player = Player::new();
        assert_eq!(player.remaining_arrows(), 5);
        assert!(!player.is_out_of_arrows());
    }

    #[test]
    fn each_shot_costs_one_arrow() {
        let mut player = Player::new();
        for left in (0..5).rev() {
            player.use_arrow();
            assert_eq!(player.remaining_arrows(), left);
        }
        assert!(player.is_out_of_arrows());
    }

    #[test]
    fn custom_quiver() {
        assert_eq!(Player::with_arrows(2).remaining_arrows(), 2);
        assert!(Player::with_arrows(0).is_out_of_arrows());
    }

    #[test]
    fn empty_quiver_stays_empty() {
        let mut player = Player::new();
        for _ in 0..7 {
            player.use_arrow();
        }
        assert_eq!(player.remaining_arrows(), 0);
    }
}
