//! The random source behind every chance event in the dungeon.
//!
//! Any [`rand::Rng`] works as a [`CaveRandom`]; games normally run on a
//! seeded [`rand::rngs::StdRng`]. Tests can substitute a scripted source to
//! pin down bat drops, wumpus moves and deflections.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::cave::CaveId;

/// One draw in this many finds the wumpus alert.
pub const WAKE_ODDS: u32 = 4;

/// Source of the random choices the dungeon makes.
pub trait CaveRandom {
    /// A uniformly chosen index in `0..len`. `len` is never zero.
    fn pick_index(&mut self, len: usize) -> usize;

    /// Shuffle cave ids in place, uniformly over all orderings.
    fn shuffle_caves(&mut self, caves: &mut [CaveId]);

    /// Wake check: `true` with probability `1 / WAKE_ODDS`.
    fn wumpus_alert(&mut self) -> bool;
}

impl<R: Rng> CaveRandom for R {
    fn pick_index(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }

    fn shuffle_caves(&mut self, caves: &mut [CaveId]) {
        caves.shuffle(self);
    }

    fn wumpus_alert(&mut self) -> bool {
        self.random_ratio(1, WAKE_ODDS)
    }
}

/// A [`CaveRandom`] that replays fixed answers.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct Scripted {
    picks: std::collections::VecDeque<usize>,
    alerts: std::collections::VecDeque<bool>,
    layout: Vec<CaveId>,
}

#[cfg(test)]
impl Scripted {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Indices returned by `pick_index`, reduced modulo `len`. Zero once exhausted.
    pub(crate) fn with_picks(mut self, picks: impl IntoIterator<Item = usize>) -> Self {
        self.picks.extend(picks);
        self
    }

    /// Answers for `wumpus_alert`. `false` once exhausted.
    pub(crate) fn with_alerts(mut self, alerts: impl IntoIterator<Item = bool>) -> Self {
        self.alerts.extend(alerts);
        self
    }

    /// Caves that a shuffle moves to the front, in this order.
    pub(crate) fn with_layout(mut self, caves: &[u32]) -> Self {
        self.layout = caves
            .iter()
            .map(|&n| CaveId::new(n).unwrap())
            .collect();
        self
    }
}

#[cfg(test)]
impl CaveRandom for Scripted {
    fn pick_index(&mut self, len: usize) -> usize {
        self.picks.pop_front().unwrap_or(0) % len
    }

    fn shuffle_caves(&mut self, caves: &mut [CaveId]) {
        for (slot, cave) in self.layout.iter().enumerate() {
            if let Some(pos) = caves.iter().position(|c| c == cave) {
                caves.swap(slot, pos);
            }
        }
    }

    fn wumpus_alert(&mut self) -> bool {
        self.alerts.pop_front().unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn pick_index_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            assert!(rng.pick_index(3) < 3);
            assert!(rng.pick_index(19) < 19);
        }
    }

    #[test]
    fn shuffle_keeps_every_cave() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut caves: Vec<CaveId> = CaveId::all().collect();
        rng.shuffle_caves(&mut caves);
        let mut sorted = caves.clone();
        sorted.sort();
        assert_eq!(sorted, CaveId::all().collect::<Vec<_>>());
    }

    #[test]
    fn wumpus_is_alert_about_a_quarter_of_the_time() {
        let mut rng = StdRng::seed_from_u64(99);
        let alert = (0..4000).filter(|_| rng.wumpus_alert()).count();
        assert!((800..1200).contains(&alert), "alert {alert} times out of 4000");
    }

    #[test]
    fn same_seed_same_choices() {
        let mut a = StdRng::seed_from_u64(5);
        let mut b = StdRng::seed_from_u64(5);
        let xs: Vec<usize> = (0..20).map(|_| a.pick_index(3)).collect();
        let ys: Vec<usize> = (0..20).map(|_| b.pick_index(3)).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn scripted_layout_moves_caves_to_front() {
        let mut source = Scripted::new().with_layout(&[5, 1, 20]);
        let mut caves: Vec<CaveId> = CaveId::all().collect();
        source.shuffle_caves(&mut caves);
        let front: Vec<u32> = caves[..3].iter().map(|c| c.get()).collect();
        assert_eq!(front, vec![5, 1, 20]);
    }
}
