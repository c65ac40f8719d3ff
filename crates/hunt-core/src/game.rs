//! A single hunt, from entering the dungeon to the last arrow.
//!
//! `Game` holds the dungeon, the player's quiver and the random source, and
//! applies the consequences of each action: hazards on arrival, bats that
//! carry the hunter off, a wumpus that may wake when an arrow misses.

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::arrow::{ArrowFlight, ArrowOutcome, ArrowPath, resolve_arrow_path};
use crate::cave::CaveId;
use crate::config::GameConfig;
use crate::dungeon::Dungeon;
use crate::error::{HuntError, HuntResult};
use crate::occupant::Occupant;
use crate::player::{Player, STARTING_ARROWS};
use crate::random::CaveRandom;

/// How a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameOver {
    /// Walked into the wumpus while it was alert.
    WumpusCaught,
    /// Walked into a bottomless pit.
    PitFall,
    /// Shot by one's own arrow.
    SelfShot,
    /// The quiver ran dry.
    OutOfArrows,
    /// A missed arrow woke the wumpus and it walked into the hunter's cave.
    WumpusWoke,
    /// The wumpus is dead.
    WumpusKilled,
}

impl GameOver {
    /// Whether the hunter won.
    pub fn is_victory(self) -> bool {
        matches!(self, Self::WumpusKilled)
    }
}

impl std::fmt::Display for GameOver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WumpusCaught => write!(f, "wumpus caught you"),
            Self::PitFall => write!(f, "fell into a pit"),
            Self::SelfShot => write!(f, "shot yourself"),
            Self::OutOfArrows => write!(f, "out of arrows"),
            Self::WumpusWoke => write!(f, "wumpus woke"),
            Self::WumpusKilled => write!(f, "wumpus killed"),
        }
    }
}

/// Something that happened during a turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnEvent {
    /// The hunter walked through a tunnel.
    Moved {
        /// Cave left behind.
        from: CaveId,
        /// Cave entered.
        to: CaveId,
    },
    /// No tunnel leads to the requested cave.
    MoveRejected {
        /// The cave asked for.
        requested: CaveId,
    },
    /// Super bats picked the hunter up and dropped them elsewhere.
    CarriedByBats {
        /// The bat cave.
        from: CaveId,
        /// Where the hunter was dropped.
        to: CaveId,
    },
    /// The hunter bumped the sleeping wumpus and it shuffled away.
    WumpusFled {
        /// The cave the wumpus left.
        from: CaveId,
        /// The cave it moved to.
        to: CaveId,
    },
    /// An arrow was fired.
    ArrowFlew(ArrowFlight),
    /// A missed arrow woke the wumpus and it moved.
    WumpusStirred {
        /// The cave the wumpus left.
        from: CaveId,
        /// The cave it moved to.
        to: CaveId,
    },
}

/// The result of one action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    /// What happened, in order.
    pub events: Vec<TurnEvent>,
    /// Set when this turn ended the game.
    pub game_over: Option<GameOver>,
}

/// What the hunter can see between turns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameView {
    /// The hunter's cave.
    pub player_cave: CaveId,
    /// Tunnels out of it.
    pub adjacent_caves: [CaveId; 3],
    /// Nearby hazard warnings.
    pub warnings: Vec<&'static str>,
    /// Arrows left.
    pub arrows: u32,
    /// Set once the game has ended.
    pub game_over: Option<GameOver>,
}

/// A hunt in progress.
#[derive(Debug)]
pub struct Game<R = StdRng> {
    dungeon: Dungeon,
    player: Player,
    rng: R,
    game_over: Option<GameOver>,
    starting_arrows: u32,
}

impl Game<StdRng> {
    /// Start a game in a freshly populated dungeon.
    pub fn new(config: &GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::starting_with(rng, config.arrows)
    }
}

impl<R: CaveRandom> Game<R> {
    /// Start a game drawing every chance event from `rng`.
    pub fn with_random(rng: R) -> Self {
        Self::starting_with(rng, STARTING_ARROWS)
    }

    fn starting_with(mut rng: R, arrows: u32) -> Self {
        let dungeon = Dungeon::new(&mut rng);
        let mut game = Self::from_parts(dungeon, Player::with_arrows(arrows), rng);
        game.starting_arrows = arrows;
        game
    }

    /// Resume a game from stored state.
    ///
    /// A player restored with an empty quiver has already lost.
    pub fn from_parts(dungeon: Dungeon, player: Player, rng: R) -> Self {
        let game_over = player.is_out_of_arrows().then_some(GameOver::OutOfArrows);
        Self {
            dungeon,
            player,
            rng,
            game_over,
            starting_arrows: STARTING_ARROWS,
        }
    }

    /// The dungeon.
    pub fn dungeon(&self) -> &Dungeon {
        &self.dungeon
    }

    /// The hunter's quiver.
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// How the game ended, if it has.
    pub fn game_over(&self) -> Option<GameOver> {
        self.game_over
    }

    /// Repopulate the dungeon and refill the quiver.
    pub fn restart(&mut self) {
        self.dungeon.reset(&mut self.rng);
        self.player = Player::with_arrows(self.starting_arrows);
        self.game_over = None;
    }

    /// Everything needed to describe the hunter's surroundings.
    pub fn view(&self) -> HuntResult<GameView> {
        Ok(GameView {
            player_cave: self.dungeon.player_location()?,
            adjacent_caves: self.dungeon.player_adjacent_caves()?,
            warnings: self.dungeon.nearby_hazard_warnings()?,
            arrows: self.player.remaining_arrows(),
            game_over: self.game_over,
        })
    }

    /// Walk to a neighboring cave and face whatever lives there.
    pub fn move_to(&mut self, cave: u32) -> HuntResult<Turn> {
        self.ensure_running()?;
        let requested = CaveId::new(cave)?;
        let from = self.dungeon.player_location()?;

        let mut events = Vec::new();
        if !self.dungeon.move_player(requested)? {
            events.push(TurnEvent::MoveRejected { requested });
            return Ok(self.finish(events, None));
        }
        events.push(TurnEvent::Moved {
            from,
            to: requested,
        });

        let outcome = self.resolve_arrival(&mut events)?;
        Ok(self.finish(events, outcome))
    }

    /// Fire an arrow through up to five caves.
    ///
    /// An empty quiver is reported ahead of the game being over. An invalid
    /// path is rejected without spending an arrow.
    pub fn shoot(&mut self, caves: &[u32]) -> HuntResult<Turn> {
        // a running game always has an arrow left
        if self.player.is_out_of_arrows() {
            return Err(HuntError::OutOfArrows);
        }
        self.ensure_running()?;
        let path = ArrowPath::new(caves)?;
        let here = self.dungeon.player_location()?;

        self.player.use_arrow();
        let flight = resolve_arrow_path(&path, here, &self.dungeon, &mut self.rng);
        let outcome = flight.outcome;
        let mut events = vec![TurnEvent::ArrowFlew(flight)];

        let game_over = match outcome {
            ArrowOutcome::WumpusHit => Some(GameOver::WumpusKilled),
            ArrowOutcome::SelfHit => Some(GameOver::SelfShot),
            ArrowOutcome::Miss => self.stir_wumpus(&mut events)?,
        };
        let game_over =
            game_over.or_else(|| self.player.is_out_of_arrows().then_some(GameOver::OutOfArrows));
        Ok(self.finish(events, game_over))
    }

    /// Apply hazards in the hunter's cave until they settle somewhere.
    fn resolve_arrival(&mut self, events: &mut Vec<TurnEvent>) -> HuntResult<Option<GameOver>> {
        loop {
            match self.dungeon.hazard_at_player_location()? {
                None => return Ok(None),
                // never reported: the hunter is not a hazard
                Some(Occupant::Player) => return Ok(None),
                Some(Occupant::Pit) => return Ok(Some(GameOver::PitFall)),
                Some(Occupant::Wumpus) => {
                    if self.rng.wumpus_alert() {
                        return Ok(Some(GameOver::WumpusCaught));
                    }
                    let from = self.dungeon.player_location()?;
                    let to = self.dungeon.move_wumpus_randomly(&mut self.rng)?;
                    events.push(TurnEvent::WumpusFled { from, to });
                    return Ok(None);
                }
                Some(Occupant::Bat) => {
                    let from = self.dungeon.player_location()?;
                    let to = self.dungeon.teleport_player_randomly(&mut self.rng)?;
                    events.push(TurnEvent::CarriedByBats { from, to });
                }
            }
        }
    }

    /// After a miss the wumpus may wake, move, and find the hunter.
    fn stir_wumpus(&mut self, events: &mut Vec<TurnEvent>) -> HuntResult<Option<GameOver>> {
        let Some(from) = self.dungeon.wumpus_location() else {
            return Ok(None);
        };
        if self.rng.wumpus_alert() {
            let to = self.dungeon.move_wumpus_randomly(&mut self.rng)?;
            events.push(TurnEvent::WumpusStirred { from, to });
        }
        let here = self.dungeon.player_location()?;
        Ok((self.dungeon.wumpus_location() == Some(here)).then_some(GameOver::WumpusWoke))
    }

    fn ensure_running(&self) -> HuntResult<()> {
        match self.game_over {
            Some(_) => Err(HuntError::GameOver),
            None => Ok(()),
        }
    }

    fn finish(&mut self, events: Vec<TurnEvent>, game_over: Option<GameOver>) -> Turn {
        if let Some(outcome) = game_over {
            self.game_over = Some(outcome);
            tracing::info!(%outcome, arrows = self.player.remaining_arrows(), "game over");
        }
        Turn { events, game_over }
    }
}
