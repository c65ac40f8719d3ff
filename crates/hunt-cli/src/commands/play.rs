use std::io::{self, BufRead, Write};

use colored::Colorize;
use rand::Rng;

use hunt_core::{ArrowOutcome, Game, GameConfig, GameOver, GameView, MAX_ARROW_PATH, TurnEvent};

const HELP: &str = "\
Commands:
  move <cave>           walk through a tunnel (alias: m)
  shoot <cave> [...]    fire an arrow through up to 5 caves (alias: s)
  look                  describe your surroundings again
  restart               enter a fresh dungeon with a full quiver
  help                  show this list
  quit                  leave the caves (alias: q)";

/// One line of player input.
#[derive(Debug, PartialEq, Eq)]
enum Action {
    Move(u32),
    Shoot(Vec<u32>),
    Look,
    Restart,
    Help,
    Quit,
}

pub fn run(seed: Option<u64>, arrows: u32) -> Result<(), String> {
    let seed = seed.unwrap_or_else(|| rand::rng().random());
    let config = GameConfig::default().with_seed(seed).with_arrows(arrows);
    let mut game = Game::new(&config);

    println!("  {} Hunt the Wumpus", "Entering".bold());
    println!("  Seed: {seed}");
    println!("  Type 'help' for commands, 'quit' to exit.\n");
    print_view(&game)?;

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let result = match parse_action(input) {
            Ok(Action::Move(cave)) => game.move_to(cave),
            Ok(Action::Shoot(caves)) => game.shoot(&caves),
            Ok(Action::Look) => {
                print_view(&game)?;
                continue;
            }
            Ok(Action::Restart) => {
                game.restart();
                println!("  {} a fresh dungeon.\n", "Entering".bold());
                print_view(&game)?;
                continue;
            }
            Ok(Action::Help) => {
                println!("{HELP}\n");
                continue;
            }
            Ok(Action::Quit) => {
                println!("Goodbye!");
                break;
            }
            Err(e) => {
                println!("{}\n", e.yellow());
                continue;
            }
        };

        match result {
            Ok(turn) => {
                for event in &turn.events {
                    println!("{}", narrate(event, game.player().remaining_arrows()));
                }
                if let Some(outcome) = turn.game_over {
                    print_epitaph(outcome);
                    println!("Type 'restart' to hunt again or 'quit' to leave.\n");
                    continue;
                }
                println!();
                print_view(&game)?;
            }
            Err(e) => {
                println!("{}\n", e.to_string().yellow());
            }
        }
    }

    Ok(())
}

fn parse_action(input: &str) -> Result<Action, String> {
    let mut words = input.split_whitespace();
    let command = words.next().unwrap_or_default().to_lowercase();
    let args = words
        .map(|w| {
            w.trim_end_matches(',')
                .parse::<u32>()
                .map_err(|_| format!("'{w}' is not a cave number"))
        })
        .collect::<Result<Vec<u32>, String>>();

    match command.as_str() {
        "move" | "m" | "go" => match args?.as_slice() {
            [cave] => Ok(Action::Move(*cave)),
            _ => Err("usage: move <cave>".to_string()),
        },
        "shoot" | "s" => {
            let caves = args?;
            if caves.is_empty() {
                Err(format!("usage: shoot <cave> [up to {MAX_ARROW_PATH} caves]"))
            } else {
                Ok(Action::Shoot(caves))
            }
        }
        "look" | "l" => Ok(Action::Look),
        "restart" | "r" | "enter" => Ok(Action::Restart),
        "help" | "?" => Ok(Action::Help),
        "quit" | "q" | "exit" => Ok(Action::Quit),
        other => Err(format!("unknown command: {other} (try 'help')")),
    }
}

fn print_view(game: &Game) -> Result<(), String> {
    let view = game.view().map_err(|e| e.to_string())?;
    println!("{}\n", describe(&view));
    Ok(())
}

fn describe(view: &GameView) -> String {
    let mut lines = vec![
        format!("You are in cave {}.", view.player_cave),
        format!("Tunnels lead to {}.", super::join_caves(&view.adjacent_caves)),
    ];
    lines.extend(view.warnings.iter().map(|w| w.to_string()));
    lines.push(format!("Arrows: {}", view.arrows));
    lines.join("\n")
}

fn narrate(event: &TurnEvent, arrows_left: u32) -> String {
    match event {
        TurnEvent::Moved { from, to } => format!("You moved from cave {from} to cave {to}."),
        TurnEvent::MoveRejected { requested } => {
            format!("No tunnel leads to cave {requested}.")
        }
        TurnEvent::CarriedByBats { to, .. } => {
            format!("Superbat grabbed you and carried you off to cave {to}!")
        }
        TurnEvent::WumpusFled { .. } => {
            "You bumped the wumpus! It grumbles and lumbers off into the dark.".to_string()
        }
        TurnEvent::ArrowFlew(flight) => {
            let mut text = match flight.visited.last() {
                Some(last) if flight.deflected => {
                    format!("Your arrow glances off the rock into cave {last}.")
                }
                _ => format!(
                    "Your arrow flies through cave {}.",
                    super::join_caves(&flight.visited)
                ),
            };
            if flight.outcome == ArrowOutcome::Miss {
                text.push_str(&format!(
                    " It hits nothing. You have {arrows_left} arrows left."
                ));
            }
            text
        }
        TurnEvent::WumpusStirred { .. } => "You hear the wumpus stir.".to_string(),
    }
}

fn epitaph(outcome: GameOver) -> &'static str {
    match outcome {
        GameOver::WumpusCaught => "The wumpus got you.",
        GameOver::PitFall => "You fell into a bottomless pit.",
        GameOver::WumpusKilled => "Your arrow flies true! You got the wumpus!",
        GameOver::WumpusWoke => "Your arrow woke the wumpus. It found you!",
        GameOver::SelfShot => "You shot yourself.",
        GameOver::OutOfArrows => "You ran out of arrows.",
    }
}

fn print_epitaph(outcome: GameOver) {
    let text = epitaph(outcome);
    if outcome.is_victory() {
        println!("{}", text.green().bold());
    } else {
        println!("{}", text.red().bold());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hunt_core::{ArrowFlight, CaveId};

    fn cave(n: u32) -> CaveId {
        CaveId::new(n).unwrap()
    }

    #[test]
    fn parses_moves() {
        assert_eq!(parse_action("move 5"), Ok(Action::Move(5)));
        assert_eq!(parse_action("M 12"), Ok(Action::Move(12)));
        assert!(parse_action("move").is_err());
        assert!(parse_action("move 2 3").is_err());
        assert!(parse_action("move north").is_err());
    }

    #[test]
    fn parses_shots() {
        assert_eq!(parse_action("shoot 2 3 4"), Ok(Action::Shoot(vec![2, 3, 4])));
        assert_eq!(parse_action("s 2, 3"), Ok(Action::Shoot(vec![2, 3])));
        assert!(parse_action("shoot").is_err());
    }

    #[test]
    fn parses_simple_commands() {
        assert_eq!(parse_action("look"), Ok(Action::Look));
        assert_eq!(parse_action("help"), Ok(Action::Help));
        assert_eq!(parse_action("restart"), Ok(Action::Restart));
        assert_eq!(parse_action("R"), Ok(Action::Restart));
        assert_eq!(parse_action("q"), Ok(Action::Quit));
        assert!(parse_action("dance").is_err());
    }

    #[test]
    fn describe_lists_tunnels_and_warnings() {
        let view = GameView {
            player_cave: cave(1),
            adjacent_caves: [cave(2), cave(5), cave(6)],
            warnings: vec!["I feel a draft."],
            arrows: 3,
            game_over: None,
        };
        assert_eq!(
            describe(&view),
            "You are in cave 1.\nTunnels lead to 2, 5, 6.\nI feel a draft.\nArrows: 3"
        );
    }

    #[test]
    fn narrates_a_deflected_miss() {
        let event = TurnEvent::ArrowFlew(ArrowFlight {
            outcome: ArrowOutcome::Miss,
            visited: vec![cave(5)],
            deflected: true,
        });
        assert_eq!(
            narrate(&event, 2),
            "Your arrow glances off the rock into cave 5. It hits nothing. You have 2 arrows left."
        );
    }

    #[test]
    fn narrates_a_clean_hit() {
        let event = TurnEvent::ArrowFlew(ArrowFlight {
            outcome: ArrowOutcome::WumpusHit,
            visited: vec![cave(2), cave(3)],
            deflected: false,
        });
        assert_eq!(narrate(&event, 4), "Your arrow flies through cave 2, 3.");
    }

    #[test]
    fn every_ending_has_an_epitaph() {
        assert_eq!(epitaph(GameOver::SelfShot), "You shot yourself.");
        assert_eq!(
            epitaph(GameOver::WumpusKilled),
            "Your arrow flies true! You got the wumpus!"
        );
        assert_eq!(epitaph(GameOver::OutOfArrows), "You ran out of arrows.");
    }
}
