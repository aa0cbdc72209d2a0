mod game;
mod history;
mod player;
pub use game::*;
pub use history::*;
pub use player::*;

use std::io::{BufRead, Write};
use std::time::Duration;

use matematiko::{GameSession, GreedyBot, RandomBot};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

/// A bot that can take over the player's side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum BotKind {
    Greedy,
    Random,
}

pub struct Config {
    pub rng: StdRng,
    /// Plays the player's side instead of reading moves from the input.
    pub autoplay: Option<BotKind>,
    pub num_games: usize,
    pub computer_delay: Duration,
    /// Print the final state of each game as JSON.
    pub json: bool,
}

impl BotKind {
    pub fn into_player(self, rng: StdRng) -> Player {
        match self {
            BotKind::Greedy => Player::Bot(Box::new(GreedyBot::new(rng))),
            BotKind::Random => Player::Bot(Box::new(RandomBot::new(rng))),
        }
    }
}

/// Plays up to `config.num_games` games and returns the history of the finished ones.
///
/// Stops early when the player quits a game.
pub fn run<R: BufRead, W: Write>(
    mut config: Config,
    input: &mut R,
    out: &mut W,
) -> anyhow::Result<History> {
    let mut history = History::new();
    writeln!(out, "{}", rules_text())?;

    let mut player = match config.autoplay {
        Some(kind) => kind.into_player(StdRng::seed_from_u64(config.rng.gen())),
        None => Player::Human,
    };

    for game_idx in 0..config.num_games {
        let mut session = GameSession::new(StdRng::seed_from_u64(config.rng.gen()));
        debug!(game_idx, "Starting game");
        match play_game(
            &mut session,
            &mut player,
            input,
            out,
            config.computer_delay,
        )? {
            GameOutcome::Finished(result) => {
                info!(game_idx, winner = ?result.winner, "Game finished");
                history.record(&result);
                if config.json {
                    writeln!(out, "{}", serde_json::to_string(&session.current_state())?)?;
                }
            }
            GameOutcome::Abandoned => break,
        }
        writeln!(out, "\nGame history:\n{}", history)?;
    }

    let tally = history.tally();
    info!(
        games = history.len(),
        player_wins = tally.player_wins,
        computer_wins = tally.computer_wins,
        draws = tally.draws,
        "Done"
    );
    Ok(history)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn autoplay_config(seed: u64, autoplay: BotKind, num_games: usize) -> Config {
        Config {
            rng: StdRng::seed_from_u64(seed),
            autoplay: Some(autoplay),
            num_games,
            computer_delay: Duration::ZERO,
            json: true,
        }
    }

    #[test]
    fn history_accumulates_over_games() {
        let mut out = Vec::new();
        let history = run(
            autoplay_config(1, BotKind::Greedy, 3),
            &mut Cursor::new(""),
            &mut out,
        )
        .unwrap();
        assert_eq!(history.len(), 3);
        let tally = history.tally();
        assert_eq!(tally.player_wins + tally.computer_wins + tally.draws, 3);

        let out = String::from_utf8(out).unwrap();
        assert_eq!(out.matches("Game history:").count(), 3);
        let last_summary = &history.entries()[2].summary;
        assert!(out.ends_with(&format!("- {}\n", last_summary)));
        assert_eq!(out.matches("\"remaining_moves\":0").count(), 3);
    }

    #[test]
    fn same_seed_same_history() {
        let a = run(autoplay_config(5, BotKind::Random, 2), &mut Cursor::new(""), &mut Vec::new())
            .unwrap();
        let b = run(autoplay_config(5, BotKind::Random, 2), &mut Cursor::new(""), &mut Vec::new())
            .unwrap();
        assert_eq!(a.entries(), b.entries());
    }

    #[test]
    fn quitting_stops_without_history() {
        let config = Config {
            rng: StdRng::seed_from_u64(0),
            autoplay: None,
            num_games: 5,
            computer_delay: Duration::ZERO,
            json: false,
        };
        let mut out = Vec::new();
        let history = run(config, &mut Cursor::new("quit\n"), &mut out).unwrap();
        assert!(history.is_empty());
        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with("Numbers from 1 to 13"));
        assert!(!out.contains("Game history:"));
    }
}
