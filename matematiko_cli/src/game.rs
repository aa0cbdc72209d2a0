use std::io::{BufRead, Write};
use std::time::Duration;

use matematiko::{
    visualize_boards_side_by_side, BoardScore, FinalResult, GameError, GameSession,
    IllegalPlacement, Pattern, Turn,
};
use tracing::{debug, info};

use crate::player::{Command, Player};

/// How a game ended.
pub enum GameOutcome {
    Finished(FinalResult),
    /// The player quit before the game was over.
    Abandoned,
}

/// The scoring table, as shown before the first game.
pub fn rules_text() -> String {
    let mut text = String::from(
        "Numbers from 1 to 13 are drawn at random, four copies of each.\n\
         Place them on your 5x5 board to score as many points as possible.\n\n\
         Combinations (row or column / diagonal):\n",
    );
    for pattern in Pattern::ALL {
        text += &format!(
            "- {}: {} / {} points\n",
            pattern.name(),
            pattern.points(false),
            pattern.points(true)
        );
    }
    text
}

fn write_board_score<W: Write>(out: &mut W, title: &str, score: &BoardScore) -> anyhow::Result<()> {
    writeln!(out, "{}:", title)?;
    for line in &score.lines {
        writeln!(out, "{}", line)?;
    }
    writeln!(out, "Total: {} points", score.total)?;
    Ok(())
}

fn write_scores<W: Write>(out: &mut W, result: &FinalResult) -> anyhow::Result<()> {
    write_board_score(out, "Your board", &result.player)?;
    writeln!(out)?;
    write_board_score(out, "Computer's board", &result.computer)?;
    Ok(())
}

/// Plays one game to the end, unless the player quits.
///
/// The computer's moves are shown after `computer_delay`. Returns an error
/// only on IO failure or broken game bookkeeping, not when the player picks
/// an occupied cell; they are simply asked again.
pub fn play_game<R: BufRead, W: Write>(
    session: &mut GameSession,
    player: &mut Player,
    input: &mut R,
    out: &mut W,
    computer_delay: Duration,
) -> anyhow::Result<GameOutcome> {
    while let Some(turn) = session.turn() {
        match turn {
            Turn::Computer => {
                if !computer_delay.is_zero() {
                    std::thread::sleep(computer_delay);
                }
                let drawn = session.draw_next()?;
                if let Some((row, col)) = drawn.computer_placement {
                    writeln!(
                        out,
                        "The computer drew {} and put it on row {}, column {}.",
                        drawn.number,
                        row + 1,
                        col + 1
                    )?;
                }
            }
            Turn::Player => {
                let number = match session.number_in_hand() {
                    Some(number) => number,
                    None => session.draw_next()?.number,
                };
                writeln!(
                    out,
                    "\n{}",
                    visualize_boards_side_by_side(
                        "Your board",
                        session.player_board(),
                        "Computer's board",
                        session.computer_board()
                    )
                )?;
                writeln!(
                    out,
                    "You drew {}. {} moves left.",
                    number,
                    session.remaining_moves()
                )?;
                loop {
                    let command =
                        player.next_command(session.player_board(), number, input, out)?;
                    match command {
                        Command::Place { row, col } => match session.place(row, col) {
                            Ok(()) => break,
                            Err(GameError::IllegalPlacement(err)) => {
                                debug!(%err, "Rejected placement");
                                let reason = match err {
                                    IllegalPlacement::OutOfRange { .. } => format!(
                                        "There is no cell at row {}, column {}",
                                        row + 1,
                                        col + 1
                                    ),
                                    IllegalPlacement::CellOccupied { existing, .. } => format!(
                                        "Row {}, column {} already holds {}",
                                        row + 1,
                                        col + 1,
                                        existing
                                    ),
                                };
                                writeln!(out, "{}. Please pick another cell.", reason)?;
                            }
                            Err(err) => return Err(err.into()),
                        },
                        Command::Score => write_scores(out, &session.score_preview())?,
                        Command::Quit => {
                            info!(
                                remaining_moves = session.remaining_moves(),
                                "Game abandoned"
                            );
                            return Ok(GameOutcome::Abandoned);
                        }
                    }
                }
            }
        }
    }

    let result = session.final_result()?.clone();
    writeln!(
        out,
        "\n{}",
        visualize_boards_side_by_side(
            "Your board",
            session.player_board(),
            "Computer's board",
            session.computer_board()
        )
    )?;
    write_scores(out, &result)?;
    writeln!(out, "\nResult: {}", result.summary())?;
    Ok(GameOutcome::Finished(result))
}
