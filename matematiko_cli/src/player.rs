use std::io::{BufRead, Write};
use std::str::FromStr;

use matematiko::{Board, Bot, Number, BOARD_SIZE};
use tracing::trace;

/// What the person (or bot) at the keyboard wants to do next.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Zero-based coordinates on the player's board.
    Place { row: usize, col: usize },
    /// Show the current scores of both boards.
    Score,
    Quit,
}

/// The error type for the [`FromStr`] instance of [`Command`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommandFromStrErr {
    Empty,
    NotTwoCoordinates,
    InvalidCoordinate,
}

impl std::error::Error for CommandFromStrErr {}

impl std::fmt::Display for CommandFromStrErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandFromStrErr::Empty => write!(f, "Please enter a row and a column"),
            CommandFromStrErr::NotTwoCoordinates => {
                write!(f, "Expected exactly two numbers, a row and a column")
            }
            CommandFromStrErr::InvalidCoordinate => write!(
                f,
                "Rows and columns are numbered from 1 to {}",
                BOARD_SIZE
            ),
        }
    }
}

/// Accepts `score`, `quit` (or `q`), or a 1-based row and column like `2 5` or `2,5`.
impl FromStr for Command {
    type Err = CommandFromStrErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.to_lowercase().as_str() {
            "" => return Err(CommandFromStrErr::Empty),
            "score" => return Ok(Command::Score),
            "quit" | "q" => return Ok(Command::Quit),
            _ => {}
        }
        let coords = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .map(|part| {
                part.parse::<usize>()
                    .ok()
                    .and_then(|n| n.checked_sub(1))
                    .ok_or(CommandFromStrErr::InvalidCoordinate)
            })
            .collect::<Result<Vec<usize>, _>>()?;
        match coords[..] {
            [row, col] => Ok(Command::Place { row, col }),
            _ => Err(CommandFromStrErr::NotTwoCoordinates),
        }
    }
}

/// Who plays the player's side of the game.
pub enum Player {
    /// Commands are read from the input, one per line.
    Human,
    Bot(Box<dyn Bot>),
}

impl Player {
    /// Asks for the next command while `number` is waiting to be placed.
    ///
    /// Lines that can't be parsed are reported and asked for again. The end of
    /// the input counts as [`Command::Quit`].
    pub fn next_command<R: BufRead, W: Write>(
        &mut self,
        board: &Board,
        number: Number,
        input: &mut R,
        out: &mut W,
    ) -> anyhow::Result<Command> {
        match self {
            Player::Bot(bot) => {
                let (row, col) = bot.choose_cell(board, number)?;
                trace!(row, col, number, "Bot chose cell");
                Ok(Command::Place { row, col })
            }
            Player::Human => {
                let mut buf = String::new();
                loop {
                    write!(out, "Where should {} go? (row column, 'score' or 'quit') ", number)?;
                    out.flush()?;
                    buf.clear();
                    if input.read_line(&mut buf)? == 0 {
                        return Ok(Command::Quit);
                    }
                    match buf.parse::<Command>() {
                        Ok(command) => return Ok(command),
                        Err(err) => writeln!(out, "{}.", err)?,
                    }
                }
            }
        }
    }
}
