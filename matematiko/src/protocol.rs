use serde::{Deserialize, Serialize};

use crate::{Board, Number};

/// Whose move it is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Turn {
    Player,
    Computer,
}

/// Who won a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    Player,
    Computer,
    Draw,
}

/// What happened on a call to [`GameSession::draw_next()`](crate::GameSession::draw_next).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Drawn {
    /// Who the number was drawn for.
    pub turn: Turn,
    pub number: Number,
    /// On the computer's turn the number is placed right away, on this cell.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub computer_placement: Option<(usize, usize)>,
}

/// A snapshot of a game, for displaying it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    /// `None` once the game is over.
    pub turn: Option<Turn>,
    pub number_in_hand: Option<Number>,
    pub player_board: Board,
    pub computer_board: Board,
    pub remaining_moves: usize,
}

impl Turn {
    pub fn other(self) -> Turn {
        match self {
            Turn::Player => Turn::Computer,
            Turn::Computer => Turn::Player,
        }
    }
}

impl std::fmt::Display for Turn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Turn::Player => write!(f, "Player"),
            Turn::Computer => write!(f, "Computer"),
        }
    }
}
