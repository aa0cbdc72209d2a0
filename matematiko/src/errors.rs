use crate::Number;

/// The error type for [`Board::place()`](crate::Board::place), i.e. for placing a single number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalPlacement {
    OutOfRange { row: usize, col: usize },
    CellOccupied { row: usize, col: usize, existing: Number },
}

impl std::error::Error for IllegalPlacement {}

impl std::fmt::Display for IllegalPlacement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalPlacement::OutOfRange { row, col } => write!(
                f,
                "Cell ({}, {}) is outside of the 5x5 board",
                row, col
            ),
            IllegalPlacement::CellOccupied { row, col, existing } => write!(
                f,
                "Cell ({}, {}) is already occupied by {}",
                row, col, existing
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// The error type for one action on a [`GameSession`](crate::GameSession).
pub enum GameError {
    IllegalPlacement(IllegalPlacement),
    /// A number was requested but the deck is exhausted.
    ///
    /// Deck size and the number of moves run out together, so this
    /// indicates broken bookkeeping rather than a user mistake.
    DeckEmpty,
    NoNumberInHand,
    NumberAlreadyInHand,
    NotPlayersTurn,
    GameOver,
    GameNotFinished,
    /// The opponent was asked to move on a board without empty cells.
    BoardFull,
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::IllegalPlacement(err) => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameError::IllegalPlacement(_) => write!(f, "The number cannot be placed there"),
            GameError::DeckEmpty => write!(f, "Tried to draw from an empty deck"),
            GameError::NoNumberInHand => {
                write!(f, "Tried to place a number before drawing one")
            }
            GameError::NumberAlreadyInHand => {
                write!(f, "Tried to draw while the last number has not been placed yet")
            }
            GameError::NotPlayersTurn => write!(f, "It is the computer's turn"),
            GameError::GameOver => write!(f, "The game is already over"),
            GameError::GameNotFinished => write!(f, "The game has not finished yet"),
            GameError::BoardFull => write!(f, "There is no empty cell left on the board"),
        }
    }
}

impl From<IllegalPlacement> for GameError {
    fn from(err: IllegalPlacement) -> GameError {
        GameError::IllegalPlacement(err)
    }
}
