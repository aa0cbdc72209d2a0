use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::trace;

use crate::{evaluate_board, Board, GameError, Number};

/// Something that decides where to put a number on a board.
///
/// The session uses a [`GreedyBot`] for the computer, and front ends can use
/// any bot to play the human side.
pub trait Bot {
    /// Picks an empty cell of `board` for `number`.
    ///
    /// Returns [`GameError::BoardFull`] if there is no empty cell.
    fn choose_cell(&mut self, board: &Board, number: Number) -> Result<(usize, usize), GameError>;

    /// Picks a cell and places the number there.
    fn play(&mut self, board: &mut Board, number: Number) -> Result<(usize, usize), GameError> {
        let (row, col) = self.choose_cell(board, number)?;
        board.place(row, col, number)?;
        Ok((row, col))
    }
}

/// Places the number wherever the board's score would be highest right after
/// the placement. Ties are broken uniformly at random.
///
/// There is no lookahead: neither the remaining deck nor the other player's
/// board are taken into account.
#[derive(Clone, Debug)]
pub struct GreedyBot {
    rng: StdRng,
}

impl GreedyBot {
    pub fn new(rng: StdRng) -> Self {
        Self { rng }
    }

    /// All empty cells on which placing `number` gives the highest board score,
    /// together with that score.
    pub fn best_cells(board: &Board, number: Number) -> (Vec<(usize, usize)>, u32) {
        let mut top_choices: Vec<(usize, usize)> = Vec::new();
        let mut top_score = 0;
        for (row, col) in board.empty_cells() {
            let mut simulated = board.clone();
            simulated
                .place(row, col, number)
                .expect("Placement failed despite the cell being empty");
            let score = evaluate_board(&simulated, false).total;
            trace!(row, col, score, "Candidate cell");
            match score.cmp(&top_score) {
                std::cmp::Ordering::Less => {}
                std::cmp::Ordering::Equal => {
                    top_choices.push((row, col));
                }
                std::cmp::Ordering::Greater => {
                    top_choices = vec![(row, col)];
                    top_score = score;
                }
            }
        }
        (top_choices, top_score)
    }
}

impl Bot for GreedyBot {
    fn choose_cell(&mut self, board: &Board, number: Number) -> Result<(usize, usize), GameError> {
        let (top_choices, _) = Self::best_cells(board, number);
        top_choices
            .choose(&mut self.rng)
            .copied()
            .ok_or(GameError::BoardFull)
    }
}

/// Places the number on a uniformly random empty cell.
#[derive(Clone, Debug)]
pub struct RandomBot {
    rng: StdRng,
}

impl RandomBot {
    pub fn new(rng: StdRng) -> Self {
        Self { rng }
    }
}

impl Bot for RandomBot {
    fn choose_cell(&mut self, board: &Board, _number: Number) -> Result<(usize, usize), GameError> {
        let empty_cells: Vec<(usize, usize)> = board.empty_cells().collect();
        empty_cells
            .choose(&mut self.rng)
            .copied()
            .ok_or(GameError::BoardFull)
    }
}
