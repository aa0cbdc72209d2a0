use std::cmp::Ordering;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, error, info};

use crate::{
    evaluate_board, Board, BoardScore, Bot, Deck, Drawn, GameError, GreedyBot, Number,
    SessionState, Turn, Winner, BOARD_SIZE,
};

/// Both players fill all of their cells.
pub const TOTAL_MOVES: usize = 2 * BOARD_SIZE * BOARD_SIZE;

/// Where a game currently stands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    /// The next step is drawing a number for this side.
    AwaitingDraw(Turn),
    /// A number has been drawn and must be placed.
    ///
    /// Normally only observed with [`Turn::Player`], since the computer places
    /// its number as part of drawing it. If the computer's board is somehow
    /// full when it draws, the session stays in this phase with the computer's
    /// number and no further move is accepted.
    AwaitingPlacement(Turn, Number),
    Finished(Box<FinalResult>),
}

/// The scores of both boards and who is ahead.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FinalResult {
    pub player: BoardScore,
    pub computer: BoardScore,
    pub winner: Winner,
}

impl FinalResult {
    /// Scores both boards, with an explanation for every line.
    pub fn new(player_board: &Board, computer_board: &Board) -> Self {
        let player = evaluate_board(player_board, true);
        let computer = evaluate_board(computer_board, true);
        let winner = match player.total.cmp(&computer.total) {
            Ordering::Less => Winner::Computer,
            Ordering::Equal => Winner::Draw,
            Ordering::Greater => Winner::Player,
        };
        Self {
            player,
            computer,
            winner,
        }
    }

    /// A one-line description of the result, as kept in the game history.
    pub fn summary(&self) -> String {
        let verdict = match self.winner {
            Winner::Player => "The player wins!",
            Winner::Computer => "The computer wins!",
            Winner::Draw => "It's a draw!",
        };
        format!(
            "Player - {} points, Computer - {} points. {}",
            self.player.total, self.computer.total, verdict
        )
    }
}

/// One game between the player and the computer.
///
/// The player always moves first. Each turn consists of drawing a number with
/// [`Self::draw_next()`] and placing it. For the player, placing is a separate
/// call to [`Self::place()`]; the computer places its number within
/// `draw_next()`. After 25 placements on each board the game is over and the
/// result is available from [`Self::final_result()`].
#[derive(Clone, Debug)]
pub struct GameSession {
    deck: Deck,
    player_board: Board,
    computer_board: Board,
    phase: Phase,
    remaining_moves: usize,
    opponent: GreedyBot,
}

impl GameSession {
    /// Starts a new game. The deck order and the computer's tie-breaks are
    /// taken from `rng`.
    pub fn new(mut rng: StdRng) -> Self {
        let deck = Deck::shuffled(&mut rng);
        let opponent = GreedyBot::new(StdRng::seed_from_u64(rng.gen()));
        Self {
            deck,
            player_board: Board::new(),
            computer_board: Board::new(),
            phase: Phase::AwaitingDraw(Turn::Player),
            remaining_moves: TOTAL_MOVES,
            opponent,
        }
    }

    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Whose turn it is, or `None` if the game is over.
    pub fn turn(&self) -> Option<Turn> {
        match self.phase {
            Phase::AwaitingDraw(turn) | Phase::AwaitingPlacement(turn, _) => Some(turn),
            Phase::Finished(_) => None,
        }
    }

    pub fn number_in_hand(&self) -> Option<Number> {
        match self.phase {
            Phase::AwaitingPlacement(_, number) => Some(number),
            _ => None,
        }
    }

    pub fn remaining_moves(&self) -> usize {
        self.remaining_moves
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.phase, Phase::Finished(_))
    }

    pub fn player_board(&self) -> &Board {
        &self.player_board
    }

    pub fn computer_board(&self) -> &Board {
        &self.computer_board
    }

    /// How many numbers are left in the deck.
    pub fn deck_len(&self) -> usize {
        self.deck.len()
    }

    pub fn current_state(&self) -> SessionState {
        SessionState {
            turn: self.turn(),
            number_in_hand: self.number_in_hand(),
            player_board: self.player_board.clone(),
            computer_board: self.computer_board.clone(),
            remaining_moves: self.remaining_moves,
        }
    }

    /// Draws the next number for whoever's turn it is.
    ///
    /// On the computer's turn, the number is placed immediately and the turn
    /// passes back to the player.
    pub fn draw_next(&mut self) -> Result<Drawn, GameError> {
        let turn = match self.phase {
            Phase::AwaitingDraw(turn) => turn,
            Phase::AwaitingPlacement(..) => return Err(GameError::NumberAlreadyInHand),
            Phase::Finished(_) => return Err(GameError::GameOver),
        };
        let number = match self.deck.draw() {
            Ok(number) => number,
            Err(err) => {
                error!(
                    remaining_moves = self.remaining_moves,
                    "The deck ran out before the game ended"
                );
                return Err(err);
            }
        };
        debug!(%turn, number, "Drew number");
        self.phase = Phase::AwaitingPlacement(turn, number);

        let computer_placement = match turn {
            Turn::Player => None,
            Turn::Computer => {
                let (row, col) = match self.opponent.play(&mut self.computer_board, number) {
                    Ok(cell) => cell,
                    Err(err) => {
                        error!(
                            %err,
                            number,
                            remaining_moves = self.remaining_moves,
                            "The computer could not place its number, the game is stuck"
                        );
                        return Err(err);
                    }
                };
                debug!(row, col, number, "Computer placed number");
                self.end_turn();
                Some((row, col))
            }
        };
        Ok(Drawn {
            turn,
            number,
            computer_placement,
        })
    }

    /// Places the player's number on the given cell of the player's board.
    ///
    /// Nothing changes if this returns an error, so the player can simply
    /// pick another cell.
    pub fn place(&mut self, row: usize, col: usize) -> Result<(), GameError> {
        let number = match self.phase {
            Phase::AwaitingPlacement(Turn::Player, number) => number,
            Phase::AwaitingDraw(Turn::Player) => return Err(GameError::NoNumberInHand),
            Phase::AwaitingDraw(Turn::Computer) | Phase::AwaitingPlacement(Turn::Computer, _) => {
                return Err(GameError::NotPlayersTurn)
            }
            Phase::Finished(_) => return Err(GameError::GameOver),
        };
        self.player_board.place(row, col, number)?;
        debug!(row, col, number, "Player placed number");
        self.end_turn();
        Ok(())
    }

    /// The scores of both boards as they are now, without ending the game.
    ///
    /// Only complete lines count, so this is mostly interesting late in a game.
    pub fn score_preview(&self) -> FinalResult {
        FinalResult::new(&self.player_board, &self.computer_board)
    }

    pub fn final_result(&self) -> Result<&FinalResult, GameError> {
        match &self.phase {
            Phase::Finished(result) => Ok(result.as_ref()),
            _ => Err(GameError::GameNotFinished),
        }
    }

    fn end_turn(&mut self) {
        let Some(turn) = self.turn() else {
            return;
        };
        self.remaining_moves -= 1;
        if self.remaining_moves == 0 {
            let result = FinalResult::new(&self.player_board, &self.computer_board);
            info!(
                player_score = result.player.total,
                computer_score = result.computer.total,
                winner = ?result.winner,
                "Game over"
            );
            self.phase = Phase::Finished(Box::new(result));
        } else {
            self.phase = Phase::AwaitingDraw(turn.other());
        }
    }
}
