use rand::seq::SliceRandom;
use rand::Rng;

use crate::{GameError, Number, MAX_NUMBER, MIN_NUMBER};

/// How many copies of each number are in a deck.
pub const COPIES_PER_NUMBER: usize = 4;

/// The total number of tokens in a fresh deck.
pub const DECK_SIZE: usize = (MAX_NUMBER - MIN_NUMBER + 1) as usize * COPIES_PER_NUMBER;

/// The shuffled tokens for one game.
#[derive(Clone, Debug)]
pub struct Deck {
    // The top of the deck is the end of the vec, so drawing is a pop().
    numbers: Vec<Number>,
}

impl Deck {
    /// Creates a deck with four copies of every number from 1 to 13, in random order.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut numbers = Vec::with_capacity(DECK_SIZE);
        for number in MIN_NUMBER..=MAX_NUMBER {
            for _ in 0..COPIES_PER_NUMBER {
                numbers.push(number);
            }
        }
        numbers.shuffle(rng);
        Self { numbers }
    }

    /// Takes the next number off the deck.
    pub fn draw(&mut self) -> Result<Number, GameError> {
        self.numbers.pop().ok_or(GameError::DeckEmpty)
    }

    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }

    /// The numbers that have not been drawn yet, in no particular order.
    pub fn remaining(&self) -> impl Iterator<Item = Number> + '_ {
        self.numbers.iter().copied()
    }
}
