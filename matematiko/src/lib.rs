pub use board::*;
pub use deck::*;
pub use errors::*;
pub use opponent::*;
pub use protocol::*;
pub use scoring::*;
pub use session::*;
pub use visualization::*;

#[cfg(test)]
mod arbitrary;
mod board;
mod deck;
mod errors;
mod opponent;
mod protocol;
mod scoring;
mod session;
mod visualization;

/// A token drawn from the deck.
pub type Number = u8;

pub const MIN_NUMBER: Number = 1;
pub const MAX_NUMBER: Number = 13;
