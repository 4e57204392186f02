//! Engine error taxonomy.
//!
//! Every failure is local to one operation: the engine state is left
//! untouched and the caller may keep issuing operations. Nothing here is
//! fatal to the process.

use thiserror::Error;

use crate::cards::card::{Rank, Suit};

/// Errors surfaced by engine operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Dealing attempted with nothing left to deal from.
    #[error("no decks left to deal")]
    EmptySource,

    /// Mid-game deal attempted while some column is empty.
    #[error("all columns must hold at least one card to deal")]
    ColumnEmptyViolation,

    /// A column or card index beyond the valid range.
    #[error("index {index} is out of range (limit {limit})")]
    IndexOutOfRange { index: usize, limit: usize },

    /// The candidate run at the source is face-down or not a same-suit
    /// descending sequence.
    #[error("cards from position {position} of column {column} do not form a movable run")]
    SourceRunInvalid { column: usize, position: usize },

    /// The destination top card is face-down or does not follow the run's
    /// bottom rank.
    #[error("run cannot be placed on top of column {column}")]
    DestinationMismatch { column: usize },

    /// Reveal called on a card that is already face-up. Indicates an engine
    /// bookkeeping bug, not a user error.
    #[error("card {rank} {suit} is already revealed")]
    AlreadyRevealed { suit: Suit, rank: Rank },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_failing_check() {
        let err = EngineError::IndexOutOfRange { index: 9, limit: 4 };
        assert_eq!(err.to_string(), "index 9 is out of range (limit 4)");

        let err = EngineError::AlreadyRevealed {
            suit: Suit::Spades,
            rank: Rank::new(3),
        };
        assert_eq!(err.to_string(), "card 3 Spade is already revealed");
    }
}
