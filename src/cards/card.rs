//! Card values: suit, rank, and the one-way face-up flag.
//!
//! A `Card` is created at deck-build time and never destroyed except when a
//! completed 13-run is removed from a column. The face-up flag only moves in
//! one direction: `reveal` flips it false to true exactly once, and a second
//! reveal is an engine bug, not a user error.

use serde::{Deserialize, Serialize};

use crate::engine::EngineError;

/// Card suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    /// All four suits, in deck-construction order.
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    /// Display name used by renderers.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Suit::Hearts => "Heart",
            Suit::Diamonds => "Diamond",
            Suit::Clubs => "Club",
            Suit::Spades => "Spade",
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Card rank: 0 (ace, lowest) through 12 (king, highest).
///
/// The raw value is what renderers print and what the run rules compare;
/// the engine never maps it to pip names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Rank(u8);

impl Rank {
    /// Lowest rank (the ace).
    pub const MIN: Rank = Rank(0);
    /// Highest rank (the king).
    pub const MAX: Rank = Rank(12);

    /// Create a rank.
    ///
    /// Panics if `value` is outside `0..=12`.
    #[must_use]
    pub const fn new(value: u8) -> Self {
        assert!(value <= 12, "rank out of range");
        Self(value)
    }

    /// Get the raw rank value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// True if `other` is exactly one rank below this card.
    ///
    /// This is the adjacency both the source-run rule and the destination
    /// rule are built on.
    #[must_use]
    pub const fn follows(self, other: Rank) -> bool {
        self.0 == other.0 + 1
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A playing card: immutable suit and rank, mutable face-up flag.
///
/// The flag is private so the only way to turn a card over is `reveal`,
/// which enforces the one-way transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    suit: Suit,
    rank: Rank,
    face_up: bool,
}

impl Card {
    /// Create a face-down card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            rank,
            face_up: false,
        }
    }

    /// Create a face-up card. Used by scripted layouts and tests.
    #[must_use]
    pub const fn face_up(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            rank,
            face_up: true,
        }
    }

    /// The card's suit.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// The card's rank.
    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    /// Is the card face-up?
    #[must_use]
    pub const fn is_face_up(&self) -> bool {
        self.face_up
    }

    /// Turn the card face-up.
    ///
    /// Errors with [`EngineError::AlreadyRevealed`] if the card is already
    /// face-up; that indicates a bookkeeping bug in the caller, since the
    /// engine only reveals cards it knows to be face-down.
    pub fn reveal(&mut self) -> Result<(), EngineError> {
        if self.face_up {
            return Err(EngineError::AlreadyRevealed {
                suit: self.suit,
                rank: self.rank,
            });
        }
        self.face_up = true;
        Ok(())
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.face_up {
            write!(f, "{} {}", self.rank, self.suit)
        } else {
            f.write_str("x")
        }
    }
}
