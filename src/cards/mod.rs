//! Card and deck value types.

pub mod card;
pub mod deck;

pub use card::{Card, Rank, Suit};
pub use deck::{Deck, DeckKind};
