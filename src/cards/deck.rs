//! Decks: fixed-size bundles of cards.
//!
//! Two kinds exist:
//! - **Full**: 13 cards of one suit, freshly shuffled. Built only at setup
//!   to populate the pool.
//! - **Side**: 10 mixed cards sliced from the pre-shuffled pool. The
//!   replenishment unit dealt onto the columns during play.
//!
//! The back of the card list is the next card dealt. A deck is discarded by
//! its owner once empty; it never refills.

use serde::{Deserialize, Serialize};

use crate::cards::card::{Card, Rank, Suit};
use crate::core::config::{FULL_DECK_SIZE, SIDE_DECK_SIZE};
use crate::core::rng::GameRng;
use crate::engine::EngineError;

/// Which kind of deck this is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeckKind {
    /// 13 single-suit cards, setup only.
    Full,
    /// 10 mixed cards, dealt during play.
    Side,
}

/// An ordered bundle of cards; the back is the next card dealt.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    kind: DeckKind,
    cards: Vec<Card>,
}

impl Deck {
    /// Build a full single-suit deck: one card per rank, shuffled.
    ///
    /// All cards start face-down.
    #[must_use]
    pub fn full(suit: Suit, rng: &mut GameRng) -> Self {
        let mut cards: Vec<Card> = (0..FULL_DECK_SIZE as u8)
            .map(|value| Card::new(suit, Rank::new(value)))
            .collect();
        rng.shuffle(&mut cards);
        Self {
            kind: DeckKind::Full,
            cards,
        }
    }

    /// Assemble a side deck from a pre-shuffled slice of the pool.
    ///
    /// Panics unless exactly [`SIDE_DECK_SIZE`] cards are supplied; setup is
    /// the only caller and slices the pool in exact chunks.
    #[must_use]
    pub fn side(cards: Vec<Card>) -> Self {
        assert_eq!(
            cards.len(),
            SIDE_DECK_SIZE,
            "side deck must hold exactly {SIDE_DECK_SIZE} cards"
        );
        Self {
            kind: DeckKind::Side,
            cards,
        }
    }

    /// Which kind of deck this is.
    #[must_use]
    pub fn kind(&self) -> DeckKind {
        self.kind
    }

    /// Number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// True once every card has been dealt.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Remaining cards, next-dealt last.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Deal the next card.
    ///
    /// Errors with [`EngineError::EmptySource`] when the deck is empty.
    pub fn deal_card(&mut self) -> Result<Card, EngineError> {
        self.cards.pop().ok_or(EngineError::EmptySource)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_deck_has_one_card_per_rank() {
        let mut rng = GameRng::new(42);
        let deck = Deck::full(Suit::Spades, &mut rng);

        assert_eq!(deck.kind(), DeckKind::Full);
        assert_eq!(deck.len(), FULL_DECK_SIZE);

        let mut ranks: Vec<u8> = deck.cards().iter().map(|c| c.rank().raw()).collect();
        ranks.sort_unstable();
        assert_eq!(ranks, (0..13).collect::<Vec<u8>>());

        assert!(deck.cards().iter().all(|c| c.suit() == Suit::Spades));
        assert!(deck.cards().iter().all(|c| !c.is_face_up()));
    }

    #[test]
    fn test_full_deck_is_shuffled_deterministically() {
        let mut rng1 = GameRng::new(7);
        let mut rng2 = GameRng::new(7);
        assert_eq!(
            Deck::full(Suit::Hearts, &mut rng1),
            Deck::full(Suit::Hearts, &mut rng2)
        );
    }

    #[test]
    fn test_deal_card_pops_from_the_back() {
        let mut rng = GameRng::new(42);
        let mut deck = Deck::full(Suit::Clubs, &mut rng);
        let expected = *deck.cards().last().unwrap();

        assert_eq!(deck.deal_card().unwrap(), expected);
        assert_eq!(deck.len(), FULL_DECK_SIZE - 1);
    }

    #[test]
    fn test_deal_from_empty_deck_fails() {
        let mut rng = GameRng::new(42);
        let mut deck = Deck::full(Suit::Diamonds, &mut rng);
        for _ in 0..FULL_DECK_SIZE {
            deck.deal_card().unwrap();
        }

        assert!(deck.is_empty());
        assert!(matches!(deck.deal_card(), Err(EngineError::EmptySource)));
    }

    #[test]
    fn test_side_deck_holds_ten_cards() {
        let cards: Vec<Card> = (0..SIDE_DECK_SIZE as u8)
            .map(|v| Card::new(Suit::Hearts, Rank::new(v)))
            .collect();
        let deck = Deck::side(cards);

        assert_eq!(deck.kind(), DeckKind::Side);
        assert_eq!(deck.len(), SIDE_DECK_SIZE);
    }

    #[test]
    #[should_panic(expected = "side deck must hold exactly")]
    fn test_side_deck_rejects_wrong_size() {
        let _ = Deck::side(vec![Card::new(Suit::Hearts, Rank::MIN)]);
    }
}
