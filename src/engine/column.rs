//! Tableau columns and the run rules that govern them.
//!
//! A column is an ordered pile of cards, bottom to top. Cards enter at the
//! top (dealing, moves) and leave only as a contiguous suffix: either a
//! candidate run being moved to another column, or a completed 13-run being
//! discarded. Empty is a valid state and a valid move target.
//!
//! Positions given by callers count from the top: position 0 is the topmost
//! card, increasing downward.

use smallvec::SmallVec;

use crate::cards::card::Card;
use crate::core::config::FULL_DECK_SIZE;
use crate::engine::error::EngineError;

/// Cards drained from a column during a move, bottom-of-run first.
///
/// A legal run is at most 13 cards, so moves never spill to the heap.
pub type RunBuffer = SmallVec<[Card; FULL_DECK_SIZE]>;

/// One tableau pile.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Column {
    cards: Vec<Card>,
}

impl Column {
    /// Create an empty column.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a column holding the given cards, bottom to top.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Number of cards in the column.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// True when the column holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// All cards, bottom to top.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The topmost card, if any.
    #[must_use]
    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// The card `position` steps below the top (0 = topmost).
    #[must_use]
    pub fn card_at(&self, position: usize) -> Option<&Card> {
        if position < self.cards.len() {
            Some(&self.cards[self.cards.len() - 1 - position])
        } else {
            None
        }
    }

    /// Place a card on top of the column.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Can the suffix starting at `position` leave this column?
    ///
    /// Legal iff the card at `position` is face-up and, for runs longer than
    /// one card, every step up the suffix descends by exactly one rank
    /// within a single suit. A lone face-up card is always movable; its
    /// neighbours below are irrelevant.
    ///
    /// Assumes `position` is in range.
    #[must_use]
    pub fn is_movable_run(&self, position: usize) -> bool {
        let cut = self.cards.len() - 1 - position;
        if !self.cards[cut].is_face_up() {
            return false;
        }
        self.cards[cut..].windows(2).all(|pair| {
            pair[0].suit() == pair[1].suit() && pair[0].rank().follows(pair[1].rank())
        })
    }

    /// Detach the suffix starting at `position`, preserving order.
    ///
    /// The caller has already validated legality; this is the "detach
    /// ownership" half of a move.
    #[must_use]
    pub fn take_run(&mut self, position: usize) -> RunBuffer {
        let cut = self.cards.len() - 1 - position;
        self.cards.drain(cut..).collect()
    }

    /// Append a detached run on top, preserving order.
    ///
    /// The "attach ownership" half of a move.
    pub fn attach_run(&mut self, run: RunBuffer) {
        self.cards.extend(run);
    }

    /// Reveal the top card if it is face-down.
    ///
    /// Returns whether a reveal happened. Called after a move uncovers a new
    /// top card.
    pub fn reveal_top(&mut self) -> Result<bool, EngineError> {
        match self.cards.last_mut() {
            Some(top) if !top.is_face_up() => {
                top.reveal()?;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// Is a complete ace-to-king run sitting fully exposed on top?
    ///
    /// Requires at least 13 cards, with the top 13 all face-up, ranks 0..=12
    /// walking down from the top, all of one suit.
    #[must_use]
    pub fn has_completed_run(&self) -> bool {
        if self.cards.len() < FULL_DECK_SIZE {
            return false;
        }
        let suit = self.cards[self.cards.len() - 1].suit();
        (0..FULL_DECK_SIZE).all(|pos| {
            let card = &self.cards[self.cards.len() - 1 - pos];
            card.is_face_up() && card.rank().raw() as usize == pos && card.suit() == suit
        })
    }

    /// Remove the completed run on top, if present.
    ///
    /// Returns whether a run was removed. The removed cards are discarded;
    /// the engine only keeps count.
    pub fn take_completed_run(&mut self) -> bool {
        if self.has_completed_run() {
            self.cards.truncate(self.cards.len() - FULL_DECK_SIZE);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::card::{Rank, Suit};

    fn up(suit: Suit, rank: u8) -> Card {
        Card::face_up(suit, Rank::new(rank))
    }

    fn down(suit: Suit, rank: u8) -> Card {
        Card::new(suit, Rank::new(rank))
    }

    #[test]
    fn test_card_at_counts_from_the_top() {
        let column = Column::from_cards(vec![up(Suit::Spades, 5), up(Suit::Spades, 4)]);

        assert_eq!(column.card_at(0).unwrap().rank(), Rank::new(4));
        assert_eq!(column.card_at(1).unwrap().rank(), Rank::new(5));
        assert!(column.card_at(2).is_none());
    }

    #[test]
    fn test_single_face_up_card_is_movable() {
        // A lone card needs no run context, even sitting on garbage.
        let column = Column::from_cards(vec![up(Suit::Hearts, 2), up(Suit::Clubs, 9)]);
        assert!(column.is_movable_run(0));
    }

    #[test]
    fn test_face_down_card_is_not_movable() {
        let column = Column::from_cards(vec![down(Suit::Hearts, 5)]);
        assert!(!column.is_movable_run(0));
    }

    #[test]
    fn test_same_suit_descending_run_is_movable() {
        let column = Column::from_cards(vec![
            up(Suit::Spades, 5),
            up(Suit::Spades, 4),
            up(Suit::Spades, 3),
        ]);
        assert!(column.is_movable_run(2));
        assert!(column.is_movable_run(1));
    }

    #[test]
    fn test_broken_run_is_not_movable() {
        // Rank gap.
        let column = Column::from_cards(vec![up(Suit::Spades, 5), up(Suit::Hearts, 3)]);
        assert!(!column.is_movable_run(1));

        // Right ranks, mixed suits.
        let column = Column::from_cards(vec![up(Suit::Spades, 5), up(Suit::Hearts, 4)]);
        assert!(!column.is_movable_run(1));
    }

    #[test]
    fn test_take_and_attach_preserve_order() {
        let mut from = Column::from_cards(vec![
            up(Suit::Clubs, 8),
            up(Suit::Spades, 5),
            up(Suit::Spades, 4),
        ]);
        let mut to = Column::new();

        let run = from.take_run(1);
        to.attach_run(run);

        assert_eq!(from.len(), 1);
        assert_eq!(to.card_at(1).unwrap().rank(), Rank::new(5));
        assert_eq!(to.card_at(0).unwrap().rank(), Rank::new(4));
    }

    #[test]
    fn test_reveal_top_flips_only_face_down() {
        let mut column = Column::from_cards(vec![down(Suit::Diamonds, 7)]);
        assert!(column.reveal_top().unwrap());
        assert!(column.top().unwrap().is_face_up());

        // Already face-up: no-op, not an error.
        assert!(!column.reveal_top().unwrap());

        let mut empty = Column::new();
        assert!(!empty.reveal_top().unwrap());
    }

    fn full_run(suit: Suit) -> Vec<Card> {
        (0..13).rev().map(|r| up(suit, r)).collect()
    }

    #[test]
    fn test_completed_run_detection() {
        let column = Column::from_cards(full_run(Suit::Hearts));
        assert!(column.has_completed_run());
    }

    #[test]
    fn test_completed_run_sits_on_other_cards() {
        let mut cards = vec![down(Suit::Clubs, 9), up(Suit::Spades, 1)];
        cards.extend(full_run(Suit::Hearts));
        let mut column = Column::from_cards(cards);

        assert!(column.has_completed_run());
        assert!(column.take_completed_run());
        assert_eq!(column.len(), 2);
        assert_eq!(column.top().unwrap().rank(), Rank::new(1));
    }

    #[test]
    fn test_face_down_card_blocks_completion() {
        let mut cards = full_run(Suit::Spades);
        cards[4] = down(Suit::Spades, 8);
        let column = Column::from_cards(cards);
        assert!(!column.has_completed_run());
    }

    #[test]
    fn test_mixed_suit_run_does_not_complete() {
        let mut cards = full_run(Suit::Spades);
        cards[12] = up(Suit::Hearts, 0);
        let column = Column::from_cards(cards);
        assert!(!column.has_completed_run());
    }

    #[test]
    fn test_short_column_never_completes() {
        let cards: Vec<Card> = (0..12).rev().map(|r| up(Suit::Clubs, r)).collect();
        let column = Column::from_cards(cards);
        assert!(!column.has_completed_run());
    }
}
